mod api_types;
mod config;
mod db;
mod error;
mod handlers;
mod logging;
mod models;
mod routes;
mod validation;

use std::sync::{Arc, Mutex};

use axum::{Router, http::HeaderValue, routing::get};
use clap::Parser;
use color_eyre::eyre::WrapErr;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use config::{Args, ServerConfig};
use handlers::DbConn;

fn cors_layer(origins: &[String]) -> color_eyre::Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).wrap_err_with(|| format!("invalid origin {origin:?}"))
        })
        .collect::<color_eyre::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

fn app(db: DbConn, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(|| async { "Spendlog API Server" }))
        .merge(routes::payment_mode_routes())
        .merge(routes::expense_routes())
        .merge(routes::emi_routes())
        .merge(routes::bill_routes())
        .merge(routes::budget_routes())
        .merge(routes::dashboard_routes())
        .with_state(db)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_args(Args::parse());
    let _log_guard = logging::init_logging(&config.log_level, config.log_dir.as_deref())?;

    if !config.in_memory() {
        std::fs::create_dir_all(&config.data_dir)
            .wrap_err_with(|| format!("creating {}", config.data_dir.display()))?;
    }

    let conn = db::open(&config.database)
        .wrap_err_with(|| format!("opening {}", config.database.display()))?;
    db::init_db(&conn)?;
    tracing::info!(database = %config.database.display(), "Database ready");

    let db: DbConn = Arc::new(Mutex::new(conn));
    let app = app(db, cors_layer(&config.allowed_origins)?);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("binding {}", config.bind))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
