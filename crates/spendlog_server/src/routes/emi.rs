use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{self, DbConn};

pub fn emi_routes() -> Router<DbConn> {
    Router::new()
        .route("/api/emi", get(handlers::list_emis))
        .route("/api/emi/calculate", post(handlers::calculate_emi))
}
