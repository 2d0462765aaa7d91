use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers::{self, DbConn};

pub fn budget_routes() -> Router<DbConn> {
    Router::new()
        .route("/api/budgets", get(handlers::list_budgets))
        .route("/api/budgets", post(handlers::create_budget))
        .route("/api/budgets/{id}", get(handlers::get_budget))
        .route("/api/budgets/{id}", put(handlers::update_budget))
        .route("/api/budgets/{id}", delete(handlers::delete_budget))
}
