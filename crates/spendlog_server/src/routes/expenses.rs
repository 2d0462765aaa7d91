use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers::{self, DbConn};

pub fn expense_routes() -> Router<DbConn> {
    Router::new()
        // Expense CRUD
        .route("/api/expenses", get(handlers::list_expenses))
        .route("/api/expenses", post(handlers::create_expense))
        .route("/api/expenses/{id}", get(handlers::get_expense))
        .route("/api/expenses/{id}", put(handlers::update_expense))
        .route("/api/expenses/{id}", delete(handlers::delete_expense))
        // Payment actions
        .route(
            "/api/expenses/{id}/mark-paid",
            post(handlers::mark_expense_paid),
        )
        .route(
            "/api/expenses/{id}/mark-unpaid",
            post(handlers::mark_expense_unpaid),
        )
}
