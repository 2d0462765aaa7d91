use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers::{self, DbConn};

pub fn payment_mode_routes() -> Router<DbConn> {
    Router::new()
        .route("/api/payment-modes", get(handlers::list_payment_modes))
        .route("/api/payment-modes", post(handlers::create_payment_mode))
        .route("/api/payment-modes/{id}", get(handlers::get_payment_mode))
        .route("/api/payment-modes/{id}", put(handlers::update_payment_mode))
        .route("/api/payment-modes/{id}", delete(handlers::delete_payment_mode))
}
