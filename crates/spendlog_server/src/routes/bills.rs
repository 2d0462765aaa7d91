use axum::{Router, routing::get};

use crate::handlers::{self, DbConn};

pub fn bill_routes() -> Router<DbConn> {
    Router::new().route("/api/bills", get(handlers::get_bills))
}
