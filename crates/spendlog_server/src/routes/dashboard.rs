use axum::{Router, routing::get};

use crate::handlers::{self, DbConn};

pub fn dashboard_routes() -> Router<DbConn> {
    Router::new()
        .route(
            "/api/dashboard/overview",
            get(handlers::get_dashboard_overview),
        )
        .route(
            "/api/dashboard/category-breakdown",
            get(handlers::get_category_breakdown),
        )
        .route(
            "/api/dashboard/budget-usage",
            get(handlers::get_budget_usage),
        )
        .route("/api/dashboard/insights", get(handlers::get_insights))
        .route(
            "/api/dashboard/expense-trends",
            get(handlers::get_expense_trends),
        )
}
