//! Dashboard endpoints, all evaluated for the current calendar month

use axum::{Json, extract::State};
use spendlog_core::analytics::{
    self, BudgetUsage, CategoryBreakdown, DashboardOverview, ExpenseTrend, Insight,
};

use super::{DbConn, today};
use crate::db::{budgets, expenses, payment_modes};
use crate::error::ApiResult;

pub async fn get_dashboard_overview(
    State(db): State<DbConn>,
) -> ApiResult<Json<DashboardOverview>> {
    let conn = db.lock()?;
    let all = expenses::list_all(&conn)?;
    let modes = payment_modes::list(&conn)?;
    Ok(Json(analytics::overview(&all, &modes, today())))
}

pub async fn get_category_breakdown(
    State(db): State<DbConn>,
) -> ApiResult<Json<Vec<CategoryBreakdown>>> {
    let conn = db.lock()?;
    let all = expenses::list_all(&conn)?;
    Ok(Json(analytics::category_breakdown(&all, today())))
}

pub async fn get_budget_usage(State(db): State<DbConn>) -> ApiResult<Json<Vec<BudgetUsage>>> {
    let conn = db.lock()?;
    let all = expenses::list_all(&conn)?;
    let budgets = budgets::list(&conn)?;
    Ok(Json(analytics::budget_usage(&all, &budgets, today())))
}

pub async fn get_insights(State(db): State<DbConn>) -> ApiResult<Json<Vec<Insight>>> {
    let conn = db.lock()?;
    let all = expenses::list_all(&conn)?;
    let budgets = budgets::list(&conn)?;
    Ok(Json(analytics::insights(&all, &budgets, today())))
}

pub async fn get_expense_trends(State(db): State<DbConn>) -> ApiResult<Json<Vec<ExpenseTrend>>> {
    let conn = db.lock()?;
    let all = expenses::list_all(&conn)?;
    Ok(Json(analytics::expense_trends(&all, today())))
}
