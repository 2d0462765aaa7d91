use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use jiff::Timestamp;
use spendlog_core::model::{Budget, BudgetId};

use super::DbConn;
use crate::db::budgets;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateBudgetRequest, UpdateBudgetRequest};
use crate::validation;

pub async fn list_budgets(State(db): State<DbConn>) -> ApiResult<Json<Vec<Budget>>> {
    let conn = db.lock()?;
    Ok(Json(budgets::list(&conn)?))
}

pub async fn create_budget(
    State(db): State<DbConn>,
    Json(req): Json<CreateBudgetRequest>,
) -> ApiResult<Json<Budget>> {
    validation::validate_budget_category(&req.category)?;
    validation::validate_budget_amount(req.amount)?;

    let conn = db.lock()?;
    let budget = budgets::insert(
        &conn,
        &Budget {
            id: BudgetId::default(),
            category: req.category,
            amount: req.amount,
            month: req.month,
            created_at: Timestamp::now(),
            updated_at: None,
        },
    )?;
    tracing::info!(budget_id = budget.id.0, month = %budget.month, "Created budget");

    Ok(Json(budget))
}

pub async fn get_budget(
    State(db): State<DbConn>,
    Path(id): Path<BudgetId>,
) -> ApiResult<Json<Budget>> {
    let conn = db.lock()?;
    let budget = budgets::get(&conn, id)?.ok_or(ApiError::BudgetNotFound(id.0))?;
    Ok(Json(budget))
}

pub async fn update_budget(
    State(db): State<DbConn>,
    Path(id): Path<BudgetId>,
    Json(req): Json<UpdateBudgetRequest>,
) -> ApiResult<Json<Budget>> {
    if let Some(ref category) = req.category {
        validation::validate_budget_category(category)?;
    }
    if let Some(amount) = req.amount {
        validation::validate_budget_amount(amount)?;
    }

    let conn = db.lock()?;
    let mut budget = budgets::get(&conn, id)?.ok_or(ApiError::BudgetNotFound(id.0))?;

    if let Some(category) = req.category {
        budget.category = category;
    }
    if let Some(amount) = req.amount {
        budget.amount = amount;
    }
    if let Some(month) = req.month {
        budget.month = month;
    }
    budget.updated_at = Some(Timestamp::now());

    budgets::update(&conn, &budget)?;
    Ok(Json(budget))
}

pub async fn delete_budget(
    State(db): State<DbConn>,
    Path(id): Path<BudgetId>,
) -> ApiResult<StatusCode> {
    let conn = db.lock()?;

    let affected = budgets::delete(&conn, id)?;
    if affected == 0 {
        Err(ApiError::BudgetNotFound(id.0))
    } else {
        Ok(StatusCode::NO_CONTENT)
    }
}
