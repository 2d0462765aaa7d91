use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use jiff::Timestamp;
use rusqlite::Connection;
use spendlog_core::model::{ExpenseId, ExpenseUpdate, NewExpense, PaymentModeId};
use spendlog_core::{PaymentRequest, mark_paid, mark_unpaid};

use super::{DbConn, today};
use crate::db::{expenses, payment_modes};
use crate::error::{ApiError, ApiResult};
use crate::models::{ExpenseQuery, ExpenseResponse, PaymentActionResponse};
use crate::validation;

fn ensure_payment_mode(conn: &Connection, id: PaymentModeId) -> ApiResult<()> {
    if payment_modes::get(conn, id)?.is_none() {
        return Err(ApiError::validation(
            "payment_mode_id",
            format!("Payment mode {} does not exist", id.0),
        ));
    }
    Ok(())
}

fn respond(conn: &Connection, expense: spendlog_core::Expense) -> ApiResult<ExpenseResponse> {
    let mode = payment_modes::get(conn, expense.payment_mode_id)?;
    Ok(ExpenseResponse::new(expense, mode))
}

pub async fn list_expenses(
    State(db): State<DbConn>,
    Query(query): Query<ExpenseQuery>,
) -> ApiResult<Json<Vec<ExpenseResponse>>> {
    validation::validate_limit(query.limit)?;
    validation::validate_date_range(query.start_date, query.end_date)?;

    let conn = db.lock()?;
    let found = expenses::list(&conn, &query)?;
    let modes = payment_modes::list(&conn)?;

    Ok(Json(ExpenseResponse::with_modes(found, &modes)))
}

/// Create an expense. With installment mode on, the amount is taken as the
/// principal and replaced by the total payable.
pub async fn create_expense(
    State(db): State<DbConn>,
    Json(input): Json<NewExpense>,
) -> ApiResult<Json<ExpenseResponse>> {
    let conn = db.lock()?;
    ensure_payment_mode(&conn, input.payment_mode_id)?;

    let expense = expenses::insert(&conn, &input.build(Timestamp::now())?)?;
    tracing::info!(
        expense_id = expense.id.0,
        amount = expense.amount,
        installment = expense.is_installment(),
        "Created expense"
    );

    Ok(Json(respond(&conn, expense)?))
}

pub async fn get_expense(
    State(db): State<DbConn>,
    Path(id): Path<ExpenseId>,
) -> ApiResult<Json<ExpenseResponse>> {
    let conn = db.lock()?;
    let expense = expenses::get(&conn, id)?.ok_or(ApiError::ExpenseNotFound(id.0))?;
    Ok(Json(respond(&conn, expense)?))
}

pub async fn update_expense(
    State(db): State<DbConn>,
    Path(id): Path<ExpenseId>,
    Json(update): Json<ExpenseUpdate>,
) -> ApiResult<Json<ExpenseResponse>> {
    let mut conn = db.lock()?;
    if let Some(mode_id) = update.payment_mode_id {
        ensure_payment_mode(&conn, mode_id)?;
    }

    let now = Timestamp::now();
    let expense = expenses::modify(&mut conn, id, now, |current| {
        current.apply_update(&update, now)
    })?;
    tracing::info!(expense_id = id.0, amount = expense.amount, "Updated expense");

    Ok(Json(respond(&conn, expense)?))
}

pub async fn delete_expense(
    State(db): State<DbConn>,
    Path(id): Path<ExpenseId>,
) -> ApiResult<StatusCode> {
    let conn = db.lock()?;

    let affected = expenses::delete(&conn, id)?;
    if affected == 0 {
        Err(ApiError::ExpenseNotFound(id.0))
    } else {
        tracing::info!(expense_id = id.0, "Deleted expense");
        Ok(StatusCode::NO_CONTENT)
    }
}

/// Record one payment. Installment expenses advance by one installment.
pub async fn mark_expense_paid(
    State(db): State<DbConn>,
    Path(id): Path<ExpenseId>,
    Query(request): Query<PaymentRequest>,
) -> ApiResult<Json<PaymentActionResponse>> {
    let mut conn = db.lock()?;
    let today = today();

    let expense = expenses::modify(&mut conn, id, Timestamp::now(), |current| {
        mark_paid(current, request, today)
    })?;
    tracing::info!(
        expense_id = id.0,
        paid_amount = ?expense.payment.paid_amount,
        is_paid = expense.payment.is_paid,
        "Recorded payment"
    );

    Ok(Json(PaymentActionResponse {
        message: "Expense marked as paid".to_string(),
        expense: respond(&conn, expense)?,
    }))
}

/// Reset the payment state of an expense, discarding installment progress
pub async fn mark_expense_unpaid(
    State(db): State<DbConn>,
    Path(id): Path<ExpenseId>,
) -> ApiResult<Json<PaymentActionResponse>> {
    let mut conn = db.lock()?;

    let expense = expenses::modify(&mut conn, id, Timestamp::now(), |current| {
        Ok(mark_unpaid(current))
    })?;
    tracing::info!(expense_id = id.0, "Reset payment state");

    Ok(Json(PaymentActionResponse {
        message: "Expense marked as unpaid".to_string(),
        expense: respond(&conn, expense)?,
    }))
}
