use axum::{
    Json,
    extract::{Query, State},
};
use spendlog_core::bills::summarize_bills;

use super::DbConn;
use crate::db::{expenses, payment_modes};
use crate::error::ApiResult;
use crate::models::{BillResponse, BillsQuery};
use crate::validation;

/// Bill summaries per payment mode, optionally for one month
pub async fn get_bills(
    State(db): State<DbConn>,
    Query(query): Query<BillsQuery>,
) -> ApiResult<Json<Vec<BillResponse>>> {
    let period = validation::bills_period(&query)?;

    let conn = db.lock()?;
    let modes = payment_modes::list(&conn)?;
    let all = expenses::list_all(&conn)?;

    let bills = summarize_bills(&modes, &all, period)
        .into_iter()
        .map(BillResponse::from)
        .collect();

    Ok(Json(bills))
}
