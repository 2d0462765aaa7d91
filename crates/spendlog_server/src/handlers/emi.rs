use axum::{
    Json,
    extract::{Query, State},
};
use spendlog_core::{InstallmentTerms, compute_amortization, project_installment_status};

use super::{DbConn, today};
use crate::api_types::{EmiCalculateResponse, EmiDetails};
use crate::db::{expenses, payment_modes};
use crate::error::ApiResult;
use crate::models::EmiQuery;
use crate::validation;

/// Installment expenses with their projected progress.
///
/// Expenses flagged as installment but missing usable terms are skipped.
pub async fn list_emis(
    State(db): State<DbConn>,
    Query(query): Query<EmiQuery>,
) -> ApiResult<Json<Vec<EmiDetails>>> {
    validation::validate_limit(query.limit)?;

    let conn = db.lock()?;
    let installments = expenses::list_installments(&conn, query.skip, query.limit)?;
    let modes = payment_modes::list(&conn)?;
    let as_of = today();

    let details = installments
        .iter()
        .filter_map(|expense| {
            let (Some(plan), Some(status)) =
                (expense.plan(), project_installment_status(expense, as_of))
            else {
                tracing::debug!(expense_id = expense.id.0, "Skipping installment without terms");
                return None;
            };
            let mode_name = modes
                .iter()
                .find(|m| m.id == expense.payment_mode_id)
                .map(|m| m.name.clone())
                .unwrap_or_default();
            Some(EmiDetails::new(expense, plan, status, mode_name))
        })
        .collect();

    Ok(Json(details))
}

/// Preview an installment plan without storing anything
pub async fn calculate_emi(
    Json(terms): Json<InstallmentTerms>,
) -> ApiResult<Json<EmiCalculateResponse>> {
    let amortization = compute_amortization(&terms)?;
    Ok(Json(EmiCalculateResponse::new(&terms, &amortization)))
}
