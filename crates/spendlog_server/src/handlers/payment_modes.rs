use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use jiff::Timestamp;
use spendlog_core::model::{PaymentMode, PaymentModeId};

use super::DbConn;
use crate::db::{expenses, payment_modes};
use crate::error::{ApiError, ApiResult};
use crate::models::{CreatePaymentModeRequest, UpdatePaymentModeRequest};
use crate::validation;

fn ensure_name_free(
    conn: &rusqlite::Connection,
    name: &str,
    own_id: Option<PaymentModeId>,
) -> ApiResult<()> {
    match payment_modes::find_by_name(conn, name)? {
        Some(existing) if Some(existing.id) != own_id => Err(ApiError::validation(
            "name",
            format!("A payment mode named '{name}' already exists"),
        )),
        _ => Ok(()),
    }
}

pub async fn list_payment_modes(State(db): State<DbConn>) -> ApiResult<Json<Vec<PaymentMode>>> {
    let conn = db.lock()?;
    Ok(Json(payment_modes::list(&conn)?))
}

pub async fn create_payment_mode(
    State(db): State<DbConn>,
    Json(req): Json<CreatePaymentModeRequest>,
) -> ApiResult<Json<PaymentMode>> {
    validation::validate_payment_mode_name(&req.name)?;
    validation::validate_color(&req.color)?;

    let conn = db.lock()?;
    ensure_name_free(&conn, &req.name, None)?;

    let mode = payment_modes::insert(
        &conn,
        &PaymentMode {
            id: PaymentModeId::default(),
            name: req.name,
            kind: req.kind,
            icon: req.icon,
            color: req.color,
            created_at: Timestamp::now(),
            updated_at: None,
        },
    )?;
    tracing::info!(payment_mode_id = mode.id.0, name = %mode.name, "Created payment mode");

    Ok(Json(mode))
}

pub async fn get_payment_mode(
    State(db): State<DbConn>,
    Path(id): Path<PaymentModeId>,
) -> ApiResult<Json<PaymentMode>> {
    let conn = db.lock()?;
    let mode = payment_modes::get(&conn, id)?.ok_or(ApiError::PaymentModeNotFound(id.0))?;
    Ok(Json(mode))
}

pub async fn update_payment_mode(
    State(db): State<DbConn>,
    Path(id): Path<PaymentModeId>,
    Json(req): Json<UpdatePaymentModeRequest>,
) -> ApiResult<Json<PaymentMode>> {
    if let Some(ref name) = req.name {
        validation::validate_payment_mode_name(name)?;
    }
    if let Some(ref color) = req.color {
        validation::validate_color(color)?;
    }

    let conn = db.lock()?;
    let mut mode = payment_modes::get(&conn, id)?.ok_or(ApiError::PaymentModeNotFound(id.0))?;

    if let Some(name) = req.name {
        ensure_name_free(&conn, &name, Some(id))?;
        mode.name = name;
    }
    if let Some(kind) = req.kind {
        mode.kind = kind;
    }
    if let Some(icon) = req.icon {
        mode.icon = icon;
    }
    if let Some(color) = req.color {
        mode.color = color;
    }
    mode.updated_at = Some(Timestamp::now());

    payment_modes::update(&conn, &mode)?;
    Ok(Json(mode))
}

/// Delete a payment mode. Refused while any expense still references it.
pub async fn delete_payment_mode(
    State(db): State<DbConn>,
    Path(id): Path<PaymentModeId>,
) -> ApiResult<StatusCode> {
    let conn = db.lock()?;

    if payment_modes::get(&conn, id)?.is_none() {
        return Err(ApiError::PaymentModeNotFound(id.0));
    }

    let in_use = expenses::count_for_payment_mode(&conn, id)?;
    if in_use > 0 {
        return Err(ApiError::validation(
            "payment_mode_id",
            format!("Payment mode is used by {in_use} expense(s); reassign or delete them first"),
        ));
    }

    payment_modes::delete(&conn, id)?;
    tracing::info!(payment_mode_id = id.0, "Deleted payment mode");
    Ok(StatusCode::NO_CONTENT)
}
