use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use spendlog_core::LedgerError;

/// Errors returned by the spendlog API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Expense not found: {0}")]
    ExpenseNotFound(i64),

    #[error("Payment mode not found: {0}")]
    PaymentModeNotFound(i64),

    #[error("Budget not found: {0}")]
    BudgetNotFound(i64),

    #[error("Invalid parameter: {field} - {message}")]
    ValidationError { field: String, message: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Mutex lock error")]
    LockError,
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        ApiError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::SerializationError(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ApiError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ApiError::LockError
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidInput { field, reason } => ApiError::ValidationError {
                field: field.to_string(),
                message: reason,
            },
            LedgerError::NotFound(id) => ApiError::ExpenseNotFound(id.0),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::ExpenseNotFound(_)
            | ApiError::PaymentModeNotFound(_)
            | ApiError::BudgetNotFound(_) => {
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }

            ApiError::ValidationError { field, .. } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string(), "field": field }),
            ),

            ApiError::SerializationError(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }

            ApiError::DatabaseError(_) => {
                tracing::error!("Database error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal database error" }),
                )
            }

            ApiError::LockError => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;
