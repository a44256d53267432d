//! Response bodies and the HTTP error type
//!
//! - Success bodies are the records themselves (no envelope)
//! - Errors carry a single human readable `detail` string
//! - `ApiError` is what every handler returns on failure

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::services::OrderError;

// ============================================================================
// Response DTOs
// ============================================================================

/// Order status view
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderStatusData {
    #[schema(example = 1)]
    pub order_id: i64,
    #[schema(example = "pending")]
    pub status: String,
}

/// Payment acknowledgment
#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentData {
    #[schema(example = "Payment successful")]
    pub message: String,
}

/// Error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Order not found")]
    pub detail: String,
}

// ============================================================================
// ApiError
// ============================================================================

/// Terminal error for one request
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Wrap a success body
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    /// Storage failure. The cause is logged here and never sent to the client.
    pub fn db_error(cause: impl std::fmt::Display) -> Self {
        tracing::error!("storage error: {:#}", cause);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { detail: self.detail })).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::CustomerNotFound
            | OrderError::ProductNotFound(_)
            | OrderError::OrderNotFound => ApiError::not_found(err.to_string()),
            OrderError::AmountMismatch { .. } => ApiError::bad_request(err.to_string()),
            OrderError::Storage(e) => ApiError::db_error(format!("{:#}", e)),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::db_error(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err: ApiError = OrderError::ProductNotFound(9).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail, "Product with id 9 not found");

        let err: ApiError = OrderError::CustomerNotFound.into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.detail, "Customer not found");
    }

    #[test]
    fn test_amount_mismatch_is_bad_request() {
        let err: ApiError = OrderError::AmountMismatch {
            expected: 25.0,
            got: 24.99,
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.detail,
            "Payment amount does not match order total. Expected 25.0, got 24.99"
        );
    }

    #[test]
    fn test_storage_error_hides_cause() {
        let err: ApiError = OrderError::Storage(anyhow::anyhow!("disk I/O error")).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, "Internal server error");
    }
}
