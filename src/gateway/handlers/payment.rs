//! Payment handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::state::AppState;
use super::super::types::{ApiResult, ErrorResponse, PaymentData, PaymentRequest, ok};

/// Make a payment
///
/// POST /payments/
///
/// Succeeds only when `amount` equals the order total exactly.
#[utoipa::path(
    post,
    path = "/payments/",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment accepted", body = PaymentData),
        (status = 400, description = "Amount does not match order total", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Payments"
)]
pub async fn make_payment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PaymentRequest>,
) -> ApiResult<PaymentData> {
    let message = state
        .payment_service()
        .make_payment(req.order_id, req.amount, &req.payment_method)
        .await?;
    ok(PaymentData {
        message: message.to_string(),
    })
}
