//! Order handlers (place, list, status)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use super::super::state::AppState;
use super::super::types::{
    ApiResult, ErrorResponse, OrderStatusData, PlaceOrderRequest, UpdateOrderStatusRequest, ok,
};
use crate::models::Order;

/// Place a new order
///
/// POST /orders/
#[utoipa::path(
    post,
    path = "/orders/",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Created order", body = Order),
        (status = 404, description = "Customer or product not found", body = ErrorResponse),
        (status = 422, description = "Malformed body")
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaceOrderRequest>,
) -> ApiResult<Order> {
    let order = state
        .order_service()
        .place_order(req.customer_id, &req.products)
        .await?;
    ok(order)
}

/// List all orders
///
/// GET /orders/
#[utoipa::path(
    get,
    path = "/orders/",
    responses(
        (status = 200, description = "All orders", body = Vec<Order>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Order>> {
    ok(state.orders.list().await?)
}

/// Get order status
///
/// GET /orders/status/{order_id}
#[utoipa::path(
    get,
    path = "/orders/status/{order_id}",
    params(
        ("order_id" = i64, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "Order status", body = OrderStatusData),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn get_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
) -> ApiResult<OrderStatusData> {
    let order = state.order_service().get_order(order_id).await?;
    ok(OrderStatusData {
        order_id: order.id,
        status: order.status,
    })
}

/// Update order status
///
/// PATCH /orders/{order_id}/status
///
/// Any string is accepted; there are no transition rules.
#[utoipa::path(
    patch,
    path = "/orders/{order_id}/status",
    params(
        ("order_id" = i64, Path, description = "Order id")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Updated status", body = OrderStatusData),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<i64>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> ApiResult<OrderStatusData> {
    let order = state
        .order_service()
        .update_status(order_id, &req.status)
        .await?;
    ok(OrderStatusData {
        order_id: order.id,
        status: order.status,
    })
}
