//! Customer handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, CreateCustomerRequest, ErrorResponse, ok};
use crate::models::Customer;

/// List all customers
///
/// GET /customers/
#[utoipa::path(
    get,
    path = "/customers/",
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>)
    ),
    tag = "Customers"
)]
pub async fn list_customers(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Customer>> {
    ok(state.customers.list().await?)
}

/// Create a customer
///
/// POST /customers/
#[utoipa::path(
    post,
    path = "/customers/",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Created customer", body = Customer),
        (status = 422, description = "Malformed body")
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCustomerRequest>,
) -> ApiResult<Customer> {
    let customer = state.customers.create(req.into()).await?;
    tracing::info!(customer_id = customer.id, "Customer created");
    ok(customer)
}

/// Get a customer by id
///
/// GET /customers/{customer_id}
#[utoipa::path(
    get,
    path = "/customers/{customer_id}",
    params(
        ("customer_id" = i64, Path, description = "Customer id")
    ),
    responses(
        (status = 200, description = "Customer", body = Customer),
        (status = 404, description = "Customer not found", body = ErrorResponse)
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<i64>,
) -> ApiResult<Customer> {
    match state.customers.get(customer_id).await? {
        Some(customer) => ok(customer),
        None => ApiError::not_found("Customer not found").into_err(),
    }
}
