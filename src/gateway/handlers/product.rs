//! Product handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, CreateProductRequest, ErrorResponse, ok};
use crate::models::Product;

/// List all products
///
/// GET /products/
#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "All products", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Product>> {
    ok(state.products.list().await?)
}

/// Create a product
///
/// POST /products/
#[utoipa::path(
    post,
    path = "/products/",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product", body = Product),
        (status = 422, description = "Malformed body")
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<Product> {
    let product = state.products.create(req.into()).await?;
    tracing::info!(product_id = product.id, price = product.price, "Product created");
    ok(product)
}

/// Get a product by id
///
/// GET /products/{product_id}
#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> ApiResult<Product> {
    match state.products.get(product_id).await? {
        Some(product) => ok(product),
        None => ApiError::not_found("Product not found").into_err(),
    }
}
