pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the complete router.
///
/// Collection routes answer both with and without the trailing slash.
pub fn router(state: Arc<AppState>) -> Router {
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Customers
        .route(
            "/customers/",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/customers",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route("/customers/{customer_id}", get(handlers::get_customer))
        // Products
        .route(
            "/products/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/products/{product_id}", get(handlers::get_product))
        // Orders
        .route(
            "/orders/",
            get(handlers::list_orders).post(handlers::place_order),
        )
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::place_order),
        )
        .route("/orders/status/{order_id}", get(handlers::get_order_status))
        .route(
            "/orders/{order_id}/status",
            patch(handlers::update_order_status),
        )
        // Payments
        .route("/payments/", post(handlers::make_payment))
        .route("/payments", post(handlers::make_payment));

    app.with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start HTTP server and serve until the process is stopped
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (port already in use?)", addr))?;

    tracing::info!("🚀 Order service listening on http://{}", addr);
    tracing::info!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
