//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8000/docs`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    CreateCustomerRequest, CreateProductRequest, ErrorResponse, OrderStatusData, PaymentData,
    PaymentRequest, PlaceOrderRequest, UpdateOrderStatusRequest,
};
use crate::models::{Customer, Order, Product};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "Customers, products, orders and payment verification.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::customer::list_customers,
        crate::gateway::handlers::customer::create_customer,
        crate::gateway::handlers::customer::get_customer,
        crate::gateway::handlers::product::list_products,
        crate::gateway::handlers::product::create_product,
        crate::gateway::handlers::product::get_product,
        crate::gateway::handlers::order::place_order,
        crate::gateway::handlers::order::list_orders,
        crate::gateway::handlers::order::get_order_status,
        crate::gateway::handlers::order::update_order_status,
        crate::gateway::handlers::payment::make_payment,
    ),
    components(
        schemas(
            HealthResponse,
            Customer,
            Product,
            Order,
            CreateCustomerRequest,
            CreateProductRequest,
            PlaceOrderRequest,
            UpdateOrderStatusRequest,
            PaymentRequest,
            OrderStatusData,
            PaymentData,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Customers", description = "Customer records"),
        (name = "Products", description = "Product catalog"),
        (name = "Orders", description = "Order placement and status"),
        (name = "Payments", description = "Payment verification against order totals"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
