//! HTTP handlers, one submodule per resource

pub mod customer;
pub mod health;
pub mod order;
pub mod payment;
pub mod product;

// Re-export handler functions for routing and OpenAPI
pub use customer::{create_customer, get_customer, list_customers};
pub use health::{HealthResponse, health_check};
pub use order::{get_order_status, list_orders, place_order, update_order_status};
pub use payment::make_payment;
pub use product::{create_product, get_product, list_products};

