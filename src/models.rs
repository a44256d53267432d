//! Persisted entity records
//!
//! Rows map one-to-one onto the `customers`, `products` and `orders` tables.
//! Field names double as the JSON field names on the HTTP surface.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Status every order starts in. Status is free text afterwards.
pub const DEFAULT_ORDER_STATUS: &str = "pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "+30 210 0000000")]
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Keyboard")]
    pub name: String,
    #[schema(example = 49.9)]
    pub price: f64,
}

/// Order record. The product ids an order was placed with are not kept;
/// only their summed price survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub customer_id: i64,
    #[schema(example = 25.0)]
    pub total_price: f64,
    #[schema(example = "pending")]
    pub status: String,
}

/// Fields needed to insert a customer
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Fields needed to insert a product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Fields needed to insert an order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: i64,
    pub total_price: f64,
    pub status: String,
}

impl NewOrder {
    pub fn pending(customer_id: i64, total_price: f64) -> Self {
        Self {
            customer_id,
            total_price,
            status: DEFAULT_ORDER_STATUS.to_string(),
        }
    }
}
