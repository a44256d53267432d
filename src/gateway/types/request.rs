//! Request bodies
//!
//! Only shape and type are checked; axum's `Json` extractor rejects bodies
//! that do not deserialize before any handler code runs.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{NewCustomer, NewProduct};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "+30 210 0000000")]
    pub phone: String,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(req: CreateCustomerRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Keyboard")]
    pub name: String,
    #[schema(example = 49.9)]
    pub price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
        }
    }
}

/// Place order request. Product ids may repeat; each occurrence is charged.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    #[schema(example = 1)]
    pub customer_id: i64,
    #[schema(example = json!([1, 1, 2]))]
    pub products: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "shipped")]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PaymentRequest {
    #[schema(example = 1)]
    pub order_id: i64,
    #[schema(example = 25.0)]
    pub amount: f64,
    /// Free-form label, accepted and ignored
    #[schema(example = "card")]
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_keeps_duplicates_and_sequence() {
        let req: PlaceOrderRequest =
            serde_json::from_str(r#"{"customer_id": 7, "products": [3, 1, 3]}"#).unwrap();
        assert_eq!(req.customer_id, 7);
        assert_eq!(req.products, vec![3, 1, 3]);
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let res = serde_json::from_str::<CreateProductRequest>(r#"{"name": "x", "price": "cheap"}"#);
        assert!(res.is_err());
        let res = serde_json::from_str::<CreateCustomerRequest>(r#"{"name": "x", "email": "y"}"#);
        assert!(res.is_err(), "phone is required");
    }

    #[test]
    fn test_integer_price_is_accepted() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name": "Pen", "price": 10}"#).unwrap();
        assert_eq!(req.price, 10.0);
    }
}
