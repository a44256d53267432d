//! Gateway types module
//!
//! ## Input Types
//! - [`request`]: JSON request bodies, converted into the `New*` model inserts
//!
//! ## Output Types
//! - [`response`]: status/payment views, [`ErrorResponse`] and [`ApiError`]

pub mod request;
pub mod response;

pub use request::{
    CreateCustomerRequest, CreateProductRequest, PaymentRequest, PlaceOrderRequest,
    UpdateOrderStatusRequest,
};
pub use response::{ApiError, ApiResult, ErrorResponse, OrderStatusData, PaymentData, ok};
