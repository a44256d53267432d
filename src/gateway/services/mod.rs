//! Gateway Services Layer
//!
//! This module contains business logic extracted from handlers.
//! Handlers become thin HTTP adapters that delegate to services.

pub mod order;
pub mod payment;

pub use order::{OrderError, OrderService};
pub use payment::{PAYMENT_SUCCESS_MESSAGE, PaymentService};
