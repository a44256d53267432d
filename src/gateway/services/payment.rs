//! Payment verification
//!
//! A payment is checked against the stored order total and acknowledged.
//! Nothing is recorded and the order is left as it was.

use super::order::OrderError;
use crate::persistence::OrderRepository;

pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment successful";

pub struct PaymentService<'a> {
    orders: &'a dyn OrderRepository,
}

impl<'a> PaymentService<'a> {
    pub fn new(orders: &'a dyn OrderRepository) -> Self {
        Self { orders }
    }

    /// Verify `amount` against the order total.
    ///
    /// The comparison is exact f64 equality with no tolerance.
    pub async fn make_payment(
        &self,
        order_id: i64,
        amount: f64,
        payment_method: &str,
    ) -> Result<&'static str, OrderError> {
        let order = self
            .orders
            .get(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound)?;

        if amount != order.total_price {
            tracing::warn!(
                order_id,
                expected = order.total_price,
                got = amount,
                "Payment rejected: amount mismatch"
            );
            return Err(OrderError::AmountMismatch {
                expected: order.total_price,
                got: amount,
            });
        }

        tracing::info!(order_id, amount, payment_method, "Payment accepted");
        Ok(PAYMENT_SUCCESS_MESSAGE)
    }
}
