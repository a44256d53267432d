//! Order Service - business logic for order placement and status
//!
//! Handlers stay thin HTTP adapters; everything that decides an outcome
//! lives here so it can be tested against a bare store.

use thiserror::Error;

use crate::models::{NewOrder, Order};
use crate::persistence::{CustomerRepository, OrderRepository, ProductRepository};

/// Order service error
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Customer not found")]
    CustomerNotFound,

    #[error("Product with id {0} not found")]
    ProductNotFound(i64),

    #[error("Order not found")]
    OrderNotFound,

    #[error(
        "Payment amount does not match order total. Expected {}, got {}",
        format_amount(.expected),
        format_amount(.got)
    )]
    AmountMismatch { expected: f64, got: f64 },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Shortest round-trip form with a signed, two-digit exponent
/// (`25.0`, `24.99`, `1e+16`, `1e-05`).
pub fn format_amount(value: &f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Order Service - handles all order-related business logic
pub struct OrderService<'a> {
    customers: &'a dyn CustomerRepository,
    products: &'a dyn ProductRepository,
    orders: &'a dyn OrderRepository,
}

impl<'a> OrderService<'a> {
    pub fn new(
        customers: &'a dyn CustomerRepository,
        products: &'a dyn ProductRepository,
        orders: &'a dyn OrderRepository,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Place a new order.
    ///
    /// The total is the sum of the listed products' current prices, in list
    /// order, one charge per occurrence. Nothing is written unless every id
    /// resolves.
    pub async fn place_order(
        &self,
        customer_id: i64,
        product_ids: &[i64],
    ) -> Result<Order, OrderError> {
        if self.customers.get(customer_id).await?.is_none() {
            tracing::warn!(customer_id, "Place order rejected: unknown customer");
            return Err(OrderError::CustomerNotFound);
        }

        let mut total_price = 0.0;
        for &pid in product_ids {
            let product = self
                .products
                .get(pid)
                .await?
                .ok_or(OrderError::ProductNotFound(pid))?;
            total_price += product.price;
        }

        let order = self
            .orders
            .create(NewOrder::pending(customer_id, total_price))
            .await?;

        tracing::info!(
            order_id = order.id,
            customer_id,
            items = product_ids.len(),
            total_price = order.total_price,
            "Order placed"
        );
        Ok(order)
    }

    pub async fn get_order(&self, order_id: i64) -> Result<Order, OrderError> {
        self.orders
            .get(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound)
    }

    /// Overwrite an order's status with any string
    pub async fn update_status(&self, order_id: i64, status: &str) -> Result<Order, OrderError> {
        let order = self
            .orders
            .update_status(order_id, status)
            .await?
            .ok_or(OrderError::OrderNotFound)?;

        tracing::info!(order_id, status = %order.status, "Order status updated");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewCustomer, NewProduct};
    use crate::persistence::test_support::test_pool;
    use crate::persistence::{
        SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
    };

    struct TestHarness {
        _dir: tempfile::TempDir,
        customers: SqliteCustomerRepository,
        products: SqliteProductRepository,
        orders: SqliteOrderRepository,
    }

    impl TestHarness {
        async fn new() -> Self {
            let (dir, pool) = test_pool().await;
            Self {
                _dir: dir,
                customers: SqliteCustomerRepository::new(pool.clone()),
                products: SqliteProductRepository::new(pool.clone()),
                orders: SqliteOrderRepository::new(pool),
            }
        }

        fn service(&self) -> OrderService<'_> {
            OrderService::new(&self.customers, &self.products, &self.orders)
        }

        async fn customer(&self) -> i64 {
            self.customers
                .create(NewCustomer {
                    name: "Carol".to_string(),
                    email: "carol@example.com".to_string(),
                    phone: "555-0102".to_string(),
                })
                .await
                .unwrap()
                .id
        }

        async fn product(&self, price: f64) -> i64 {
            self.products
                .create(NewProduct {
                    name: format!("item-{}", price),
                    price,
                })
                .await
                .unwrap()
                .id
        }
    }

    #[tokio::test]
    async fn test_total_counts_duplicates() {
        let h = TestHarness::new().await;
        let customer_id = h.customer().await;
        let p10 = h.product(10.0).await;
        let p5 = h.product(5.0).await;

        let order = h
            .service()
            .place_order(customer_id, &[p10, p10, p5])
            .await
            .unwrap();
        assert_eq!(order.total_price, 25.0);
        assert_eq!(order.status, "pending");
    }

    #[tokio::test]
    async fn test_empty_product_list_costs_nothing() {
        let h = TestHarness::new().await;
        let customer_id = h.customer().await;

        let order = h.service().place_order(customer_id, &[]).await.unwrap();
        assert_eq!(order.total_price, 0.0);
    }

    #[tokio::test]
    async fn test_unknown_customer_creates_nothing() {
        let h = TestHarness::new().await;
        let p = h.product(1.0).await;

        let err = h.service().place_order(404, &[p]).await.unwrap_err();
        assert!(matches!(err, OrderError::CustomerNotFound));
        assert!(h.orders.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_product_names_first_missing_id() {
        let h = TestHarness::new().await;
        let customer_id = h.customer().await;
        let p = h.product(3.0).await;

        let err = h
            .service()
            .place_order(customer_id, &[p, 777, 888])
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::ProductNotFound(777)));
        assert!(h.orders.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_status_unknown_order() {
        let h = TestHarness::new().await;
        let err = h.service().update_status(5, "shipped").await.unwrap_err();
        assert!(matches!(err, OrderError::OrderNotFound));
    }

    #[test]
    fn test_format_amount_plain_values() {
        assert_eq!(format_amount(&25.0), "25.0");
        assert_eq!(format_amount(&24.99), "24.99");
        assert_eq!(format_amount(&0.1), "0.1");
        assert_eq!(format_amount(&-3.5), "-3.5");
    }

    #[test]
    fn test_format_amount_exponent_form() {
        assert_eq!(format_amount(&1e16), "1e+16");
        assert_eq!(format_amount(&1.5e300), "1.5e+300");
        assert_eq!(format_amount(&1e-5), "1e-05");
        assert_eq!(format_amount(&2.5e-7), "2.5e-07");
        assert_eq!(format_amount(&f64::NAN), "nan");
    }

    #[test]
    fn test_amount_mismatch_message() {
        let err = OrderError::AmountMismatch {
            expected: 1e16,
            got: 1e-5,
        };
        assert_eq!(
            err.to_string(),
            "Payment amount does not match order total. Expected 1e+16, got 1e-05"
        );
    }
}
