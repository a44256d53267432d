use std::sync::Arc;

use crate::db::Database;
use crate::persistence::{
    CustomerRepository, OrderRepository, ProductRepository, SqliteCustomerRepository,
    SqliteOrderRepository, SqliteProductRepository,
};

use super::services::{OrderService, PaymentService};

/// Gateway application state (shared by every handler)
#[derive(Clone)]
pub struct AppState {
    /// Pooled SQLite handle, used directly only for health checks
    pub db: Arc<Database>,
    pub customers: Arc<dyn CustomerRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    /// Wire the SQLite repositories onto one shared pool
    pub fn new(db: Arc<Database>) -> Self {
        let pool = db.pool().clone();
        Self {
            customers: Arc::new(SqliteCustomerRepository::new(pool.clone())),
            products: Arc::new(SqliteProductRepository::new(pool.clone())),
            orders: Arc::new(SqliteOrderRepository::new(pool)),
            db,
        }
    }

    pub fn order_service(&self) -> OrderService<'_> {
        OrderService::new(
            self.customers.as_ref(),
            self.products.as_ref(),
            self.orders.as_ref(),
        )
    }

    pub fn payment_service(&self) -> PaymentService<'_> {
        PaymentService::new(self.orders.as_ref())
    }
}
