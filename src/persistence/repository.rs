//! Repository traits for data access abstraction
//!
//! Handlers and services only see these traits; the SQLite implementations
//! live next to them in this module tree and are wired up in `AppState`.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Customer, NewCustomer, NewOrder, NewProduct, Order, Product};

// ============================================================================
// Customer Repository
// ============================================================================

/// Repository trait for Customer data access
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a customer and return it with its assigned id
    async fn create(&self, customer: NewCustomer) -> Result<Customer>;

    /// Get a single customer by id
    async fn get(&self, id: i64) -> Result<Option<Customer>>;

    /// All customers in store order
    async fn list(&self) -> Result<Vec<Customer>>;
}

// ============================================================================
// Product Repository
// ============================================================================

/// Repository trait for Product data access
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: NewProduct) -> Result<Product>;

    async fn get(&self, id: i64) -> Result<Option<Product>>;

    async fn list(&self) -> Result<Vec<Product>>;
}

// ============================================================================
// Order Repository
// ============================================================================

/// Repository trait for Order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<Order>;

    async fn get(&self, id: i64) -> Result<Option<Order>>;

    async fn list(&self) -> Result<Vec<Order>>;

    /// Overwrite the status of an order.
    ///
    /// Returns the updated order, or `None` when no order has this id.
    async fn update_status(&self, id: i64, status: &str) -> Result<Option<Order>>;
}
