//! Order Service
//!
//! A small order-management backend: customers, products, orders and payment
//! verification over REST, stored in a single SQLite file.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - SQLite connection pool
//! - [`models`] - Customer, Product and Order records
//! - [`persistence`] - Repository traits and their SQLite implementations
//! - [`gateway`] - HTTP router, handlers, services and OpenAPI docs

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod persistence;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use gateway::state::AppState;
pub use models::{Customer, DEFAULT_ORDER_STATUS, Order, Product};
