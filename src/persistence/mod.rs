// Persistence module for the SQLite store
pub mod customers;
pub mod orders;
pub mod products;
pub mod repository;
pub mod schema;

pub use customers::SqliteCustomerRepository;
pub use orders::SqliteOrderRepository;
pub use products::SqliteProductRepository;
pub use repository::{CustomerRepository, OrderRepository, ProductRepository};

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;
    use tempfile::TempDir;

    /// Fresh file-backed pool with the schema applied. Keep the `TempDir`
    /// alive for as long as the pool is used.
    pub async fn test_pool() -> (TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let pool = SqlitePool::connect(&url).await.unwrap();
        super::schema::init_schema(&pool).await.unwrap();
        (dir, pool)
    }
}
