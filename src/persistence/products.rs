use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::repository::ProductRepository;
use crate::models::{NewProduct, Product};

/// SQLite-backed product repository
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product> {
        let row: Product = sqlx::query_as(
            r#"INSERT INTO products (name, price) VALUES (?, ?) RETURNING id, name, price"#,
        )
        .bind(&product.name)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await
        .context("insert product")?;

        Ok(row)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>> {
        let row: Option<Product> =
            sqlx::query_as(r#"SELECT id, name, price FROM products WHERE id = ?"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("select product {}", id))?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Product>> {
        let rows: Vec<Product> = sqlx::query_as(r#"SELECT id, name, price FROM products ORDER BY id"#)
            .fetch_all(&self.pool)
            .await
            .context("select products")?;

        Ok(rows)
    }
}
