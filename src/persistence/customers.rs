use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::repository::CustomerRepository;
use crate::models::{Customer, NewCustomer};

/// SQLite-backed customer repository
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn create(&self, customer: NewCustomer) -> Result<Customer> {
        let row: Customer = sqlx::query_as(
            r#"INSERT INTO customers (name, email, phone) VALUES (?, ?, ?)
               RETURNING id, name, email, phone"#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(&self.pool)
        .await
        .context("insert customer")?;

        Ok(row)
    }

    async fn get(&self, id: i64) -> Result<Option<Customer>> {
        let row: Option<Customer> =
            sqlx::query_as(r#"SELECT id, name, email, phone FROM customers WHERE id = ?"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("select customer {}", id))?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        let rows: Vec<Customer> =
            sqlx::query_as(r#"SELECT id, name, email, phone FROM customers ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .context("select customers")?;

        Ok(rows)
    }
}
