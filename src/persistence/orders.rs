use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::repository::OrderRepository;
use crate::models::{NewOrder, Order};

/// SQLite-backed order repository
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order> {
        let row: Order = sqlx::query_as(
            r#"INSERT INTO orders (customer_id, total_price, status) VALUES (?, ?, ?)
               RETURNING id, customer_id, total_price, status"#,
        )
        .bind(order.customer_id)
        .bind(order.total_price)
        .bind(&order.status)
        .fetch_one(&self.pool)
        .await
        .context("insert order")?;

        Ok(row)
    }

    async fn get(&self, id: i64) -> Result<Option<Order>> {
        let row: Option<Order> = sqlx::query_as(
            r#"SELECT id, customer_id, total_price, status FROM orders WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("select order {}", id))?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let rows: Vec<Order> = sqlx::query_as(
            r#"SELECT id, customer_id, total_price, status FROM orders ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .context("select orders")?;

        Ok(rows)
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<Option<Order>> {
        // Last write wins; no transition rules.
        let row: Option<Order> = sqlx::query_as(
            r#"UPDATE orders SET status = ? WHERE id = ?
               RETURNING id, customer_id, total_price, status"#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("update status of order {}", id))?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewCustomer;
    use crate::persistence::customers::SqliteCustomerRepository;
    use crate::persistence::repository::CustomerRepository;
    use crate::persistence::test_support::test_pool;

    async fn seed_customer(pool: &SqlitePool) -> i64 {
        SqliteCustomerRepository::new(pool.clone())
            .create(NewCustomer {
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                phone: "555-0101".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_order_defaults() {
        let (_dir, pool) = test_pool().await;
        let customer_id = seed_customer(&pool).await;
        let repo = SqliteOrderRepository::new(pool);

        let order = repo.create(NewOrder::pending(customer_id, 25.0)).await.unwrap();
        assert_eq!(order.customer_id, customer_id);
        assert_eq!(order.total_price, 25.0);
        assert_eq!(order.status, "pending");
    }

    #[tokio::test]
    async fn test_update_status_overwrites_any_value() {
        let (_dir, pool) = test_pool().await;
        let customer_id = seed_customer(&pool).await;
        let repo = SqliteOrderRepository::new(pool);
        let order = repo.create(NewOrder::pending(customer_id, 1.0)).await.unwrap();

        for status in ["shipped", "pending", "definitely-not-a-state", "shipped"] {
            let updated = repo.update_status(order.id, status).await.unwrap().unwrap();
            assert_eq!(updated.status, status);
            assert_eq!(repo.get(order.id).await.unwrap().unwrap().status, status);
        }
        // total is never recomputed
        assert_eq!(repo.get(order.id).await.unwrap().unwrap().total_price, 1.0);
    }

    #[tokio::test]
    async fn test_update_status_unknown_order() {
        let (_dir, pool) = test_pool().await;
        let repo = SqliteOrderRepository::new(pool);
        assert!(repo.update_status(99, "shipped").await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_every_order_once() {
        let (_dir, pool) = test_pool().await;
        let customer_id = seed_customer(&pool).await;
        let repo = SqliteOrderRepository::new(pool);

        let mut created = Vec::new();
        for total in [10.0, 10.0, 25.0] {
            created.push(repo.create(NewOrder::pending(customer_id, total)).await.unwrap());
        }
        let shipped = repo
            .update_status(created[2].id, "shipped")
            .await
            .unwrap()
            .unwrap();
        created[2] = shipped;

        assert_eq!(repo.list().await.unwrap(), created);
    }
}
