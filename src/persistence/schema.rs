use anyhow::{Context, Result};
use sqlx::SqlitePool;

/// Create tables and indexes if they do not exist yet.
///
/// There is no migration step: an existing table with an older layout is
/// left untouched.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Initializing SQLite schema...");

    for (name, ddl) in [
        ("customers", CREATE_CUSTOMERS_TABLE),
        ("products", CREATE_PRODUCTS_TABLE),
        ("orders", CREATE_ORDERS_TABLE),
    ] {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to create {} table", name))?;
    }

    for ddl in CREATE_INDEXES {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .context("Failed to create index")?;
    }

    tracing::info!("SQLite schema ready");
    Ok(())
}

const CREATE_CUSTOMERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL
)
"#;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL,
    price REAL NOT NULL
)
"#;

const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    customer_id INTEGER NOT NULL REFERENCES customers(id),
    total_price REAL NOT NULL,
    status      TEXT NOT NULL DEFAULT 'pending'
)
"#;

const CREATE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS ix_customers_name ON customers (name)",
    "CREATE INDEX IF NOT EXISTS ix_customers_email ON customers (email)",
    "CREATE INDEX IF NOT EXISTS ix_products_name ON products (name)",
];
