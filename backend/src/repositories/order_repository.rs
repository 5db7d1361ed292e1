//! Database repository for orders.
//!
//! Reads always join the referenced product so callers get its name and price
//! without a second query.

use crate::database::models::{CreateOrder, OrderWithProduct};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

const SELECT_ORDER_WITH_PRODUCT: &str = r#"
    SELECT
        o.id AS id,
        o.product_id AS product_id,
        p.name AS product_name,
        p.price AS product_price,
        o.quantity AS quantity,
        o.created_at AS created_at
    FROM orders o
    JOIN products p ON p.id = o.product_id
"#;

pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new order and returns its id.
    pub async fn create_order(&self, order: CreateOrder) -> Result<String> {
        let id = Uuid::now_v7().to_string();

        sqlx::query(
            "INSERT INTO orders (id, product_id, quantity, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(Utc::now())
        .execute(self.pool)
        .await?;

        Ok(id)
    }

    pub async fn get_order_by_id(&self, id: &str) -> Result<Option<OrderWithProduct>> {
        let query = format!("{SELECT_ORDER_WITH_PRODUCT} WHERE o.id = ?");
        let order = sqlx::query_as::<_, OrderWithProduct>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(order)
    }

    pub async fn get_orders(&self) -> Result<Vec<OrderWithProduct>> {
        let query = format!("{SELECT_ORDER_WITH_PRODUCT} ORDER BY o.created_at DESC, o.id DESC");
        let orders = sqlx::query_as::<_, OrderWithProduct>(&query)
            .fetch_all(self.pool)
            .await?;

        Ok(orders)
    }

    pub async fn delete_order(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
