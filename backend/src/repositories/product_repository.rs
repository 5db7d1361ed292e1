//! Database repository for the product catalogue.

use crate::{
    api::common::PaginationFilter,
    database::models::{CreateProduct, Product, UpdateProduct},
};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new product.
    pub async fn create_product(&self, product: CreateProduct) -> Result<Product> {
        let now = Utc::now();
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (id, name, price, product_image, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, price, product_image, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7().to_string())
        .bind(product.name)
        .bind(product.price)
        .bind(product.product_image)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    pub async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, product_image, created_at, updated_at
            FROM products WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Lists products, newest first.
    pub async fn get_products(&self, pagination: &PaginationFilter) -> Result<Vec<Product>> {
        let limit = pagination.limit() as i64;
        let offset = pagination.offset() as i64;

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, product_image, created_at, updated_at
            FROM products
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    pub async fn get_products_count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        Ok(count as u64)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// The updated product, or `None` if no product has this id
    pub async fn update_product(&self, id: &str, update: UpdateProduct) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = COALESCE(?, name),
                price = COALESCE(?, price),
                product_image = COALESCE(?, product_image),
                updated_at = ?
            WHERE id = ?
            RETURNING id, name, price, product_image, created_at, updated_at
            "#,
        )
        .bind(update.name)
        .bind(update.price)
        .bind(update.product_image)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Deletes a product. Orders for it are removed by the foreign key cascade.
    pub async fn delete_product(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
