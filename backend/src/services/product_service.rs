//! Product business logic service.

use crate::api::common::PaginationFilter;
use crate::api::product::models::{CreateProductRequest, UpdateOperation};
use crate::database::models::{CreateProduct, Product, UpdateProduct};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::product_repository::ProductRepository;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

pub struct ProductService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_product(&self, request: CreateProductRequest) -> ServiceResult<Product> {
        request.validate()?;

        let repo = ProductRepository::new(self.pool);
        let product = repo
            .create_product(CreateProduct {
                name: request.name,
                price: request.price,
                product_image: request.product_image,
            })
            .await?;

        info!("Created product {}", product.id);
        Ok(product)
    }

    pub async fn get_product_required(&self, id: &str) -> ServiceResult<Product> {
        let repo = ProductRepository::new(self.pool);
        repo.get_product_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))
    }

    /// Returns one page of products plus the total count.
    pub async fn list_products(
        &self,
        pagination: &PaginationFilter,
    ) -> ServiceResult<(Vec<Product>, u64)> {
        pagination.validate()?;

        let repo = ProductRepository::new(self.pool);
        let products = repo.get_products(pagination).await?;
        let total = repo.get_products_count().await?;
        Ok((products, total))
    }

    pub async fn update_product(
        &self,
        id: &str,
        operations: Vec<UpdateOperation>,
    ) -> ServiceResult<Product> {
        let update = Self::collect_update(operations)?;

        let repo = ProductRepository::new(self.pool);
        let product = repo
            .update_product(id, update)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;

        info!("Updated product {}", product.id);
        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> ServiceResult<()> {
        let repo = ProductRepository::new(self.pool);
        if !repo.delete_product(id).await? {
            return Err(ServiceError::not_found("Product", id));
        }

        info!("Deleted product {}", id);
        Ok(())
    }

    /// Folds PATCH operations into a single update. Later operations on the
    /// same property win.
    fn collect_update(operations: Vec<UpdateOperation>) -> ServiceResult<UpdateProduct> {
        let mut update = UpdateProduct::default();

        for op in operations {
            match (op.prop_name.as_str(), op.value) {
                ("name", Value::String(name)) => {
                    if name.is_empty() || name.chars().count() > 255 {
                        return Err(ServiceError::validation(
                            "name: Product name must be between 1-255 characters",
                        ));
                    }
                    update.name = Some(name);
                }
                ("price", Value::Number(price)) => {
                    let price = price
                        .as_f64()
                        .filter(|p| *p >= 0.0)
                        .ok_or_else(|| ServiceError::validation("price: Price must not be negative"))?;
                    update.price = Some(price);
                }
                ("productImage", Value::String(path)) => update.product_image = Some(path),
                ("name" | "price" | "productImage", other) => {
                    return Err(ServiceError::validation(format!(
                        "{}: unexpected value {}",
                        op.prop_name, other
                    )));
                }
                (unknown, _) => {
                    return Err(ServiceError::validation(format!(
                        "Unknown product property '{}'",
                        unknown
                    )));
                }
            }
        }

        if update.is_empty() {
            return Err(ServiceError::validation("No update operations provided"));
        }

        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use serde_json::json;

    fn op(prop_name: &str, value: Value) -> UpdateOperation {
        UpdateOperation {
            prop_name: prop_name.to_string(),
            value,
        }
    }

    #[test]
    fn test_collect_update() {
        let update = ProductService::collect_update(vec![
            op("name", json!("Desk")),
            op("price", json!(120.5)),
            op("price", json!(99)),
        ])
        .unwrap();

        assert_eq!(
            update,
            UpdateProduct {
                name: Some("Desk".to_string()),
                price: Some(99.0),
                product_image: None,
            }
        );
    }

    #[test]
    fn test_collect_update_rejects_bad_operations() {
        for ops in [
            vec![],
            vec![op("colour", json!("red"))],
            vec![op("price", json!("cheap"))],
            vec![op("price", json!(-1))],
            vec![op("name", json!(""))],
        ] {
            let err = ProductService::collect_update(ops).unwrap_err();
            assert!(matches!(err, ServiceError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let pool = test_pool().await;
        let service = ProductService::new(&pool);

        let created = service
            .create_product(CreateProductRequest {
                name: "Lamp".to_string(),
                price: 25.0,
                product_image: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_product(&created.id, vec![op("price", json!(30.0))])
            .await
            .unwrap();
        assert_eq!(updated.name, "Lamp");
        assert_eq!(updated.price, 30.0);

        let (products, total) = service
            .list_products(&PaginationFilter::default())
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(products[0].id, created.id);

        service.delete_product(&created.id).await.unwrap();
        let err = service.get_product_required(&created.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let pool = test_pool().await;
        let err = ProductService::new(&pool)
            .update_product("missing", vec![op("name", json!("Chair"))])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
