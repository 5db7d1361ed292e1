//! Order business logic service.

use crate::api::order::models::CreateOrderRequest;
use crate::database::models::{CreateOrder, OrderWithProduct};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::is_foreign_key_violation;
use crate::repositories::order_repository::OrderRepository;
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

pub struct OrderService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Places an order for an existing product.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if the product does not exist. The
    /// check is the foreign key on the INSERT itself, so a product deleted
    /// concurrently is reported the same way.
    pub async fn create_order(&self, request: CreateOrderRequest) -> ServiceResult<OrderWithProduct> {
        request.validate()?;

        let repo = OrderRepository::new(self.pool);
        let id = match repo
            .create_order(CreateOrder {
                product_id: request.product_id.clone(),
                quantity: request.quantity,
            })
            .await
        {
            Ok(id) => id,
            Err(e) if is_foreign_key_violation(&e) => {
                return Err(ServiceError::not_found("Product", &request.product_id));
            }
            Err(e) => return Err(e.into()),
        };

        info!("Created order {}", id);
        self.get_order_required(&id).await
    }

    pub async fn get_order_required(&self, id: &str) -> ServiceResult<OrderWithProduct> {
        let repo = OrderRepository::new(self.pool);
        repo.get_order_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", id))
    }

    pub async fn list_orders(&self) -> ServiceResult<Vec<OrderWithProduct>> {
        let repo = OrderRepository::new(self.pool);
        Ok(repo.get_orders().await?)
    }

    pub async fn delete_order(&self, id: &str) -> ServiceResult<()> {
        let repo = OrderRepository::new(self.pool);
        if !repo.delete_order(id).await? {
            return Err(ServiceError::not_found("Order", id));
        }

        info!("Deleted order {}", id);
        Ok(())
    }
}
