use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::common::Linked;
use crate::database::models::OrderWithProduct;

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Product id is required"))]
    pub product_id: String,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
}

pub type OrderEntry = Linked<OrderWithProduct>;

pub fn order_entry(order: OrderWithProduct) -> OrderEntry {
    let url = format!("/orders/{}", order.id);
    Linked::get(order, url)
}

#[derive(Debug, Serialize)]
pub struct OrderList {
    pub count: usize,
    pub orders: Vec<OrderEntry>,
}
