use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::api::common::Linked;
use crate::database::models::Product;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Product name must be between 1-255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub product_image: Option<String>,
}

/// One `{"propName": ..., "value": ...}` entry of a PATCH body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateOperation {
    #[serde(rename = "propName")]
    pub prop_name: String,
    pub value: Value,
}

/// A product with a link back to its own resource.
pub type ProductEntry = Linked<Product>;

pub fn product_entry(product: Product) -> ProductEntry {
    let url = format!("/products/{}", product.id);
    Linked::get(product, url)
}

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub count: usize,
    pub products: Vec<ProductEntry>,
}
