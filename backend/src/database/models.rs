//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Request payloads live next to the handlers that accept
//! them; the `Create*` / `Update*` types here are what repositories consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered identity.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub product_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    pub product_image: Option<String>,
}

/// Partial product update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub product_image: Option<String>,
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.product_image.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub product_id: String,
    pub quantity: i64,
}

/// An order joined with the product it references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithProduct {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub product_price: f64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_omits_password_hash() {
        let user = User {
            id: "u1".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$04$abc".to_string(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["email"], "alice@example.com");
        assert!(value.get("password_hash").is_none());
    }
}
