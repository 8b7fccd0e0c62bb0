//! Catalog wire types and the product mapping.
//!
//! DESIGN
//! ======
//! The catalog API speaks snake case (`image_url`) while the UI model uses
//! `imageUrl`. `RawProduct` mirrors the wire record exactly and `Product` is
//! what components consume; the only conversion between them is
//! `From<RawProduct> for Product`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Success body of `GET /products`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductsResponse {
    /// Catalog entries in upstream order.
    pub products: Vec<RawProduct>,
}

impl ProductsResponse {
    /// Map every wire record to a [`Product`], preserving order.
    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        self.products.into_iter().map(Product::from).collect()
    }
}

/// A catalog entry exactly as the API returns it.
///
/// Fields this client does not render are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawProduct {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub brand: String,
    pub price: f64,
    pub image_url: String,
    pub rating: f64,
}

/// A catalog entry in the shape the UI consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, used as the list key.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Brand name.
    pub brand: String,
    /// Price in whole rupees.
    pub price: f64,
    /// Thumbnail image URL.
    pub image_url: String,
    /// Average rating.
    pub rating: f64,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            brand: raw.brand,
            price: raw.price,
            image_url: raw.image_url,
            rating: raw.rating,
        }
    }
}

/// Accept a product id given either as a JSON string or a JSON integer.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}
