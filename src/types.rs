use serde::{Deserialize, Serialize};

/// Raw product record as returned from a category data source
pub type RawProduct = serde_json::Value;

/// Canonical product shape used across the catalog.
///
/// Every field is present and typed regardless of how sparse the source
/// record was; see `normalize::normalize_item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
}
