use serde_json::Value;

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_TITLE};
use crate::types::{Product, RawProduct};

/// Coerces a raw source record into the canonical product shape.
///
/// Total over any JSON value: missing or mistyped fields fall back to
/// type-appropriate defaults, and a record loaded under a category inherits
/// it when it carries none of its own.
pub fn normalize_item(raw: &RawProduct, fallback_category: &str) -> Product {
    let id = raw.get("id").map(text_or_number).unwrap_or_default();

    let title =
        string_field(raw, &["title", "name"]).unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let description = string_field(raw, &["desc", "description"]).unwrap_or_default();

    let price = raw.get("price").map(numeric).unwrap_or(0.0);

    let image = string_field(raw, &["image", "img"]).unwrap_or_default();

    let category = string_field(raw, &["category"])
        .or_else(|| (!fallback_category.is_empty()).then(|| fallback_category.to_string()))
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    Product {
        id,
        title,
        description,
        price,
        image,
        category,
    }
}

/// First non-empty string among the given keys.
fn string_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| raw.get(key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn text_or_number(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
