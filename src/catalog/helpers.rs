//! Catalog Business Logic Helpers
//!
//! Field-by-field patching of stored items.

use super::models::Item;
use crate::error::{ShopError, ShopResult};
use serde_json::{Map, Value};

/// Applies every `(key, value)` pair of `fields` to `item`, in payload order.
///
/// # Behaviour
///
/// * Validation is interleaved with mutation: when a field is rejected, the
///   fields before it have already been written to `item`.
/// * `deleted: true` is refused (un-deleting and deleting both go elsewhere);
///   `deleted: false` is accepted as-is.
/// * `id` is refused, identifiers are immutable.
/// * Unknown keys and values of the wrong JSON type are refused.
pub fn apply_patch(item: &mut Item, fields: Map<String, Value>) -> ShopResult<()> {
    for (key, value) in fields {
        apply_patch_field(item, &key, value)?;
    }
    Ok(())
}

fn apply_patch_field(item: &mut Item, key: &str, value: Value) -> ShopResult<()> {
    match key {
        "deleted" => match value {
            Value::Bool(true) => Err(ShopError::Unprocessable(
                "Cannot modify attribute deleted".to_string(),
            )),
            Value::Bool(false) => {
                item.deleted = false;
                Ok(())
            }
            _ => Err(invalid_value(key)),
        },
        "id" => Err(ShopError::Unprocessable(
            "Cannot modify attribute id".to_string(),
        )),
        "name" => match value {
            Value::String(name) => {
                item.name = name;
                Ok(())
            }
            _ => Err(invalid_value(key)),
        },
        "price" => match value.as_f64() {
            Some(price) => {
                item.price = price;
                Ok(())
            }
            None => Err(invalid_value(key)),
        },
        _ => Err(ShopError::Unprocessable(format!(
            "Attribute '{}' not found",
            key
        ))),
    }
}

fn invalid_value(key: &str) -> ShopError {
    ShopError::Unprocessable(format!("Invalid value for attribute '{}'", key))
}
