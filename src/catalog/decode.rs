//! Tolerant decoding for catalog payloads
//!
//! Each product is rendered on its own, so a bad field or a bad item must not
//! cost the rest of the list. Fields accept `null` and loosely typed values;
//! list items that aren't objects are skipped.

use super::Product;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field: strings as-is, numbers and bools stringified, `null` empty
pub(super) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Price: JSON numbers or numeric strings; anything else is 0
pub(super) fn price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

/// Id: unsigned integers, whole floats or numeric strings; anything else is 0
pub(super) fn id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

/// Product list: keeps every item that decodes, drops (and logs) the rest
pub(super) fn products<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<Value>::deserialize(deserializer)?;
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Product>(item) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(index, "Skipping undecodable product: {}", e);
                None
            }
        })
        .collect())
}
