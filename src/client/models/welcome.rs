//! API root models

use serde::{Deserialize, Serialize};

/// Welcome document served at the API root.
///
/// Every field is optional; older backends answer the root with a plain
/// router listing instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiWelcome {
    #[serde(default)]
    pub mensaje: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub fecha: Option<String>,

    #[serde(default)]
    pub estado: Option<String>,
}

impl ApiWelcome {
    /// Best-effort view of an arbitrary root response
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// Number of items in a collection response.
///
/// Handles bare arrays and DRF paginated objects (`{"results": [...]}`).
/// Any other object counts its keys.
pub fn item_count(value: &serde_json::Value) -> Option<usize> {
    match value {
        serde_json::Value::Array(items) => Some(items.len()),
        serde_json::Value::Object(map) => match map.get("results") {
            Some(serde_json::Value::Array(items)) => Some(items.len()),
            _ => Some(map.len()),
        },
        _ => None,
    }
}
