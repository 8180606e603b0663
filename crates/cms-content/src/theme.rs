//! Typed theme document body

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Heading and body font stacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontStacks {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

/// Body of a theme document.
///
/// At most one theme document in the repository may carry
/// `is_active = true`; the exclusivity invariant is enforced by the content
/// repository, never assumed by readers. Zero active themes is a valid, if
/// degraded, state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeBody {
    #[serde(default)]
    pub name: String,

    /// Named color roles (e.g. `primary`, `background`) to color values.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    #[serde(default)]
    pub fonts: FontStacks,

    /// Optional spacing scale tokens to size values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub is_active: bool,

    /// Fields this layer does not model (timestamps, custom extensions).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThemeBody {
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        serde_json::from_value(value.clone())
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Read the `isActive` flag directly from a raw theme body.
pub fn is_active(body: &Value) -> bool {
    body.get("isActive").and_then(Value::as_bool).unwrap_or(false)
}

/// Return a copy of a raw theme body with `isActive` set.
pub fn with_active(body: &Value, active: bool) -> Value {
    let mut updated = body.clone();
    if let Some(object) = updated.as_object_mut() {
        object.insert("isActive".to_string(), Value::Bool(active));
    }
    updated
}
