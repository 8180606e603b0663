//! Typed layout document body

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Navigation rendering style for a layout section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
    #[default]
    Default,
    Minimal,
    Full,
}

/// Header or footer configuration inside a layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSection {
    #[serde(default)]
    pub show_navigation: bool,

    #[serde(default)]
    pub navigation_style: NavigationStyle,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_navigation: Option<bool>,
}

/// Body of a layout document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBody {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub header: LayoutSection,

    #[serde(default)]
    pub footer: LayoutSection,

    /// Id of the navigation document this layout renders, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutBody {
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        serde_json::from_value(value.clone())
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
