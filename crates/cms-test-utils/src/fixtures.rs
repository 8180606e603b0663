//! Document body builders for tests

use serde_json::{Value, json};

/// Theme body with the required `colors`/`fonts` fields.
pub fn theme_body(name: &str, active: bool) -> Value {
    json!({
        "name": name,
        "colors": {
            "primary": "#1a1a2e",
            "background": "#ffffff",
            "text": "#16161d"
        },
        "fonts": {
            "heading": "Inter, sans-serif",
            "body": "Georgia, serif"
        },
        "isActive": active
    })
}

/// Layout body with header/footer sections.
pub fn layout_body(name: &str) -> Value {
    json!({
        "name": name,
        "header": {"showNavigation": true, "navigationStyle": "default"},
        "footer": {"showNavigation": false, "navigationStyle": "minimal"},
        "navigationId": "main-menu"
    })
}

/// Minimal page body.
pub fn page_body(title: &str) -> Value {
    json!({
        "title": title,
        "blocks": []
    })
}

/// Minimal navigation body.
pub fn navigation_body(name: &str) -> Value {
    json!({
        "name": name,
        "items": [
            {"label": "Home", "url": "/"},
            {"label": "About", "url": "/about"}
        ]
    })
}

/// Minimal component schema body.
pub fn component_schema_body(name: &str) -> Value {
    json!({
        "name": name,
        "fields": [
            {"name": "heading", "type": "string"},
            {"name": "image", "type": "asset"}
        ]
    })
}
