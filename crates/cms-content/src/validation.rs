//! Pre-write document body validation
//!
//! The content repository validates bodies before any backend call so that
//! malformed documents are rejected locally instead of round-tripping to the
//! remote store.

use crate::category::Category;
use serde_json::Value;

/// A document body that cannot be persisted as-is.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Document body must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("{category} document is missing required field `{field}`")]
    MissingField {
        category: Category,
        field: &'static str,
    },

    #[error("{category} document field `{field}` must be an object")]
    WrongFieldType {
        category: Category,
        field: &'static str,
    },
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn require_object_field(
    category: Category,
    body: &Value,
    field: &'static str,
) -> Result<(), ValidationError> {
    match body.get(field) {
        None => Err(ValidationError::MissingField { category, field }),
        Some(Value::Object(_)) => Ok(()),
        Some(_) => Err(ValidationError::WrongFieldType { category, field }),
    }
}

/// Validate a document body for a category.
///
/// Themes must carry `colors` and `fonts`, layouts `header` and `footer`;
/// the remaining categories need a `title` or `name` so an id can be derived
/// and listings have something to display.
pub fn validate_body(category: Category, body: &Value) -> Result<(), ValidationError> {
    if !body.is_object() {
        return Err(ValidationError::NotAnObject {
            found: json_type_name(body),
        });
    }

    match category {
        Category::Theme => {
            require_object_field(category, body, "colors")?;
            require_object_field(category, body, "fonts")?;
        }
        Category::Layout => {
            require_object_field(category, body, "header")?;
            require_object_field(category, body, "footer")?;
        }
        Category::Page | Category::Navigation | Category::ComponentSchema => {
            let has_name = body
                .get("title")
                .or_else(|| body.get("name"))
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty());
            if !has_name {
                return Err(ValidationError::MissingField {
                    category,
                    field: "title",
                });
            }
        }
    }

    Ok(())
}
