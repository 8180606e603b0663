//! Document and summary types

use crate::category::Category;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A single stored JSON document.
///
/// The `body` is the exact object persisted to `<directory>/<id>.json`,
/// including the `createdAt`/`updatedAt` timestamps the repository stamps on
/// write. The `revision` marker is absent only for documents that have not
/// been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub category: Category,
    pub id: String,
    pub body: Value,
    pub revision: Option<String>,
}

impl Document {
    pub fn new(category: Category, id: impl Into<String>, body: Value) -> Self {
        Self {
            category,
            id: id.into(),
            body,
            revision: None,
        }
    }

    /// Human-readable title, taken from the body's `title` or `name` field.
    pub fn title(&self) -> Option<&str> {
        self.body
            .get("title")
            .or_else(|| self.body.get("name"))
            .and_then(Value::as_str)
    }

    /// Parse a timestamp field from the body, if present and well-formed.
    fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        self.body
            .get(field)
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc))
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("createdAt")
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("updatedAt")
    }

    /// Reduce to the metadata shown in listings.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            title: self.title().map(str::to_string),
            updated_at: self.updated_at(),
            revision: self.revision.clone(),
            unreadable: false,
            has_draft: false,
        }
    }
}

/// Listing entry for a document: id plus minimal metadata.
///
/// When an individual document cannot be read during a listing, the entry
/// degrades to id-only with `unreadable` set instead of failing the whole
/// listing. `has_draft` is annotated by the draft overlay, never populated
/// from draft content.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub id: String,
    pub title: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub revision: Option<String>,
    pub unreadable: bool,
    pub has_draft: bool,
}

impl DocumentSummary {
    /// Placeholder summary for a document that exists but could not be read.
    pub fn unreadable(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            updated_at: None,
            revision: None,
            unreadable: true,
            has_draft: false,
        }
    }
}
