//! Read-only local filesystem adapter
//!
//! Serves documents from a local content tree during development. The tree
//! is a convenience mirror, not the system of record, so mutations are
//! rejected with `Unsupported` instead of silently diverging from the
//! remote repository.

use crate::backend::{ContentBackend, RawDocument, RawEntry};
use crate::error::{Error, Result};
use async_trait::async_trait;
use cms_content::{Category, compute_revision};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Backend over a local directory laid out as `<root>/<category-dir>/<id>.json`.
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.directory())
    }

    fn document_file(&self, category: Category, id: &str) -> PathBuf {
        self.category_dir(category).join(format!("{id}.json"))
    }

    fn read_raw(&self, category: Category, id: &str) -> Result<(String, PathBuf)> {
        let path = self.document_file(category, id);
        match fs::read_to_string(&path) {
            Ok(content) => Ok((content, path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::not_found(category, id))
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }
}

#[async_trait]
impl ContentBackend for LocalBackend {
    async fn list(&self, category: Category) -> Result<Vec<RawEntry>> {
        let dir = self.category_dir(category);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            // A category with no directory yet is simply empty.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(dir, e)),
        };

        let mut results = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            results.push(RawEntry {
                id: id.to_string(),
                revision: compute_revision(&content),
                location: path.display().to_string(),
            });
        }

        results.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(category = %category, count = results.len(), "listed local documents");
        Ok(results)
    }

    async fn read(&self, category: Category, id: &str) -> Result<RawDocument> {
        let (content, path) = self.read_raw(category, id)?;
        let body: Value = serde_json::from_str(&content)?;
        debug!(category = %category, id, path = %path.display(), "read local document");
        Ok(RawDocument {
            body,
            revision: compute_revision(&content),
        })
    }

    async fn write(
        &self,
        _category: Category,
        _id: &str,
        _body: &Value,
        _revision: Option<&str>,
    ) -> Result<String> {
        Err(Error::Unsupported { operation: "write" })
    }

    async fn delete(&self, _category: Category, _id: &str, _revision: &str) -> Result<()> {
        Err(Error::Unsupported {
            operation: "delete",
        })
    }
}
