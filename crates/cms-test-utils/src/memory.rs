//! In-memory backend with full revision semantics
//!
//! Behaves like the remote adapter — content-addressed revision markers,
//! conditional writes, conditional deletes — without any transport, so
//! facade and invariant tests run hermetically.

use async_trait::async_trait;
use cms_content::{Category, compute_revision};
use cms_store::{ContentBackend, Error, RawDocument, RawEntry, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct Stored {
    body: Value,
    revision: String,
}

/// Backend storing documents in a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: Mutex<BTreeMap<(Category, String), Stored>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document directly, bypassing revision checks. Returns the
    /// stored revision marker. Panics on serialization failure (test-only).
    pub fn seed(&self, category: Category, id: &str, body: Value) -> String {
        let revision = revision_of(&body);
        self.documents.lock().unwrap().insert(
            (category, id.to_string()),
            Stored {
                body,
                revision: revision.clone(),
            },
        );
        revision
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.documents
            .lock()
            .unwrap()
            .contains_key(&(category, id.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().unwrap().is_empty()
    }
}

fn revision_of(body: &Value) -> String {
    compute_revision(&body.to_string())
}

#[async_trait]
impl ContentBackend for MemoryBackend {
    async fn list(&self, category: Category) -> Result<Vec<RawEntry>> {
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter(|((c, _), _)| *c == category)
            .map(|((_, id), stored)| RawEntry {
                id: id.clone(),
                revision: stored.revision.clone(),
                location: category.document_path(id),
            })
            .collect())
    }

    async fn read(&self, category: Category, id: &str) -> Result<RawDocument> {
        let documents = self.documents.lock().unwrap();
        let stored = documents
            .get(&(category, id.to_string()))
            .ok_or_else(|| Error::not_found(category, id))?;
        Ok(RawDocument {
            body: stored.body.clone(),
            revision: stored.revision.clone(),
        })
    }

    async fn write(
        &self,
        category: Category,
        id: &str,
        body: &Value,
        revision: Option<&str>,
    ) -> Result<String> {
        let mut documents = self.documents.lock().unwrap();
        let key = (category, id.to_string());

        match (documents.get(&key), revision) {
            (Some(_), None) => {
                return Err(Error::AlreadyExists {
                    category,
                    id: id.to_string(),
                });
            }
            (Some(stored), Some(revision)) if stored.revision != revision => {
                return Err(Error::conflict(category, id));
            }
            (None, Some(_)) => return Err(Error::not_found(category, id)),
            _ => {}
        }

        let new_revision = revision_of(body);
        documents.insert(
            key,
            Stored {
                body: body.clone(),
                revision: new_revision.clone(),
            },
        );
        Ok(new_revision)
    }

    async fn delete(&self, category: Category, id: &str, revision: &str) -> Result<()> {
        let mut documents = self.documents.lock().unwrap();
        let key = (category, id.to_string());

        let stored = documents
            .get(&key)
            .ok_or_else(|| Error::not_found(category, id))?;
        if stored.revision != revision {
            return Err(Error::conflict(category, id));
        }

        documents.remove(&key);
        Ok(())
    }
}
