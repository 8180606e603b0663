//! Failure-injecting backend wrapper
//!
//! Wraps any backend and fails selected calls with `BackendUnavailable`,
//! for exercising degraded paths (partial theme activation, unreadable
//! documents in listings) deterministically.

use async_trait::async_trait;
use cms_content::Category;
use cms_store::{ContentBackend, Error, RawDocument, RawEntry, Result};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Backend decorator that consumes queued one-shot failures.
pub struct FailingBackend {
    inner: Arc<dyn ContentBackend>,
    fail_writes: Mutex<Vec<(Category, String)>>,
    fail_reads: Mutex<Vec<(Category, String)>>,
}

impl FailingBackend {
    pub fn new(inner: Arc<dyn ContentBackend>) -> Self {
        Self {
            inner,
            fail_writes: Mutex::new(Vec::new()),
            fail_reads: Mutex::new(Vec::new()),
        }
    }

    /// Fail the next write to `(category, id)` once.
    pub fn fail_next_write(&self, category: Category, id: &str) {
        self.fail_writes
            .lock()
            .unwrap()
            .push((category, id.to_string()));
    }

    /// Fail the next read of `(category, id)` once.
    pub fn fail_next_read(&self, category: Category, id: &str) {
        self.fail_reads
            .lock()
            .unwrap()
            .push((category, id.to_string()));
    }

    fn take(queue: &Mutex<Vec<(Category, String)>>, category: Category, id: &str) -> bool {
        let mut queue = queue.lock().unwrap();
        if let Some(pos) = queue
            .iter()
            .position(|(c, i)| *c == category && i == id)
        {
            queue.remove(pos);
            true
        } else {
            false
        }
    }
}

#[async_trait]
impl ContentBackend for FailingBackend {
    async fn list(&self, category: Category) -> Result<Vec<RawEntry>> {
        self.inner.list(category).await
    }

    async fn read(&self, category: Category, id: &str) -> Result<RawDocument> {
        if Self::take(&self.fail_reads, category, id) {
            return Err(Error::unavailable(format!("injected read failure: {id}")));
        }
        self.inner.read(category, id).await
    }

    async fn write(
        &self,
        category: Category,
        id: &str,
        body: &Value,
        revision: Option<&str>,
    ) -> Result<String> {
        if Self::take(&self.fail_writes, category, id) {
            return Err(Error::unavailable(format!("injected write failure: {id}")));
        }
        self.inner.write(category, id, body, revision).await
    }

    async fn delete(&self, category: Category, id: &str, revision: &str) -> Result<()> {
        self.inner.delete(category, id, revision).await
    }
}
