//! Draft overlay cache
//!
//! Client-local storage of edited-but-unpublished document bodies, keyed by
//! `"<category>:<id>"`. The overlay never talks to a backend and never
//! contends with other clients: drafts are single-writer. A draft is
//! overwritten on every local edit, cleared on successful publish, and never
//! silently expires.

use crate::error::Result;
use cms_content::Category;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Unpublished edits, optionally persisted to a single JSON file.
#[derive(Debug, Default)]
pub struct DraftOverlay {
    drafts: BTreeMap<String, Value>,
    path: Option<PathBuf>,
}

fn draft_key(category: Category, id: &str) -> String {
    format!("{category}:{id}")
}

impl DraftOverlay {
    /// Overlay without persistence; drafts live for the process lifetime.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Overlay persisted at `path`, loading any existing drafts.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let drafts = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            drafts,
            path: Some(path),
        })
    }

    /// Default persistence location under the user data directory.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::data_dir()?.join("cms-manager").join("drafts.json"))
    }

    /// Store or overwrite a draft body. Unconditional: drafts carry no
    /// revision semantics.
    pub fn save_draft(&mut self, category: Category, id: &str, body: Value) -> Result<()> {
        let key = draft_key(category, id);
        debug!(%key, "saved draft");
        self.drafts.insert(key, body);
        self.persist()
    }

    pub fn load_draft(&self, category: Category, id: &str) -> Option<&Value> {
        self.drafts.get(&draft_key(category, id))
    }

    pub fn has_draft(&self, category: Category, id: &str) -> bool {
        self.drafts.contains_key(&draft_key(category, id))
    }

    /// Drop a draft, typically after a successful publish.
    pub fn clear_draft(&mut self, category: Category, id: &str) -> Result<()> {
        if self.drafts.remove(&draft_key(category, id)).is_some() {
            debug!(category = %category, id, "cleared draft");
            self.persist()?;
        }
        Ok(())
    }

    /// Keys of all pending drafts, in stable order.
    pub fn draft_keys(&self) -> impl Iterator<Item = &str> {
        self.drafts.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Write the draft map to disk atomically (temp file + rename), if this
    /// overlay is persistent.
    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.drafts)?;
        let temp_path = temp_path_for(path);
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}
