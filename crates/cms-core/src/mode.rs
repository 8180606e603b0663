//! Backend mode selection
//!
//! The mode is resolved once, at construction time, into a concrete backend
//! adapter. No facade operation branches on the mode per call.

use cms_store::RemoteConfig;
use std::path::PathBuf;

/// Which backend a [`crate::ContentRepository`] talks to.
///
/// `Local` is a development convenience and is read-only by design; the
/// remote repository stays the single system of record.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Serve documents from a local content tree.
    Local { root: PathBuf },

    /// Full read/write against the remote content repository.
    Remote(RemoteConfig),
}

impl Mode {
    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self::Local { root: root.into() }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }
}
