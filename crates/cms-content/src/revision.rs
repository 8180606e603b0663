//! Revision markers for stored document content
//!
//! A revision marker identifies the exact bytes of a stored document and is
//! the precondition for every conditional write. The remote backend uses the
//! hosting service's own content hash; the local backend derives an
//! equivalent marker here, in the canonical `sha256:<hex>` form.

use sha2::{Digest, Sha256};

/// Prefix for locally computed revision markers
const PREFIX: &str = "sha256:";

/// Compute the revision marker for raw document content.
pub fn compute_revision(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}
