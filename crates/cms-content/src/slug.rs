//! Human-name to document-id slugification

/// Convert a human-readable name into a document id.
///
/// Lowercases the input, collapses every run of non-alphanumeric characters
/// to a single hyphen, and strips leading/trailing hyphens. The
/// transformation is idempotent: slugifying an existing slug returns it
/// unchanged.
pub fn slugify(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut last_was_hyphen = true; // Start true to skip leading hyphens

    for c in name.chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                result.push(lower);
            }
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}
