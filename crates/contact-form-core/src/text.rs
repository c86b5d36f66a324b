//! Text normalization and presence checks

/// Removes leading and trailing whitespace.
pub fn trim(value: &str) -> &str {
    value.trim()
}

/// Returns false when the value is absent or only whitespace.
pub fn has_input(value: Option<&str>) -> bool {
    match value {
        Some(v) => !trim(v).is_empty(),
        None => false,
    }
}
