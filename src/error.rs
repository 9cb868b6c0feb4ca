//! Error types for the interop boundary.
//!
//! Traversal and update operations are total and never fail; errors only
//! arise when converting values to or from JSON text.

use crate::Path;
use thiserror::Error;

/// Result type alias for namepath operations.
pub type NamepathResult<T> = Result<T, NamepathError>;

/// Errors that can occur at the JSON interop boundary.
#[derive(Debug, Error)]
pub enum NamepathError {
    /// An absent hole was reached while exporting to JSON.
    #[error("absent value at {path} has no JSON representation")]
    AbsentValue {
        /// Location of the hole.
        path: Path,
    },

    /// JSON parse or serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NamepathError {
    /// Create an absent-value error.
    #[inline]
    pub fn absent_value(path: Path) -> Self {
        NamepathError::AbsentValue { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn test_error_display_includes_path() {
        let err = NamepathError::absent_value(path!("items", 0));
        assert!(err.to_string().contains("$.items[0]"));
    }
}
