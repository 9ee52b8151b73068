//! Error types for loading model documents.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration documents such as an
/// [`ImportProfile`](crate::ImportProfile).
#[derive(Debug, Error)]
pub enum ModelError {
    /// The document could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON for the expected shape.
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::Io {
            path: PathBuf::from("/missing/profile.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read /missing/profile.json: not found"
        );
    }
}
