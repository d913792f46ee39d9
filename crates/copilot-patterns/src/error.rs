//! Error types for knowledge-base loading

use std::path::PathBuf;

/// Errors while loading a pattern map
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    /// IO error reading a pattern map file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pattern map is not valid JSON of the expected shape
    #[error("invalid pattern map: {0}")]
    Parse(#[from] serde_json::Error),

    /// A mapping is unusable
    #[error("invalid mapping for pattern '{pattern}': {reason}")]
    InvalidMapping { pattern: String, reason: String },
}

impl KnowledgeBaseError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
