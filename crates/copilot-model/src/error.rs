//! Error types for the data model

/// Model validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Required task field missing or blank
    #[error("{0}")]
    MissingField(String),

    /// Scaffold frame dimensions must be positive
    #[error("invalid frame size {width}x{height}: dimensions must be positive")]
    InvalidFrameSize { width: f64, height: f64 },
}

impl ModelError {
    /// Create missing-field error with a user-facing message
    #[inline]
    pub fn missing(message: impl Into<String>) -> Self {
        Self::MissingField(message.into())
    }
}
