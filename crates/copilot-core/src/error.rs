//! Error types for the copilot pipeline
//!
//! - [`GenerationError`]: the model call itself failed
//! - [`CopilotError`]: everything a pipeline operation can report, with the
//!   status code and user-facing wording it maps to

use copilot_model::ModelError;
use copilot_patterns::KnowledgeBaseError;
use copilot_scaffold::RenderError;
use std::path::PathBuf;

/// Failure of the generation boundary
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Request never completed
    #[error("transport error: {0}")]
    Transport(String),

    /// Model endpoint answered with a non-success status
    #[error("model returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Rate limit or quota exhausted
    #[error("quota exceeded: {0}")]
    Quota(String),

    /// Response carried no candidate text
    #[error("model returned no content")]
    EmptyResponse,

    /// Configured timeout elapsed
    #[error("generation timed out after {secs}s")]
    Timeout { secs: u64 },

    /// No API key configured
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Pipeline operation an error surfaced from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analysis,
    Design,
}

impl Operation {
    /// Lead-in of the user-facing failure message
    #[inline]
    #[must_use]
    pub const fn failure_prefix(self) -> &'static str {
        match self {
            Self::Analysis => "Analysis failed",
            Self::Design => "Design generation failed",
        }
    }
}

/// Main copilot error type
#[derive(Debug, thiserror::Error)]
pub enum CopilotError {
    /// User-correctable input problem, surfaced verbatim
    #[error("{0}")]
    Validation(#[from] ModelError),

    /// Model or transport failure
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Model output is not JSON or does not fit the schema
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// Insert attempted with nothing selected
    #[error("nothing selected")]
    NoSelection,

    /// Canvas rendering failed
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// Knowledge base could not be loaded
    #[error("knowledge base error: {0}")]
    KnowledgeBase(#[from] KnowledgeBaseError),

    /// Configuration file problem
    #[error("configuration error in {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl CopilotError {
    /// Create malformed-response error
    #[inline]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Create configuration error
    #[inline]
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the user can fix this by changing the request
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP-style status for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Message shown to the end user
    ///
    /// Validation messages pass through unchanged. Generation and malformed
    /// responses share one generic wording per operation.
    #[must_use]
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Generation(_) | Self::MalformedResponse { .. } => {
                format!("{}: {self}", operation.failure_prefix())
            }
            Self::NoSelection => "Please select a frame first".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type for copilot operations
pub type Result<T> = std::result::Result<T, CopilotError>;
