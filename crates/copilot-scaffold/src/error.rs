//! Error types for rendering and canvas commits

use crate::drawable::FontName;
use copilot_model::ModelError;

/// Errors while rendering or inserting nodes
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// Text was inserted before its font finished loading
    #[error("font not loaded: {0}")]
    FontNotLoaded(FontName),

    /// Host could not provide a font
    #[error("font unavailable: {font}: {reason}")]
    FontUnavailable { font: FontName, reason: String },

    /// Scaffold specification rejected before rendering
    #[error("invalid scaffold: {0}")]
    InvalidSpec(#[from] ModelError),

    /// Host refused a mutation
    #[error("canvas error: {0}")]
    Host(String),
}

impl RenderError {
    /// Create host error
    #[inline]
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }
}
