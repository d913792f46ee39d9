//! Copilot configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is valid:
//!
//! ```toml
//! knowledge_base = "patterns.json"
//!
//! [generation]
//! model = "gemini-2.0-flash-exp"
//! timeout_secs = 60
//! ```

use crate::error::CopilotError;
use copilot_patterns::PatternKnowledgeBase;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopilotConfig {
    /// Generation boundary settings
    pub generation: GenerationConfig,
    /// Pattern map file; the built-in table is used when unset
    pub knowledge_base: Option<PathBuf>,
}

impl CopilotConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    pub fn from_toml(text: &str) -> Result<Self, CopilotError> {
        toml::from_str(text).map_err(|e| CopilotError::config("<inline>", e.to_string()))
    }

    /// Load a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CopilotError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CopilotError::config(path, e.to_string()))?;
        let config: Self =
            toml::from_str(&text).map_err(|e| CopilotError::config(path, e.to_string()))?;
        tracing::info!(path = %path.display(), model = %config.generation.model, "Loaded config");
        Ok(config)
    }

    /// With generation settings
    #[inline]
    #[must_use]
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// With pattern map file
    #[inline]
    #[must_use]
    pub fn with_knowledge_base(mut self, path: impl Into<PathBuf>) -> Self {
        self.knowledge_base = Some(path.into());
        self
    }

    /// Load the configured knowledge base, or the built-in one
    pub fn knowledge_base(&self) -> Result<PatternKnowledgeBase, CopilotError> {
        let kb = match &self.knowledge_base {
            Some(path) => PatternKnowledgeBase::load(path)?,
            None => PatternKnowledgeBase::builtin()?,
        };
        Ok(kb)
    }
}

/// Settings of the generation boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Model identifier
    pub model: String,
    /// Base URL of the model API
    pub api_base: String,
    /// API key; usually supplied through the environment instead
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout; unbounded when unset
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl GenerationConfig {
    /// With model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With API base URL
    #[inline]
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// With API key
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// With timeout in seconds
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Timeout as a duration
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Whether a non-blank API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}
