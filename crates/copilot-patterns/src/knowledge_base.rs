//! Pattern knowledge base
//!
//! Immutable table from pattern name to recommended components, preview
//! references and a fallback rationale. Lookups are exact string matches.

use crate::error::KnowledgeBaseError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pattern map compiled into the binary
const BUILTIN_PATTERN_MAP: &str = include_str!("../data/pattern_map.json");

/// Knowledge-base entry for one pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMapping {
    /// Recommended component names, never empty
    pub components: Vec<String>,
    /// Preview references (documentation URLs or asset ids)
    #[serde(default)]
    pub previews: Vec<String>,
    /// Rationale used when the model's own explanation is too thin
    pub rationale_template: String,
}

/// Read-only pattern table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternKnowledgeBase {
    entries: IndexMap<String, PatternMapping>,
}

impl PatternKnowledgeBase {
    /// Empty knowledge base
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Knowledge base shipped with the crate
    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        Self::from_json(BUILTIN_PATTERN_MAP)
    }

    /// Parse a pattern map from JSON text
    ///
    /// The document is an object keyed by pattern name.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeBaseError> {
        let entries: IndexMap<String, PatternMapping> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Load a pattern map file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KnowledgeBaseError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| KnowledgeBaseError::io_error(path, e))?;
        let kb = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), patterns = kb.len(), "Loaded pattern map");
        Ok(kb)
    }

    /// Build from entries, rejecting mappings without components
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, PatternMapping)>,
    ) -> Result<Self, KnowledgeBaseError> {
        let entries: IndexMap<_, _> = entries.into_iter().collect();
        for (pattern, mapping) in &entries {
            if mapping.components.is_empty() {
                return Err(KnowledgeBaseError::InvalidMapping {
                    pattern: pattern.clone(),
                    reason: "components must not be empty".to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Look up a pattern by exact name
    #[inline]
    #[must_use]
    pub fn get(&self, pattern: &str) -> Option<&PatternMapping> {
        self.entries.get(pattern)
    }

    /// Whether a pattern is known
    #[inline]
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.contains_key(pattern)
    }

    /// Pattern names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatternMapping)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of patterns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
