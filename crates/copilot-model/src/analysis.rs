//! Analysis result returned by the model and shaped by the core

use serde::{Deserialize, Serialize};

/// Maximum steps per flow category
pub const MAX_FLOW_STEPS: usize = 10;
/// Number of UX improvements kept
pub const MAX_UX_IMPROVEMENTS: usize = 5;
/// Maximum patterns kept
pub const MAX_PATTERNS: usize = 5;
/// Maximum model-provided WCAG notes kept (heuristic notes come on top)
pub const MAX_WCAG_NOTES: usize = 8;
/// Maximum canvas notes kept
pub const MAX_CANVAS_NOTES: usize = 4;

/// Structured UX analysis of a design
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub flows: Flows,
    #[serde(default)]
    pub ux_improvements: Vec<UxImprovement>,
    #[serde(default)]
    pub patterns: Vec<PatternSuggestion>,
    #[serde(default)]
    pub wcag_notes: Vec<WcagNote>,
    #[serde(default)]
    pub canvas_notes: Vec<String>,
}

/// User flows by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flows {
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
    #[serde(default)]
    pub edge_cases: Vec<String>,
}

/// One suggested UX improvement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UxImprovement {
    pub title: String,
    pub rationale: String,
    pub how_to_apply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_components: Option<Vec<String>>,
}

/// A design pattern suggestion
///
/// `why` and `components_hint` are what the model returned; `rationale`,
/// `components` and `previews` are filled in by enrichment. The raw fields
/// are kept so that enrichment can be re-applied with the same outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSuggestion {
    pub name: String,
    #[serde(default)]
    pub why: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components_hint: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub previews: Vec<String>,
}

impl PatternSuggestion {
    /// Raw suggestion as the model returns it
    #[must_use]
    pub fn new(name: impl Into<String>, why: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            why: why.into(),
            ..Self::default()
        }
    }

    /// With component hints
    #[must_use]
    pub fn with_hint(mut self, hint: Vec<String>) -> Self {
        self.components_hint = Some(hint);
        self
    }

    /// Rationale to show, falling back to the raw `why`
    #[must_use]
    pub fn display_rationale(&self) -> &str {
        self.rationale
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(&self.why)
    }

    /// Components to scaffold, falling back to the model's hints
    #[must_use]
    pub fn scaffold_components(&self) -> Vec<String> {
        if self.components.is_empty() {
            self.components_hint.clone().unwrap_or_default()
        } else {
            self.components.clone()
        }
    }
}

/// One accessibility finding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagNote {
    pub issue: String,
    pub detail: String,
    pub fix: String,
}

impl WcagNote {
    /// Create note
    #[must_use]
    pub fn new(issue: impl Into<String>, detail: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            issue: issue.into(),
            detail: detail.into(),
            fix: fix.into(),
        }
    }
}
