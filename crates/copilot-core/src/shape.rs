//! Response shaping
//!
//! Applied to every analysis the model returns:
//! 1. cap each array, keeping order
//! 2. enrich patterns from the knowledge base
//! 3. append heuristic accessibility notes after capping
//!
//! Shaping an already shaped result changes nothing.

use crate::heuristics::heuristic_notes;
use copilot_model::analysis::{
    MAX_CANVAS_NOTES, MAX_FLOW_STEPS, MAX_PATTERNS, MAX_UX_IMPROVEMENTS, MAX_WCAG_NOTES,
};
use copilot_model::{AnalysisResult, FrameSnapshot, PatternSuggestion};
use copilot_patterns::PatternKnowledgeBase;
use std::sync::Arc;

/// Minimum length of a model rationale kept over the template
pub const MIN_RATIONALE_CHARS: usize = 20;

/// Caps, enriches and augments analysis results
#[derive(Debug, Clone)]
pub struct ResponseShaper {
    knowledge_base: Arc<PatternKnowledgeBase>,
}

impl ResponseShaper {
    /// Create shaper over a knowledge base
    #[inline]
    #[must_use]
    pub fn new(knowledge_base: Arc<PatternKnowledgeBase>) -> Self {
        Self { knowledge_base }
    }

    /// Knowledge base in use
    #[inline]
    #[must_use]
    pub fn knowledge_base(&self) -> &PatternKnowledgeBase {
        &self.knowledge_base
    }

    /// Shape a raw analysis
    #[must_use]
    pub fn shape(&self, raw: AnalysisResult, snapshot: Option<&FrameSnapshot>) -> AnalysisResult {
        let mut result = cap(raw);
        for pattern in &mut result.patterns {
            self.enrich(pattern);
        }
        if let Some(snapshot) = snapshot {
            for note in heuristic_notes(snapshot) {
                if !result.wcag_notes.contains(&note) {
                    result.wcag_notes.push(note);
                }
            }
        }

        tracing::info!(
            primary_flows = result.flows.primary.len(),
            secondary_flows = result.flows.secondary.len(),
            ux_improvements = result.ux_improvements.len(),
            patterns = result.patterns.len(),
            wcag_notes = result.wcag_notes.len(),
            canvas_notes = result.canvas_notes.len(),
            "Shaped analysis"
        );
        result
    }

    /// Fill a pattern's components, previews and rationale
    pub fn enrich(&self, pattern: &mut PatternSuggestion) {
        match self.knowledge_base.get(&pattern.name) {
            Some(mapping) => {
                pattern.components.clone_from(&mapping.components);
                pattern.previews.clone_from(&mapping.previews);
                let rationale = if pattern.why.chars().count() >= MIN_RATIONALE_CHARS {
                    pattern.why.clone()
                } else {
                    mapping.rationale_template.clone()
                };
                pattern.rationale = Some(rationale);
            }
            None => {
                tracing::debug!(pattern = %pattern.name, "Pattern not in knowledge base");
                pattern.components = pattern.components_hint.clone().unwrap_or_default();
                pattern.previews = Vec::new();
                pattern.rationale = Some(pattern.why.clone());
            }
        }
    }
}

/// Truncate every array to its maximum
#[must_use]
pub fn cap(mut result: AnalysisResult) -> AnalysisResult {
    result.flows.primary.truncate(MAX_FLOW_STEPS);
    result.flows.secondary.truncate(MAX_FLOW_STEPS);
    result.flows.edge_cases.truncate(MAX_FLOW_STEPS);
    result.ux_improvements.truncate(MAX_UX_IMPROVEMENTS);
    result.patterns.truncate(MAX_PATTERNS);
    result.wcag_notes.truncate(MAX_WCAG_NOTES);
    result.canvas_notes.truncate(MAX_CANVAS_NOTES);
    result
}
