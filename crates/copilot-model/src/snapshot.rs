//! Frame snapshot: bounded summary of a canvas selection

use crate::node::INSTANCE;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Maximum number of text samples in a snapshot
pub const MAX_TEXT_SAMPLES: usize = 10;
/// Maximum characters kept from one text sample before the ellipsis
pub const MAX_TEXT_CHARS: usize = 80;
/// Marker appended to truncated text samples
pub const ELLIPSIS: &str = "...";
/// Maximum number of colour samples in a snapshot
pub const MAX_COLOR_SAMPLES: usize = 6;
/// Title used when the first selected node has no name
pub const UNTITLED: &str = "Untitled";

/// Summary of a selection at capture time
///
/// Built once per capture and never mutated; the next capture replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    /// Name of the first selected node
    pub title: String,
    /// Structural summary of all selected subtrees
    pub selection_summary: SelectionSummary,
    /// Dominant colours as uppercase `#RRGGBB`, at most [`MAX_COLOR_SAMPLES`]
    #[serde(default)]
    pub color_samples: IndexSet<String>,
}

/// Structural part of a [`FrameSnapshot`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    /// Every node of every selected subtree, roots included
    pub node_count: usize,
    /// Distinct node types seen
    #[serde(default)]
    pub node_types: IndexSet<String>,
    /// Text samples in traversal order, at most [`MAX_TEXT_SAMPLES`]
    #[serde(default)]
    pub text_samples: Vec<String>,
    /// Distinct component names of instances
    #[serde(default)]
    pub component_names: IndexSet<String>,
}

impl FrameSnapshot {
    /// Create snapshot
    #[inline]
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        selection_summary: SelectionSummary,
        color_samples: IndexSet<String>,
    ) -> Self {
        Self {
            title: title.into(),
            selection_summary,
            color_samples,
        }
    }

    /// Total node count
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.selection_summary.node_count
    }

    /// Text samples
    #[inline]
    #[must_use]
    pub fn text_samples(&self) -> &[String] {
        &self.selection_summary.text_samples
    }

    /// Whether the selection contains any component instance
    #[inline]
    #[must_use]
    pub fn has_instances(&self) -> bool {
        self.selection_summary.node_types.contains(INSTANCE)
    }

    /// Enforce the sample caps on a snapshot received from outside
    ///
    /// Snapshots built by the extractor already satisfy the caps; snapshots
    /// deserialised from a request body may not.
    #[must_use]
    pub fn bounded(mut self) -> Self {
        let summary = &mut self.selection_summary;
        summary.text_samples.truncate(MAX_TEXT_SAMPLES);
        for sample in &mut summary.text_samples {
            if sample.chars().count() > MAX_TEXT_CHARS + ELLIPSIS.len() {
                *sample = truncate_text(sample);
            }
        }
        self.color_samples.truncate(MAX_COLOR_SAMPLES);
        self
    }
}

/// Cut `text` to [`MAX_TEXT_CHARS`] characters plus [`ELLIPSIS`]
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
#[must_use]
pub fn truncate_text(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT_CHARS {
        return text.to_string();
    }
    let mut out: String = text.chars().take(MAX_TEXT_CHARS).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate_text("Sign in"), "Sign in");
    }

    #[test]
    fn truncate_long_text_appends_ellipsis() {
        let long = "x".repeat(120);
        let out = truncate_text(&long);
        assert_eq!(out.chars().count(), 83);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let out = truncate_text(&"é".repeat(200));
        assert_eq!(out.chars().count(), 83);
        assert!(out.starts_with("éé"));
    }

    #[test]
    fn bounded_keeps_already_truncated_samples() {
        let sample = truncate_text(&"z".repeat(90));
        let summary = SelectionSummary {
            text_samples: vec![sample.clone()],
            ..SelectionSummary::default()
        };
        let snapshot = FrameSnapshot::new("t", summary, IndexSet::new()).bounded();
        assert_eq!(snapshot.text_samples(), [sample]);
    }

    #[test]
    fn snapshot_wire_shape() {
        let json = r##"{
            "title": "Checkout",
            "selectionSummary": {
                "nodeCount": 4,
                "nodeTypes": ["FRAME", "INSTANCE"],
                "textSamples": ["Pay now"],
                "componentNames": ["md-filled-button"]
            },
            "colorSamples": ["#FFFFFF"]
        }"##;

        let snapshot: FrameSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.node_count(), 4);
        assert!(snapshot.has_instances());
        assert_eq!(snapshot.text_samples(), ["Pay now".to_string()]);

        let back = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(back["selectionSummary"]["nodeTypes"][1], "INSTANCE");
    }

    #[test]
    fn bounded_enforces_caps() {
        let summary = SelectionSummary {
            node_count: 1,
            text_samples: (0..15).map(|i| format!("{i} {}", "y".repeat(100))).collect(),
            ..SelectionSummary::default()
        };
        let colors = (0..9).map(|i| format!("#00000{i}")).collect();
        let snapshot = FrameSnapshot::new("t", summary, colors).bounded();

        assert_eq!(snapshot.text_samples().len(), MAX_TEXT_SAMPLES);
        assert!(snapshot.text_samples().iter().all(|t| t.chars().count() <= 83));
        assert_eq!(snapshot.color_samples.len(), MAX_COLOR_SAMPLES);
    }
}
