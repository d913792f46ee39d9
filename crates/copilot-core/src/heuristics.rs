//! Rule-based accessibility findings
//!
//! Computed from the snapshot alone, independent of the model.

use copilot_model::node::INSTANCE;
use copilot_model::{FrameSnapshot, WcagNote};
use once_cell::sync::Lazy;
use regex::Regex;

/// Hex colours whose red channel starts with C, D, E or F
static LIGHT_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[CDEFcdef][0-9A-Fa-f]{5}$").expect("light colour pattern"));

/// Words that suggest a form field
static FORM_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)email|password|search|name|phone").expect("form word pattern"));

pub const LOW_CONTRAST_ISSUE: &str = "Potential low contrast detected";
pub const FORM_LABEL_ISSUE: &str = "Form field labels";

/// Notes triggered by `snapshot`, in a fixed order
#[must_use]
pub fn heuristic_notes(snapshot: &FrameSnapshot) -> Vec<WcagNote> {
    let mut notes = Vec::new();
    if let Some(note) = low_contrast(snapshot) {
        notes.push(note);
    }
    if let Some(note) = form_labels(snapshot) {
        notes.push(note);
    }
    notes
}

fn low_contrast(snapshot: &FrameSnapshot) -> Option<WcagNote> {
    let light: Vec<&str> = snapshot
        .color_samples
        .iter()
        .map(String::as_str)
        .filter(|c| LIGHT_COLOR.is_match(c))
        .collect();
    if light.is_empty() {
        return None;
    }
    Some(WcagNote::new(
        LOW_CONTRAST_ISSUE,
        format!(
            "Light colors found: {}. Ensure text contrast ratio ≥ 4.5:1 for normal text.",
            light.join(", ")
        ),
        "Use a contrast checker tool and adjust foreground/background colors to meet WCAG AA standards.",
    ))
}

fn form_labels(snapshot: &FrameSnapshot) -> Option<WcagNote> {
    let summary = &snapshot.selection_summary;
    let has_form = summary.node_types.contains(INSTANCE)
        || summary.text_samples.iter().any(|t| FORM_WORD.is_match(t));
    has_form.then(|| {
        WcagNote::new(
            FORM_LABEL_ISSUE,
            "Ensure all form fields have explicit labels, not just placeholder text.",
            "Add visible <label> elements or aria-label attributes for screen readers.",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_model::SelectionSummary;
    use indexmap::IndexSet;

    fn snapshot(colors: &[&str], types: &[&str], texts: &[&str]) -> FrameSnapshot {
        FrameSnapshot::new(
            "f",
            SelectionSummary {
                node_count: 1,
                node_types: types.iter().map(|s| (*s).to_string()).collect(),
                text_samples: texts.iter().map(|s| (*s).to_string()).collect(),
                component_names: IndexSet::new(),
            },
            colors.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    #[test]
    fn light_color_triggers_low_contrast() {
        let notes = heuristic_notes(&snapshot(&["#F5F5F5", "#202020"], &["FRAME"], &[]));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].issue, LOW_CONTRAST_ISSUE);
        assert!(notes[0].detail.contains("#F5F5F5"));
        assert!(!notes[0].detail.contains("#202020"));
    }

    #[test]
    fn dark_color_alone_does_not() {
        assert!(heuristic_notes(&snapshot(&["#202020"], &["FRAME"], &[])).is_empty());
    }

    #[test]
    fn lowercase_hex_still_matches() {
        assert!(LIGHT_COLOR.is_match("#cafe00"));
        assert!(!LIGHT_COLOR.is_match("#BAFE00"));
    }

    #[test]
    fn instance_or_form_words_trigger_labels() {
        let by_type = heuristic_notes(&snapshot(&[], &["INSTANCE"], &[]));
        assert_eq!(by_type[0].issue, FORM_LABEL_ISSUE);

        let by_text = heuristic_notes(&snapshot(&[], &["TEXT"], &["Your EMAIL address"]));
        assert_eq!(by_text[0].issue, FORM_LABEL_ISSUE);

        assert!(heuristic_notes(&snapshot(&[], &["TEXT"], &["Welcome back"])).is_empty());
    }

    #[test]
    fn both_notes_in_fixed_order() {
        let notes = heuristic_notes(&snapshot(&["#EEEEEE"], &["INSTANCE"], &[]));
        let issues: Vec<&str> = notes.iter().map(|n| n.issue.as_str()).collect();
        assert_eq!(issues, vec![LOW_CONTRAST_ISSUE, FORM_LABEL_ISSUE]);
    }
}
