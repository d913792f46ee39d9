//! Snapshot extraction
//!
//! One pre-order walk over every selected subtree. Counting and type
//! collection always cover the whole selection; text and colour sampling
//! stop contributing once their caps are reached.

use copilot_model::snapshot::{
    truncate_text, MAX_COLOR_SAMPLES, MAX_TEXT_SAMPLES, UNTITLED,
};
use copilot_model::{FrameSnapshot, Paint, SelectionSummary, VisualNode};
use indexmap::IndexSet;

/// Summarise a selection
///
/// Returns `None` for an empty selection.
#[must_use]
pub fn extract(roots: &[&dyn VisualNode]) -> Option<FrameSnapshot> {
    let first = roots.first()?;
    let title = match first.name().trim() {
        "" => UNTITLED.to_string(),
        _ => first.name().to_string(),
    };

    let mut sampler = Sampler::default();
    for root in roots {
        sampler.walk(*root);
    }

    let snapshot = FrameSnapshot::new(title, sampler.summary, sampler.colors);
    tracing::debug!(
        title = %snapshot.title,
        nodes = snapshot.node_count(),
        texts = snapshot.text_samples().len(),
        colors = snapshot.color_samples.len(),
        "Extracted snapshot"
    );
    Some(snapshot)
}

#[derive(Default)]
struct Sampler {
    summary: SelectionSummary,
    colors: IndexSet<String>,
}

impl Sampler {
    fn walk(&mut self, root: &dyn VisualNode) {
        let mut stack: Vec<&dyn VisualNode> = vec![root];
        while let Some(node) = stack.pop() {
            self.visit(node);
            let children: Vec<&dyn VisualNode> = node.children().collect();
            stack.extend(children.into_iter().rev());
        }
    }

    fn visit(&mut self, node: &dyn VisualNode) {
        self.summary.node_count += 1;
        if !self.summary.node_types.contains(node.node_type()) {
            self.summary.node_types.insert(node.node_type().to_string());
        }

        if self.summary.text_samples.len() < MAX_TEXT_SAMPLES {
            if let Some(text) = node.text().map(str::trim).filter(|t| !t.is_empty()) {
                self.summary.text_samples.push(truncate_text(text));
            }
        }

        if let Some(component) = node.component_name() {
            if !self.summary.component_names.contains(component) {
                self.summary.component_names.insert(component.to_string());
            }
        }

        if self.colors.len() < MAX_COLOR_SAMPLES {
            if let Some(paint) = node.fills().and_then(first_visible_solid) {
                self.colors.insert(paint.color.to_hex());
            }
        }
    }
}

fn first_visible_solid(fills: &[Paint]) -> Option<&Paint> {
    fills.iter().find(|p| p.is_visible_solid())
}
