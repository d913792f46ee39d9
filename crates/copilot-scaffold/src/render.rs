//! Scaffold renderer
//!
//! Turns abstract layouts into [`Drawable`] trees:
//! - [`ScaffoldRenderer::render`] lays out a generated [`ScaffoldSpec`]
//! - [`ScaffoldRenderer::render_scaffold`] stacks mockups for one pattern
//! - [`ScaffoldRenderer::render_notes`] builds sticky notes
//!
//! Placement is a fixed convention relative to the first selected node:
//! notes go to its right, scaffolds and designs below it.

use crate::drawable::{AutoLayout, Drawable, FontStyle};
use crate::error::RenderError;
use crate::mockup::{mockup, HAIRLINE, MOCKUP_WIDTH, ON_SURFACE};
use copilot_model::{Bounds, LayoutMode, Region, Rgb, ScaffoldNode, ScaffoldSpec};

/// Distance between the anchor and inserted content
pub const PLACEMENT_OFFSET: f64 = 50.0;
/// Vertical spacing between stacked notes
pub const NOTE_SPACING: f64 = 20.0;

const FRAME_GAP: f64 = 16.0;
const FRAME_PADDING: f64 = 24.0;
const REGION_GAP: f64 = 12.0;
const REGION_PADDING: f64 = 16.0;

const SCAFFOLD_WIDTH: f64 = 312.0;
const SCAFFOLD_SPACING: f64 = 16.0;

const NOTE_WIDTH: f64 = 280.0;
const NOTE_PADDING: f64 = 16.0;
const NOTE_GAP: f64 = 8.0;
const NOTE_FILL: Rgb = Rgb::new(1.0, 0.95, 0.6);

const TEXT_SIZE: f64 = 14.0;
const DEFAULT_TEXT: &str = "Text";
const PLACEHOLDER_HEIGHT: f64 = 80.0;
const VERTICAL_DIVIDER_HEIGHT: f64 = 40.0;

/// Renders scaffolds, designs and notes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldRenderer;

impl ScaffoldRenderer {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Lay out a generated design
    ///
    /// The root frame keeps the spec's size. Regions stack along the frame's
    /// layout axis and hug their content unless they carry a height.
    pub fn render(&self, spec: &ScaffoldSpec) -> Result<Drawable, RenderError> {
        spec.validate()?;
        let frame = &spec.frame;
        let gap = frame.gap.unwrap_or(FRAME_GAP);
        let padding = frame.padding.unwrap_or(FRAME_PADDING);
        tracing::info!(
            width = frame.width,
            height = frame.height,
            regions = spec.regions.len(),
            nodes = spec.node_count(),
            "Rendering scaffold"
        );

        let inner = (frame.width - 2.0 * padding).max(0.0);
        let region_width = match frame.layout_mode {
            LayoutMode::Vertical => inner,
            LayoutMode::Horizontal if spec.regions.is_empty() => inner,
            LayoutMode::Horizontal => {
                let n = count_f64(spec.regions.len());
                ((inner - gap * (n - 1.0)) / n).max(0.0)
            }
        };

        let mut root = Drawable::frame("Generated Design", frame.width, frame.height)
            .fill(Rgb::WHITE)
            .layout(AutoLayout {
                mode: frame.layout_mode,
                gap,
                padding,
            });
        for region in &spec.regions {
            root.push(render_region(region, region_width));
        }
        Ok(root)
    }

    /// Titled container stacking one mockup per component
    #[must_use]
    pub fn render_scaffold(&self, pattern: &str, components: &[String]) -> Drawable {
        tracing::info!(pattern, components = components.len(), "Rendering pattern scaffold");
        let mut container =
            Drawable::frame(format!("Pattern Scaffold: {pattern}"), SCAFFOLD_WIDTH, 0.0)
                .fill(Rgb::grey(0.98))
                .radius(8.0)
                .layout(AutoLayout::vertical(SCAFFOLD_SPACING, SCAFFOLD_SPACING))
                .child(
                    Drawable::text(pattern, FontStyle::Bold, 16.0).fill(Rgb::grey(0.2)),
                );
        for name in components {
            container.push(mockup(name, None));
        }
        container.hug()
    }

    /// One sticky note per entry, unpositioned
    #[must_use]
    pub fn render_notes(&self, notes: &[String]) -> Vec<Drawable> {
        notes
            .iter()
            .enumerate()
            .map(|(i, content)| render_note(i + 1, content))
            .collect()
    }

    /// Stack notes to the right of `anchor`
    #[must_use]
    pub fn place_notes(&self, notes: Vec<Drawable>, anchor: &Bounds) -> Vec<Drawable> {
        let x = anchor.right() + PLACEMENT_OFFSET;
        let mut y = anchor.y;
        notes
            .into_iter()
            .map(|note| {
                let placed = note.at(x, y);
                y += placed.height + NOTE_SPACING;
                placed
            })
            .collect()
    }

    /// Position `drawable` below `anchor`, left-aligned with it
    #[must_use]
    pub fn place_below(&self, drawable: Drawable, anchor: &Bounds) -> Drawable {
        drawable.at(anchor.x, anchor.bottom() + PLACEMENT_OFFSET)
    }
}

fn render_region(region: &Region, width: f64) -> Drawable {
    let mode = region.layout_mode.unwrap_or_default();
    let gap = region.gap.unwrap_or(REGION_GAP);
    let padding = region.padding.unwrap_or(REGION_PADDING);
    let inner = (width - 2.0 * padding).max(0.0);
    tracing::debug!(
        region = %region.name,
        ?mode,
        nodes = region.nodes.len(),
        "Rendering region"
    );

    let mut frame = Drawable::frame(region.name.as_str(), width, 0.0).layout(AutoLayout {
        mode,
        gap,
        padding,
    });
    for node in &region.nodes {
        tracing::debug!(region = %region.name, kind = node.kind(), "Rendering node");
        frame.push(render_node(node, mode, inner));
    }

    match region.height {
        Some(height) if height > 0.0 => Drawable { height, ..frame },
        _ => frame.hug(),
    }
}

fn render_node(node: &ScaffoldNode, mode: LayoutMode, inner: f64) -> Drawable {
    match node {
        ScaffoldNode::Component {
            component_name,
            text_override,
        } => mockup(component_name, text_override.as_deref()),
        ScaffoldNode::Text { text_override } => {
            let text = text_override.as_deref().unwrap_or(DEFAULT_TEXT);
            let node = Drawable::text(text, FontStyle::Regular, TEXT_SIZE);
            let node = if node.width > inner && inner > 0.0 {
                Drawable::wrapped_text(text, FontStyle::Regular, TEXT_SIZE, inner)
            } else {
                node
            };
            node.fill(ON_SURFACE)
        }
        ScaffoldNode::Rect { text_override } => {
            let width = placeholder_width(inner);
            match text_override {
                Some(label) => Drawable::frame(label.as_str(), width, PLACEHOLDER_HEIGHT)
                    .fill(Rgb::grey(0.93))
                    .radius(8.0)
                    .child(
                        Drawable::text(label.as_str(), FontStyle::Regular, 12.0)
                            .at(16.0, 16.0)
                            .fill(Rgb::grey(0.4)),
                    ),
                None => Drawable::rect("Rectangle", width, PLACEHOLDER_HEIGHT)
                    .fill(Rgb::grey(0.93))
                    .radius(8.0),
            }
        }
        ScaffoldNode::Divider { text_override } => {
            let name = text_override.as_deref().unwrap_or("Divider");
            let divider = match mode {
                LayoutMode::Vertical => Drawable::rect(name, inner, 1.0),
                LayoutMode::Horizontal => Drawable::rect(name, 1.0, VERTICAL_DIVIDER_HEIGHT),
            };
            divider.fill(HAIRLINE)
        }
    }
}

fn placeholder_width(inner: f64) -> f64 {
    if inner > 0.0 {
        inner
    } else {
        MOCKUP_WIDTH
    }
}

fn render_note(index: usize, content: &str) -> Drawable {
    let inner = NOTE_WIDTH - 2.0 * NOTE_PADDING;
    Drawable::frame(format!("Note {index}"), NOTE_WIDTH, 0.0)
        .fill(NOTE_FILL)
        .radius(8.0)
        .layout(AutoLayout::vertical(NOTE_GAP, NOTE_PADDING))
        .child(Drawable::text(format!("💡 Note {index}"), FontStyle::Bold, 13.0).fill(Rgb::grey(0.1)))
        .child(
            Drawable::wrapped_text(content, FontStyle::Regular, 12.0, inner).fill(Rgb::grey(0.2)),
        )
        .hug()
}

#[allow(clippy::cast_precision_loss)]
fn count_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::{DrawKind, FontName};
    use copilot_model::FrameSpec;

    fn spec(mode: LayoutMode, regions: Vec<Region>) -> ScaffoldSpec {
        ScaffoldSpec {
            frame: FrameSpec {
                width: 1200.0,
                height: 800.0,
                layout_mode: mode,
                gap: None,
                padding: None,
            },
            regions,
        }
    }

    fn region(name: &str, nodes: Vec<ScaffoldNode>) -> Region {
        Region {
            name: name.to_string(),
            height: None,
            layout_mode: None,
            gap: None,
            padding: None,
            nodes,
        }
    }

    #[test]
    fn one_child_per_region_and_node() {
        let s = spec(
            LayoutMode::Vertical,
            vec![
                region("Header", vec![ScaffoldNode::text("Welcome")]),
                region(
                    "Form",
                    vec![
                        ScaffoldNode::component("md-outlined-text-field"),
                        ScaffoldNode::Divider {
                            text_override: None,
                        },
                        ScaffoldNode::component("md-filled-button"),
                    ],
                ),
            ],
        );
        let root = ScaffoldRenderer::new().render(&s).unwrap();
        assert_eq!((root.width, root.height), (1200.0, 800.0));
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].name, "Header");
        assert_eq!(root.children()[1].children().len(), 3);
        assert_eq!(root.children()[1].width, 1200.0 - 48.0);
    }

    #[test]
    fn horizontal_frame_splits_width() {
        let s = spec(
            LayoutMode::Horizontal,
            vec![region("Nav", vec![]), region("Main", vec![])],
        );
        let root = ScaffoldRenderer::new().render(&s).unwrap();
        let expected = (1200.0 - 48.0 - 16.0) / 2.0;
        assert!(root.children().iter().all(|r| r.width == expected));
    }

    #[test]
    fn explicit_region_height_is_kept() {
        let mut r = region("Hero", vec![ScaffoldNode::text("Hi")]);
        r.height = Some(320.0);
        let root = ScaffoldRenderer::new()
            .render(&spec(LayoutMode::Vertical, vec![r]))
            .unwrap();
        assert_eq!(root.children()[0].height, 320.0);
    }

    #[test]
    fn divider_orientation_follows_region() {
        let mut row = region(
            "Toolbar",
            vec![ScaffoldNode::Divider {
                text_override: Some("Split".into()),
            }],
        );
        row.layout_mode = Some(LayoutMode::Horizontal);
        let root = ScaffoldRenderer::new()
            .render(&spec(LayoutMode::Vertical, vec![row]))
            .unwrap();
        let divider = &root.children()[0].children()[0];
        assert_eq!(divider.name, "Split");
        assert_eq!(divider.width, 1.0);
        assert_eq!(divider.kind, DrawKind::Rectangle);
    }

    #[test]
    fn invalid_frame_is_rejected() {
        let mut s = spec(LayoutMode::Vertical, vec![]);
        s.frame.height = -1.0;
        assert!(matches!(
            ScaffoldRenderer::new().render(&s),
            Err(RenderError::InvalidSpec(_))
        ));
    }

    #[test]
    fn scaffold_container_stacks_title_and_mockups() {
        let components = vec!["md-outlined-text-field".to_string(), "md-text-button".to_string()];
        let scaffold = ScaffoldRenderer::new().render_scaffold("Inline Validation", &components);
        assert_eq!(scaffold.name, "Pattern Scaffold: Inline Validation");
        assert_eq!(scaffold.width, 312.0);
        assert_eq!(scaffold.children().len(), 3);
        assert_eq!(scaffold.children()[0].characters(), Some("Inline Validation"));
        // title + text field + button, two gaps, padding on both sides
        let title_height = scaffold.children()[0].height;
        assert_eq!(scaffold.height, title_height + 56.0 + 40.0 + 32.0 + 32.0);
        assert_eq!(scaffold.fonts()[0], FontName::inter(FontStyle::Bold));
    }

    #[test]
    fn notes_are_numbered_and_stacked_right_of_anchor() {
        let renderer = ScaffoldRenderer::new();
        let notes = renderer.render_notes(&["First".to_string(), "Second".to_string()]);
        assert_eq!(notes[0].name, "Note 1");
        assert_eq!(notes[1].texts()[0], "💡 Note 2");

        let anchor = Bounds::new(100.0, 200.0, 400.0, 300.0);
        let first_height = notes[0].height;
        let placed = renderer.place_notes(notes, &anchor);
        assert_eq!((placed[0].x, placed[0].y), (550.0, 200.0));
        assert_eq!((placed[1].x, placed[1].y), (550.0, 200.0 + first_height + 20.0));
    }

    #[test]
    fn scaffolds_go_below_anchor() {
        let anchor = Bounds::new(100.0, 200.0, 400.0, 300.0);
        let placed = ScaffoldRenderer::new().place_below(Drawable::frame("x", 1.0, 1.0), &anchor);
        assert_eq!((placed.x, placed.y), (100.0, 550.0));
    }
}
