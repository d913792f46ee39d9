//! Abstract visual document tree
//!
//! The extractor and renderer never see a host tool's concrete node types.
//! Hosts expose their document through [`VisualNode`]; [`SceneNode`] is the
//! owned implementation used for JSON input and tests.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// Node type of a reusable-component instance
pub const INSTANCE: &str = "INSTANCE";
/// Node type of a text node
pub const TEXT: &str = "TEXT";
/// Node type of a frame
pub const FRAME: &str = "FRAME";

/// Read-only view over one node of a visual document
pub trait VisualNode {
    /// Host node type (e.g. `FRAME`, `TEXT`, `INSTANCE`)
    fn node_type(&self) -> &str;

    /// Layer name, possibly empty
    fn name(&self) -> &str;

    /// Direct children in paint order
    fn children(&self) -> Box<dyn Iterator<Item = &dyn VisualNode> + '_>;

    /// Text content, only for text-bearing nodes
    fn text(&self) -> Option<&str> {
        None
    }

    /// Fill list, only for nodes that expose fills
    fn fills(&self) -> Option<&[Paint]> {
        None
    }

    /// Name of the main component, only for instances
    fn component_name(&self) -> Option<&str> {
        None
    }

    /// Absolute bounding box
    fn bounds(&self) -> Bounds {
        Bounds::default()
    }
}

/// Axis-aligned bounding box in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Paint kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    Image,
}

/// One entry of a fill or stroke list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    #[serde(default)]
    pub color: Rgb,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Paint {
    /// Visible solid paint
    #[inline]
    #[must_use]
    pub fn solid(color: Rgb) -> Self {
        Self {
            kind: PaintKind::Solid,
            color,
            visible: true,
        }
    }

    /// Hide this paint
    #[inline]
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Whether this paint is a visible solid colour
    #[inline]
    #[must_use]
    pub fn is_visible_solid(&self) -> bool {
        self.kind == PaintKind::Solid && self.visible
    }
}

/// Owned visual node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(flatten)]
    pub bounds: Bounds,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Node of the given type and name
    #[must_use]
    pub fn new(node_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Frame node
    #[must_use]
    pub fn frame(name: impl Into<String>) -> Self {
        Self::new(FRAME, name)
    }

    /// Text node carrying `characters`
    #[must_use]
    pub fn text_layer(characters: impl Into<String>) -> Self {
        let characters = characters.into();
        Self {
            node_type: TEXT.to_string(),
            name: characters.clone(),
            characters: Some(characters),
            ..Self::default()
        }
    }

    /// Instance of the named component
    #[must_use]
    pub fn instance(component: impl Into<String>) -> Self {
        let component = component.into();
        Self {
            node_type: INSTANCE.to_string(),
            name: component.clone(),
            component_name: Some(component),
            ..Self::default()
        }
    }

    /// With fills
    #[must_use]
    pub fn with_fills(mut self, fills: Vec<Paint>) -> Self {
        self.fills = Some(fills);
        self
    }

    /// With a single solid fill
    #[must_use]
    pub fn with_fill(self, color: Rgb) -> Self {
        self.with_fills(vec![Paint::solid(color)])
    }

    /// With bounds
    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// With one more child
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// With children
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SceneNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including `self`
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SceneNode::subtree_len).sum::<usize>()
    }
}

impl VisualNode for SceneNode {
    fn node_type(&self) -> &str {
        &self.node_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn VisualNode> + '_> {
        Box::new(self.children.iter().map(|c| c as &dyn VisualNode))
    }

    fn text(&self) -> Option<&str> {
        self.characters.as_deref()
    }

    fn fills(&self) -> Option<&[Paint]> {
        self.fills.as_deref()
    }

    fn component_name(&self) -> Option<&str> {
        self.component_name.as_deref()
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_node_from_json() {
        let json = r#"{
            "type": "FRAME",
            "name": "Login",
            "x": 10, "y": 20, "width": 300, "height": 400,
            "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}],
            "children": [
                {"type": "TEXT", "name": "t", "characters": "Email"},
                {"type": "INSTANCE", "name": "btn", "componentName": "md-filled-button"}
            ]
        }"#;

        let node: SceneNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.node_type(), FRAME);
        assert_eq!(node.bounds().right(), 310.0);
        assert_eq!(node.children().count(), 2);
        assert!(node.fills().unwrap()[0].is_visible_solid());
        assert_eq!(node.children[1].component_name(), Some("md-filled-button"));
        assert_eq!(node.subtree_len(), 3);
    }

    #[test]
    fn hidden_paint_is_not_visible_solid() {
        let paint = Paint::solid(Rgb::new(0.0, 0.0, 0.0)).hidden();
        assert!(!paint.is_visible_solid());
    }
}
