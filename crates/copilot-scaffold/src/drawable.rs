//! Drawable: host-independent description of nodes to create
//!
//! Renderers build `Drawable` trees as plain values; a [`Canvas`](crate::Canvas)
//! turns them into real document nodes. Keeping the tree pure lets the
//! geometry be tested without a host.

use copilot_model::{LayoutMode, Paint, Rgb};
use serde::{Deserialize, Serialize};

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    Regular,
    Medium,
    Bold,
}

/// Font family and style pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: FontStyle,
}

impl FontName {
    /// Default UI font family
    pub const FAMILY: &'static str = "Inter";

    /// Inter in the given style
    #[must_use]
    pub fn inter(style: FontStyle) -> Self {
        Self {
            family: Self::FAMILY.to_string(),
            style,
        }
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.family, self.style)
    }
}

/// Auto-layout settings of a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    pub mode: LayoutMode,
    pub gap: f64,
    pub padding: f64,
}

impl AutoLayout {
    /// Vertical stack
    #[inline]
    #[must_use]
    pub fn vertical(gap: f64, padding: f64) -> Self {
        Self {
            mode: LayoutMode::Vertical,
            gap,
            padding,
        }
    }

    /// Horizontal row
    #[inline]
    #[must_use]
    pub fn horizontal(gap: f64, padding: f64) -> Self {
        Self {
            mode: LayoutMode::Horizontal,
            gap,
            padding,
        }
    }
}

/// Per-corner radii
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl Corners {
    /// Same radius on every corner
    #[inline]
    #[must_use]
    pub fn uniform(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }

    /// Rounded top, square bottom
    #[inline]
    #[must_use]
    pub fn top(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    }
}

/// Drop shadow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Rgb,
    pub alpha: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub radius: f64,
}

/// Stroke placement relative to the node edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeAlign {
    #[default]
    Center,
    Inside,
    Outside,
}

/// Node kind with kind-specific data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DrawKind {
    Frame {
        layout: Option<AutoLayout>,
        children: Vec<Drawable>,
    },
    Text {
        characters: String,
        font: FontName,
        font_size: f64,
        /// Width is fixed and height follows the wrapped content
        wrap: bool,
    },
    Rectangle,
    Line,
    Polygon {
        point_count: u8,
    },
}

/// One node to create, with its subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub name: String,
    pub kind: DrawKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: f64,
    pub stroke_align: StrokeAlign,
    pub corners: Corners,
    pub shadow: Option<Shadow>,
}

/// Line height used for text size estimates
const LINE_HEIGHT_RATIO: f64 = 1.2;
/// Average glyph advance relative to font size
const GLYPH_WIDTH_RATIO: f64 = 0.55;

impl Drawable {
    fn base(name: impl Into<String>, kind: DrawKind, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            x: 0.0,
            y: 0.0,
            width,
            height,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            stroke_align: StrokeAlign::Center,
            corners: Corners::default(),
            shadow: None,
        }
    }

    /// Empty frame without auto-layout
    #[must_use]
    pub fn frame(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self::base(
            name,
            DrawKind::Frame {
                layout: None,
                children: Vec::new(),
            },
            width,
            height,
        )
    }

    /// Single-line text node sized from its content
    #[must_use]
    pub fn text(characters: impl Into<String>, style: FontStyle, font_size: f64) -> Self {
        let characters = characters.into();
        let longest = characters.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = characters.lines().count().max(1);
        let width = (count_f64(longest) * font_size * GLYPH_WIDTH_RATIO).ceil();
        let height = count_f64(lines) * line_height(font_size);
        Self::base(
            characters.clone(),
            DrawKind::Text {
                characters,
                font: FontName::inter(style),
                font_size,
                wrap: false,
            },
            width,
            height,
        )
    }

    /// Text node wrapped to a fixed width
    #[must_use]
    pub fn wrapped_text(
        characters: impl Into<String>,
        style: FontStyle,
        font_size: f64,
        width: f64,
    ) -> Self {
        let mut node = Self::text(characters, style, font_size);
        let per_line = (width / (font_size * GLYPH_WIDTH_RATIO)).floor().max(1.0);
        let lines: f64 = match &node.kind {
            DrawKind::Text { characters, .. } => characters
                .lines()
                .map(|l| (count_f64(l.chars().count()) / per_line).ceil().max(1.0))
                .sum::<f64>()
                .max(1.0),
            _ => 1.0,
        };
        if let DrawKind::Text { wrap, .. } = &mut node.kind {
            *wrap = true;
        }
        node.width = width;
        node.height = lines * line_height(font_size);
        node
    }

    /// Rectangle
    #[must_use]
    pub fn rect(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self::base(name, DrawKind::Rectangle, width, height)
    }

    /// Horizontal line of the given length
    #[must_use]
    pub fn line(name: impl Into<String>, length: f64) -> Self {
        Self::base(name, DrawKind::Line, length, 0.0)
    }

    /// Regular polygon (triangle by default)
    #[must_use]
    pub fn polygon(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self::base(name, DrawKind::Polygon { point_count: 3 }, width, height)
    }

    /// Position relative to the parent
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Replace fills with one solid colour
    #[must_use]
    pub fn fill(mut self, color: Rgb) -> Self {
        self.fills = vec![Paint::solid(color)];
        self
    }

    /// Solid stroke
    #[must_use]
    pub fn stroke(mut self, color: Rgb, weight: f64) -> Self {
        self.strokes = vec![Paint::solid(color)];
        self.stroke_weight = weight;
        self
    }

    /// Stroke alignment
    #[must_use]
    pub fn stroke_align(mut self, align: StrokeAlign) -> Self {
        self.stroke_align = align;
        self
    }

    /// Uniform corner radius
    #[must_use]
    pub fn radius(mut self, r: f64) -> Self {
        self.corners = Corners::uniform(r);
        self
    }

    /// Per-corner radii
    #[must_use]
    pub fn corners(mut self, corners: Corners) -> Self {
        self.corners = corners;
        self
    }

    /// Drop shadow
    #[must_use]
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Auto-layout (frames only)
    #[must_use]
    pub fn layout(mut self, auto: AutoLayout) -> Self {
        if let DrawKind::Frame { layout, .. } = &mut self.kind {
            *layout = Some(auto);
        }
        self
    }

    /// Append a child (frames only)
    #[must_use]
    pub fn child(mut self, child: Drawable) -> Self {
        self.push(child);
        self
    }

    /// Append a child in place (frames only)
    pub fn push(&mut self, child: Drawable) {
        if let DrawKind::Frame { children, .. } = &mut self.kind {
            children.push(child);
        }
    }

    /// Children of a frame
    #[must_use]
    pub fn children(&self) -> &[Drawable] {
        match &self.kind {
            DrawKind::Frame { children, .. } => children,
            _ => &[],
        }
    }

    /// Text content of a text node
    #[must_use]
    pub fn characters(&self) -> Option<&str> {
        match &self.kind {
            DrawKind::Text { characters, .. } => Some(characters),
            _ => None,
        }
    }

    /// Resize an auto-layout frame to hug its children along the stack axis
    ///
    /// Only the height follows content for vertical stacks; horizontal rows
    /// take the tallest child. Frames without auto-layout are unchanged.
    #[must_use]
    pub fn hug(mut self) -> Self {
        if let DrawKind::Frame {
            layout: Some(auto),
            children,
        } = &self.kind
        {
            let inner = match auto.mode {
                LayoutMode::Vertical => {
                    let sum: f64 = children.iter().map(|c| c.height).sum();
                    let gaps = count_f64(children.len().saturating_sub(1)) * auto.gap;
                    sum + gaps
                }
                LayoutMode::Horizontal => children.iter().map(|c| c.height).fold(0.0, f64::max),
            };
            self.height = inner + 2.0 * auto.padding;
        }
        self
    }

    /// Pre-order walk over this node and its descendants
    pub fn walk(&self) -> impl Iterator<Item = &Drawable> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }

    /// Fonts required by text nodes, in first-use order
    #[must_use]
    pub fn fonts(&self) -> Vec<FontName> {
        let mut fonts: Vec<FontName> = Vec::new();
        for node in self.walk() {
            if let DrawKind::Text { font, .. } = &node.kind {
                if !fonts.contains(font) {
                    fonts.push(font.clone());
                }
            }
        }
        fonts
    }

    /// Number of nodes in this subtree
    #[must_use]
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// Always false: a drawable is at least itself
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All text content in pre-order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.walk().filter_map(Drawable::characters).collect()
    }
}

/// Line height for a font size
#[must_use]
pub fn line_height(font_size: f64) -> f64 {
    (font_size * LINE_HEIGHT_RATIO).round()
}

#[allow(clippy::cast_precision_loss)]
fn count_f64(n: usize) -> f64 {
    n as f64
}
