//! Scaffold specification: abstract layout returned by design generation

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Auto-layout direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutMode {
    #[serde(alias = "horizontal")]
    Horizontal,
    #[default]
    #[serde(alias = "vertical")]
    Vertical,
}

/// Abstract layout of a generated design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldSpec {
    pub frame: FrameSpec,
    pub regions: Vec<Region>,
}

/// Root frame of a scaffold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSpec {
    pub width: f64,
    pub height: f64,
    pub layout_mode: LayoutMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

/// A named region of the frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(default)]
    pub nodes: Vec<ScaffoldNode>,
}

/// One node of a region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ScaffoldNode {
    /// Instance of a named design-system component
    Component {
        component_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_override: Option<String>,
    },
    /// Free text
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_override: Option<String>,
    },
    /// Plain rectangle
    Rect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_override: Option<String>,
    },
    /// Thin separator
    Divider {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text_override: Option<String>,
    },
}

impl ScaffoldNode {
    /// Component node
    #[must_use]
    pub fn component(name: impl Into<String>) -> Self {
        Self::Component {
            component_name: name.into(),
            text_override: None,
        }
    }

    /// Text node
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text_override: Some(text.into()),
        }
    }

    /// Text override carried by any variant
    #[must_use]
    pub fn text_override(&self) -> Option<&str> {
        match self {
            Self::Component { text_override, .. }
            | Self::Text { text_override }
            | Self::Rect { text_override }
            | Self::Divider { text_override } => text_override.as_deref(),
        }
    }

    /// Wire tag of the variant
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Component { .. } => "component",
            Self::Text { .. } => "text",
            Self::Rect { .. } => "rect",
            Self::Divider { .. } => "divider",
        }
    }
}

impl ScaffoldSpec {
    /// Check frame dimensions are positive
    pub fn validate(&self) -> Result<(), ModelError> {
        let FrameSpec { width, height, .. } = self.frame;
        if !(width > 0.0 && height > 0.0) {
            return Err(ModelError::InvalidFrameSize { width, height });
        }
        Ok(())
    }

    /// Total number of nodes across all regions
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.regions.iter().map(|r| r.nodes.len()).sum()
    }
}

/// Short proposal accompanying a generated design
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub title: String,
    pub why: String,
    #[serde(default)]
    pub patterns_used: Vec<String>,
}

/// Result of a design-generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDesignResponse {
    pub scaffold_spec: ScaffoldSpec,
    pub proposal: Proposal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_are_tagged_by_type() {
        let json = r#"[
            {"type": "component", "componentName": "md-filled-button", "textOverride": "Save"},
            {"type": "text", "textOverride": "Welcome", "componentName": null},
            {"type": "divider"},
            {"type": "rect"}
        ]"#;
        let nodes: Vec<ScaffoldNode> = serde_json::from_str(json).unwrap();

        assert_eq!(nodes[0].text_override(), Some("Save"));
        assert_eq!(nodes[1], ScaffoldNode::text("Welcome"));
        assert_eq!(nodes[2].kind(), "divider");
        assert_eq!(nodes[3].text_override(), None);
    }

    #[test]
    fn component_requires_name() {
        let result = serde_json::from_str::<ScaffoldNode>(r#"{"type": "component"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn frame_must_be_positive() {
        let spec = ScaffoldSpec {
            frame: FrameSpec {
                width: 0.0,
                height: 800.0,
                layout_mode: LayoutMode::Vertical,
                gap: None,
                padding: None,
            },
            regions: vec![],
        };
        assert!(matches!(
            spec.validate(),
            Err(ModelError::InvalidFrameSize { .. })
        ));
    }

    #[test]
    fn layout_mode_accepts_lowercase() {
        let mode: LayoutMode = serde_json::from_str("\"horizontal\"").unwrap();
        assert_eq!(mode, LayoutMode::Horizontal);
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"HORIZONTAL\"");
    }
}
