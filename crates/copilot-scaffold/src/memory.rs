//! In-memory canvas
//!
//! Backs the CLI and the tests. It enforces the host's font rule: inserting a
//! text node whose font was never loaded fails.

use crate::canvas::{Canvas, NodeId};
use crate::drawable::{DrawKind, Drawable, FontName};
use crate::error::RenderError;
use async_trait::async_trait;
use copilot_model::{SceneNode, VisualNode};
use std::collections::HashSet;

/// Canvas that keeps inserted trees in a vector
#[derive(Debug, Default)]
pub struct MemoryCanvas {
    selection: Vec<SceneNode>,
    inserted: Vec<(NodeId, Drawable)>,
    loaded_fonts: HashSet<FontName>,
    unavailable_fonts: HashSet<FontName>,
    notifications: Vec<String>,
    next_id: u64,
}

impl MemoryCanvas {
    /// Empty canvas with nothing selected
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas with the given selection
    #[must_use]
    pub fn with_selection(selection: Vec<SceneNode>) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    /// Make a font fail to load
    #[must_use]
    pub fn with_unavailable_font(mut self, font: FontName) -> Self {
        self.unavailable_fonts.insert(font);
        self
    }

    /// Replace the selection
    pub fn select(&mut self, selection: Vec<SceneNode>) {
        self.selection = selection;
    }

    /// Inserted trees in insertion order
    #[must_use]
    pub fn inserted(&self) -> &[(NodeId, Drawable)] {
        &self.inserted
    }

    /// Notices shown so far
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Whether a font has been loaded
    #[must_use]
    pub fn is_loaded(&self, font: &FontName) -> bool {
        self.loaded_fonts.contains(font)
    }

    fn check_fonts(&self, drawable: &Drawable) -> Result<(), RenderError> {
        for node in drawable.walk() {
            if let DrawKind::Text { font, .. } = &node.kind {
                if !self.loaded_fonts.contains(font) {
                    return Err(RenderError::FontNotLoaded(font.clone()));
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Canvas for MemoryCanvas {
    fn selection(&self) -> Vec<&dyn VisualNode> {
        self.selection.iter().map(|n| n as &dyn VisualNode).collect()
    }

    async fn load_font(&mut self, font: &FontName) -> Result<(), RenderError> {
        if self.unavailable_fonts.contains(font) {
            return Err(RenderError::FontUnavailable {
                font: font.clone(),
                reason: "not installed".to_string(),
            });
        }
        self.loaded_fonts.insert(font.clone());
        Ok(())
    }

    fn insert(&mut self, drawable: Drawable) -> Result<NodeId, RenderError> {
        self.check_fonts(&drawable)?;
        self.next_id += 1;
        let id = NodeId(self.next_id);
        self.inserted.push((id, drawable));
        Ok(id)
    }

    fn notify(&mut self, message: &str) {
        tracing::info!(message, "Canvas notice");
        self.notifications.push(message.to_string());
    }
}
