//! Canvas host interface
//!
//! The renderer never touches a document directly. A [`Canvas`] exposes the
//! current selection and accepts finished [`Drawable`] trees. Font loading is
//! the only asynchronous host call; [`commit`] awaits every font a tree needs
//! before inserting it.

use crate::drawable::{Drawable, FontName};
use crate::error::RenderError;
use async_trait::async_trait;
use copilot_model::{Bounds, VisualNode};
use serde::{Deserialize, Serialize};

/// Host-assigned id of an inserted node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node:{}", self.0)
    }
}

/// Document host
#[async_trait]
pub trait Canvas: Send {
    /// Currently selected nodes, in selection order
    fn selection(&self) -> Vec<&dyn VisualNode>;

    /// Make a font available for text nodes
    async fn load_font(&mut self, font: &FontName) -> Result<(), RenderError>;

    /// Insert a drawable tree at the document root
    fn insert(&mut self, drawable: Drawable) -> Result<NodeId, RenderError>;

    /// Show a short, dismissible notice
    fn notify(&mut self, message: &str);

    /// Bounds of the first selected node
    fn anchor(&self) -> Option<Bounds> {
        self.selection().first().map(|node| node.bounds())
    }
}

/// Load every font `drawable` needs, in first-use order, then insert it
pub async fn commit<C>(canvas: &mut C, drawable: Drawable) -> Result<NodeId, RenderError>
where
    C: Canvas + ?Sized,
{
    for font in drawable.fonts() {
        canvas.load_font(&font).await?;
    }
    let name = drawable.name.clone();
    let nodes = drawable.len();
    let id = canvas.insert(drawable)?;
    tracing::debug!(%id, name = %name, nodes, "Committed drawable");
    Ok(id)
}
