//! Plugin message host
//!
//! The canvas side of the UI boundary. Messages arrive from the panel as
//! tagged JSON, get applied to a [`Canvas`], and may produce a reply.
//! Insert actions need a selection to anchor against; without one the user
//! sees a notice and the document is left untouched.

use crate::error::{CopilotError, Result};
use crate::extract::extract;
use copilot_model::{Bounds, FrameSnapshot, ScaffoldSpec};
use copilot_scaffold::{commit, Canvas, NodeId, ScaffoldRenderer};
use serde::{Deserialize, Serialize};

/// Messages posted from the panel to the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    CaptureSelection,
    InsertNotes {
        notes: Vec<String>,
    },
    InsertScaffold {
        #[serde(rename = "patternName")]
        pattern_name: String,
        components: Vec<String>,
    },
    InsertDesign {
        #[serde(rename = "scaffoldSpec")]
        scaffold_spec: ScaffoldSpec,
    },
    Close,
}

/// Messages posted from the canvas back to the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginReply {
    SelectionCaptured { snapshot: Option<FrameSnapshot> },
}

/// Applies panel messages to a canvas
#[derive(Debug)]
pub struct PluginHost<C> {
    canvas: C,
    renderer: ScaffoldRenderer,
    closed: bool,
}

impl<C: Canvas> PluginHost<C> {
    /// Create host over a canvas
    #[must_use]
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            renderer: ScaffoldRenderer::new(),
            closed: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Whether a `close` message has been handled
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Apply one message
    ///
    /// Insert actions without a selection fail with
    /// [`CopilotError::NoSelection`] after notifying the user.
    pub async fn handle(&mut self, message: PluginMessage) -> Result<Option<PluginReply>> {
        match message {
            PluginMessage::CaptureSelection => Ok(Some(self.capture())),
            PluginMessage::InsertNotes { notes } => {
                self.insert_notes(&notes).await?;
                Ok(None)
            }
            PluginMessage::InsertScaffold {
                pattern_name,
                components,
            } => {
                self.insert_scaffold(&pattern_name, &components).await?;
                Ok(None)
            }
            PluginMessage::InsertDesign { scaffold_spec } => {
                self.insert_design(&scaffold_spec).await?;
                Ok(None)
            }
            PluginMessage::Close => {
                tracing::info!("Plugin closed");
                self.closed = true;
                Ok(None)
            }
        }
    }

    /// Re-capture after the selection changed
    #[must_use]
    pub fn on_selection_change(&self) -> PluginReply {
        self.capture()
    }

    fn capture(&self) -> PluginReply {
        let snapshot = extract(&self.canvas.selection());
        match &snapshot {
            Some(s) => tracing::info!(frame = %s.title, nodes = s.node_count(), "Selection captured"),
            None => tracing::info!("Selection captured: nothing selected"),
        }
        PluginReply::SelectionCaptured { snapshot }
    }

    /// Stack sticky notes to the right of the selection
    pub async fn insert_notes(&mut self, notes: &[String]) -> Result<Vec<NodeId>> {
        let anchor = self.require_anchor("notes")?;
        tracing::info!(count = notes.len(), "Inserting canvas notes");

        let drawables = self
            .renderer
            .place_notes(self.renderer.render_notes(notes), &anchor);
        let mut ids = Vec::with_capacity(drawables.len());
        for note in drawables {
            ids.push(commit(&mut self.canvas, note).await?);
        }
        self.canvas
            .notify(&format!("✅ Added {} notes to canvas", notes.len()));
        Ok(ids)
    }

    /// Insert component mockups for a pattern below the selection
    pub async fn insert_scaffold(&mut self, pattern_name: &str, components: &[String]) -> Result<NodeId> {
        let anchor = self.require_anchor("scaffold")?;
        tracing::info!(pattern = %pattern_name, components = ?components, "Inserting scaffold");

        let scaffold = self.renderer.render_scaffold(pattern_name, components);
        let id = commit(&mut self.canvas, self.renderer.place_below(scaffold, &anchor)).await?;
        self.canvas.notify(&format!(
            "✅ Inserted scaffold: {pattern_name} with {} component mockups",
            components.len()
        ));
        Ok(id)
    }

    /// Insert a generated design below the selection
    pub async fn insert_design(&mut self, spec: &ScaffoldSpec) -> Result<NodeId> {
        let anchor = self.require_anchor("design")?;
        tracing::info!(regions = spec.regions.len(), "Inserting generated design");

        let design = self.renderer.render(spec)?;
        let id = commit(&mut self.canvas, self.renderer.place_below(design, &anchor)).await?;
        self.canvas.notify(&format!(
            "✅ Inserted design with {} regions",
            spec.regions.len()
        ));
        Ok(id)
    }

    fn require_anchor(&mut self, what: &str) -> Result<Bounds> {
        match self.canvas.anchor() {
            Some(anchor) => Ok(anchor),
            None => {
                tracing::warn!(insert = what, "Insert skipped: nothing selected");
                self.canvas
                    .notify(&format!("⚠️ Please select a frame first to position the {what}"));
                Err(CopilotError::NoSelection)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_model::SceneNode;
    use copilot_scaffold::MemoryCanvas;
    use serde_json::json;

    fn selected() -> MemoryCanvas {
        MemoryCanvas::with_selection(vec![SceneNode::frame("Home")
            .with_bounds(Bounds::new(100.0, 100.0, 400.0, 600.0))
            .with_child(SceneNode::text_layer("Welcome"))])
    }

    #[test]
    fn messages_use_kebab_case_tags() {
        let msg: PluginMessage = serde_json::from_value(json!({
            "type": "insert-scaffold",
            "patternName": "Stepper",
            "components": ["md-filled-button"]
        }))
        .unwrap();
        assert_eq!(
            msg,
            PluginMessage::InsertScaffold {
                pattern_name: "Stepper".into(),
                components: vec!["md-filled-button".into()],
            }
        );

        let reply = serde_json::to_value(PluginReply::SelectionCaptured { snapshot: None }).unwrap();
        assert_eq!(reply, json!({"type": "selection-captured", "snapshot": null}));

        let close: PluginMessage = serde_json::from_str(r#"{"type":"close"}"#).unwrap();
        assert_eq!(close, PluginMessage::Close);
    }

    #[tokio::test]
    async fn capture_selection_replies_with_snapshot() {
        let mut host = PluginHost::new(selected());
        let reply = host.handle(PluginMessage::CaptureSelection).await.unwrap();
        let Some(PluginReply::SelectionCaptured { snapshot: Some(snapshot) }) = reply else {
            panic!("expected a snapshot");
        };
        assert_eq!(snapshot.title, "Home");
        assert_eq!(snapshot.node_count(), 2);
    }

    #[tokio::test]
    async fn capture_with_empty_selection_is_none() {
        let mut host = PluginHost::new(MemoryCanvas::new());
        let reply = host.handle(PluginMessage::CaptureSelection).await.unwrap();
        assert_eq!(reply, Some(PluginReply::SelectionCaptured { snapshot: None }));
    }

    #[tokio::test]
    async fn notes_without_selection_are_skipped_with_notice() {
        let mut host = PluginHost::new(MemoryCanvas::new());
        let err = host
            .handle(PluginMessage::InsertNotes {
                notes: vec!["a".into()],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CopilotError::NoSelection));
        assert!(host.canvas().inserted().is_empty());
        assert_eq!(
            host.canvas().notifications(),
            ["⚠️ Please select a frame first to position the notes"]
        );
    }

    #[tokio::test]
    async fn notes_are_inserted_and_announced() {
        let mut host = PluginHost::new(selected());
        let ids = host
            .insert_notes(&["First".to_string(), "Second".to_string()])
            .await
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(host.canvas().inserted()[0].1.x, 550.0);
        assert_eq!(
            host.canvas().notifications().last().map(String::as_str),
            Some("✅ Added 2 notes to canvas")
        );
    }

    #[tokio::test]
    async fn scaffold_goes_below_selection() {
        let mut host = PluginHost::new(selected());
        host.handle(PluginMessage::InsertScaffold {
            pattern_name: "Stepper".into(),
            components: vec!["md-filled-button".into(), "md-list".into()],
        })
        .await
        .unwrap();

        let (_, scaffold) = &host.canvas().inserted()[0];
        assert_eq!((scaffold.x, scaffold.y), (100.0, 750.0));
        assert_eq!(scaffold.name, "Pattern Scaffold: Stepper");
        assert_eq!(
            host.canvas().notifications(),
            ["✅ Inserted scaffold: Stepper with 2 component mockups"]
        );
    }

    #[tokio::test]
    async fn close_marks_host_closed() {
        let mut host = PluginHost::new(MemoryCanvas::new());
        assert!(!host.is_closed());
        assert_eq!(host.handle(PluginMessage::Close).await.unwrap(), None);
        assert!(host.is_closed());
    }

    #[test]
    fn selection_change_recaptures() {
        let mut host = PluginHost::new(MemoryCanvas::new());
        assert_eq!(
            host.on_selection_change(),
            PluginReply::SelectionCaptured { snapshot: None }
        );
        host.canvas_mut().select(vec![SceneNode::frame("Next")]);
        let PluginReply::SelectionCaptured { snapshot } = host.on_selection_change();
        assert_eq!(snapshot.unwrap().title, "Next");
    }
}
