//! Panel session state
//!
//! Holds the most recent snapshot and analysis. Both are replaced wholesale,
//! never edited in place. Every outgoing request is tagged with a
//! [`RequestId`]; only the response to the latest one is accepted, so a slow
//! answer can never overwrite a newer one.

use crate::plugin::{PluginMessage, PluginReply};
use copilot_model::{AnalysisResult, FrameSnapshot, GenerateDesignResponse, TaskRequest};
use std::sync::Arc;

/// Monotonic id of an outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request:{}", self.0)
    }
}

/// Response arrived after a newer request was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("stale response for {id}, latest is {latest}")]
pub struct Stale {
    pub id: RequestId,
    pub latest: RequestId,
}

/// State of one panel session
#[derive(Debug, Default)]
pub struct Session {
    snapshot: Option<Arc<FrameSnapshot>>,
    results: Option<Arc<AnalysisResult>>,
    issued: u64,
}

impl Session {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest captured snapshot
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<FrameSnapshot>> {
        self.snapshot.clone()
    }

    /// Latest accepted analysis
    #[inline]
    #[must_use]
    pub fn results(&self) -> Option<Arc<AnalysisResult>> {
        self.results.clone()
    }

    /// Record a reply from the canvas
    pub fn apply_reply(&mut self, reply: PluginReply) {
        match reply {
            PluginReply::SelectionCaptured { snapshot } => {
                match &snapshot {
                    Some(s) => tracing::info!(frame = %s.title, "Snapshot updated"),
                    None => tracing::info!("Snapshot cleared"),
                }
                self.snapshot = snapshot.map(Arc::new);
            }
        }
    }

    /// Issue the next request id
    pub fn begin_request(&mut self) -> RequestId {
        self.issued += 1;
        RequestId(self.issued)
    }

    /// Whether `id` is the latest issued
    #[inline]
    #[must_use]
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.issued
    }

    fn check(&self, id: RequestId) -> Result<(), Stale> {
        if self.is_current(id) {
            return Ok(());
        }
        let stale = Stale {
            id,
            latest: RequestId(self.issued),
        };
        tracing::warn!(%id, latest = %stale.latest, "Discarding stale response");
        Err(stale)
    }

    /// Attach the current snapshot to an analysis request
    #[must_use]
    pub fn analysis_request(&self, task: TaskRequest) -> TaskRequest {
        match &self.snapshot {
            Some(snapshot) => task.with_snapshot(snapshot.as_ref().clone()),
            None => task,
        }
    }

    /// Attach the current snapshot and analysis to a design request
    #[must_use]
    pub fn design_request(&self, task: TaskRequest) -> TaskRequest {
        let task = self.analysis_request(task);
        match &self.results {
            Some(results) => task.with_analysis(results.as_ref().clone()),
            None => task,
        }
    }

    /// Store an analysis if it answers the latest request
    pub fn accept_analysis(
        &mut self,
        id: RequestId,
        result: AnalysisResult,
    ) -> Result<Arc<AnalysisResult>, Stale> {
        self.check(id)?;
        let result = Arc::new(result);
        self.results = Some(Arc::clone(&result));
        Ok(result)
    }

    /// Pass a design through if it answers the latest request
    pub fn accept_design(
        &self,
        id: RequestId,
        response: GenerateDesignResponse,
    ) -> Result<GenerateDesignResponse, Stale> {
        self.check(id)?;
        Ok(response)
    }

    /// Message inserting the analysis's canvas notes, if there are any
    #[must_use]
    pub fn insert_notes_message(&self) -> Option<PluginMessage> {
        let results = self.results.as_ref()?;
        if results.canvas_notes.is_empty() {
            return None;
        }
        Some(PluginMessage::InsertNotes {
            notes: results.canvas_notes.clone(),
        })
    }

    /// Message inserting a scaffold for the pattern at `index`
    #[must_use]
    pub fn insert_scaffold_message(&self, index: usize) -> Option<PluginMessage> {
        let pattern = self.results.as_ref()?.patterns.get(index)?;
        Some(PluginMessage::InsertScaffold {
            pattern_name: pattern.name.clone(),
            components: pattern.scaffold_components(),
        })
    }
}

/// Message inserting a generated design
#[must_use]
pub fn insert_design_message(response: &GenerateDesignResponse) -> PluginMessage {
    PluginMessage::InsertDesign {
        scaffold_spec: response.scaffold_spec.clone(),
    }
}
