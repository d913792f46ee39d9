//! Copilot Model - shared data types
//!
//! Everything that crosses a boundary of the copilot pipeline:
//! - the abstract visual tree hosts expose ([`VisualNode`])
//! - bounded selection summaries ([`FrameSnapshot`])
//! - user task parameters ([`TaskRequest`])
//! - model outputs ([`AnalysisResult`], [`GenerateDesignResponse`])
//!
//! All wire types serialise as camelCase JSON.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod analysis;
pub mod color;
pub mod error;
pub mod node;
pub mod request;
pub mod scaffold;
pub mod snapshot;

pub use analysis::{AnalysisResult, Flows, PatternSuggestion, UxImprovement, WcagNote};
pub use color::Rgb;
pub use error::ModelError;
pub use node::{Bounds, Paint, PaintKind, SceneNode, VisualNode};
pub use request::TaskRequest;
pub use scaffold::{
    FrameSpec, GenerateDesignResponse, LayoutMode, Proposal, Region, ScaffoldNode, ScaffoldSpec,
};
pub use snapshot::{FrameSnapshot, SelectionSummary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
