//! Copilot Core - design analysis and generation pipeline
//!
//! Turns a canvas selection plus a task description into:
//! - a bounded [`FrameSnapshot`](copilot_model::FrameSnapshot) of the selection
//! - a prompt for the generation model
//! - a schema-checked, capped and enriched analysis or design
//!
//! # Example
//!
//! ```rust,ignore
//! use copilot_core::{CopilotService, GeminiClient, GenerationConfig};
//! use copilot_model::TaskRequest;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GenerationConfig::default().with_api_key("key"))?;
//! let kb = Arc::new(copilot_patterns::PatternKnowledgeBase::builtin()?);
//! let service = CopilotService::new(Arc::new(client), kb);
//!
//! let analysis = service.analyze(&TaskRequest::new("Book a flight")).await?;
//! println!("{} patterns", analysis.patterns.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod gemini;
pub mod heuristics;
pub mod plugin;
pub mod prompt;
pub mod schema;
pub mod service;
pub mod session;
pub mod shape;

pub use api::ApiResponse;
pub use client::{decode, generate_json, GenerationClient};
pub use config::{CopilotConfig, GenerationConfig};
pub use error::{CopilotError, GenerationError, Operation, Result};
pub use extract::extract;
pub use gemini::GeminiClient;
pub use heuristics::heuristic_notes;
pub use plugin::{PluginHost, PluginMessage, PluginReply};
pub use prompt::{analysis_prompt, design_prompt};
pub use schema::{analysis_schema, design_schema, SchemaDescriptor, SchemaViolation};
pub use service::CopilotService;
pub use session::{RequestId, Session, Stale};
pub use shape::ResponseShaper;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
