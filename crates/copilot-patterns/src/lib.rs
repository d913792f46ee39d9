//! Copilot Patterns - UI pattern knowledge base
//!
//! Maps pattern names (e.g. "Inline Validation") to the design-system
//! components that implement them, preview references and a rationale
//! template. Loaded once at startup and shared read-only.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod knowledge_base;

pub use error::KnowledgeBaseError;
pub use knowledge_base::{PatternKnowledgeBase, PatternMapping};
