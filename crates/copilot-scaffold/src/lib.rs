//! Copilot Scaffold - renders layouts onto a design canvas
//!
//! Key pieces:
//! - [`ComponentFamily`]: ordered rule table mapping component names to families
//! - [`mockup`]: fixed-geometry placeholder per family
//! - [`ScaffoldRenderer`]: generated designs, pattern scaffolds and sticky notes
//! - [`Canvas`]: host interface, with [`MemoryCanvas`] for tests and the CLI

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod canvas;
pub mod drawable;
pub mod error;
pub mod family;
pub mod memory;
pub mod mockup;
pub mod render;

pub use canvas::{commit, Canvas, NodeId};
pub use drawable::{AutoLayout, Corners, DrawKind, Drawable, FontName, FontStyle, Shadow};
pub use error::RenderError;
pub use family::{ButtonStyle, ComponentFamily};
pub use memory::MemoryCanvas;
pub use mockup::mockup;
pub use render::ScaffoldRenderer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
