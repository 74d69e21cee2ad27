//! Block renderer for Manara pages.
//!
//! Turns a resolved [`LocalizedPage`](manara_page::LocalizedPage) into a
//! [`VisualTree`]: a backend-neutral element tree the web layer serializes
//! to markup. Dispatch is a `match` over the closed block variant set, so a
//! new block variant fails to compile until every consumer handles it.
//!
//! # Modes
//!
//! The same dispatcher serves the public site (`View`: animations active)
//! and the dashboard preview (`Edit`: editor affordances added, animations
//! replaced with static previews). Both consume the identical schema and
//! block list, which is what keeps the editor WYSIWYG.
//!
//! # Fail-soft policy
//!
//! Unrecognized and malformed blocks are dropped (with a warning) when a
//! persisted record is parsed; by the time a list reaches the renderer it
//! is fully typed, and no block's rendering can abort its siblings'.

mod animate;
mod render;
mod style;
mod tree;

pub use animate::ScrollTriggers;
pub use render::{RenderMode, Renderer};
pub use tree::{VisualNode, VisualTree};
