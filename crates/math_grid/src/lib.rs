//! Math Grid - baseline-aligned character-grid layout for math markup
//!
//! This crate turns a structured math markup tree into a fixed-width,
//! multi-line character grid for plain-text and terminal display. It
//! provides:
//! - A markup tree model with a closed node-kind vocabulary
//! - The `GridBox` primitive: a character grid with an explicit baseline
//! - Compact Unicode sub/superscript glyph tables
//! - A recursive renderer dispatching per node kind
//! - A compositor that merges sibling boxes on a shared baseline
//!
//! Rendering is pure and total: no I/O, no shared mutable state, and every
//! structurally odd input has a defined fallback, so independent trees can
//! be rendered concurrently without coordination.

pub mod compose;
pub mod glyphs;
pub mod grid;
pub mod layout;
pub mod model;

pub use compose::concat_horizontal;
pub use grid::GridBox;
pub use layout::{GridRenderer, RenderOptions, BAR_CHAR};
pub use model::{MarkupNode, NodeKind};
