//! Deterministic PPTX renderer for AI-generated presentations.
//!
//! Consumes a validated [`deck_core::Presentation`] and produces the
//! binary `.pptx` container: one page per slide, fixed per-layout
//! geometry, theme colors, and content-independent page numbering.

pub mod theme;
pub mod writer;

mod xml;

pub use writer::{deck_filename, PptxRenderer};
