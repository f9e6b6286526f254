//! Semantic model of an SBGN process description.
//!
//! These types hold the document after parsing and tree building: glyphs
//! arranged in a containment hierarchy, the arcs between them, and (once
//! link inference has run) the connections that replace process glyphs.
//!
//! # Pipeline Position
//!
//! ```text
//! SBGN-ML text
//!     ↓ reader + tree builder (celldl-parser)
//! Document (these types) - glyph arena, containment, resolved arcs
//!     ↓ geometry normalization
//! Document with percentage positions/sizes
//!     ↓ link inference
//! Connections between non-process glyphs
//!     ↓ export
//! CellDL markup / JSON graph / Turtle
//! ```
//!
//! # Organization
//!
//! - [`glyph`] - [`Glyph`], [`GlyphClass`], [`StyleTags`]
//! - [`document`] - [`Document`], [`GlyphIndex`], [`Arc`], [`Connection`]

pub mod document;
pub mod glyph;

pub use document::*;
pub use glyph::*;
