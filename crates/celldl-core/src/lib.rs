//! CellDL Core Types and Definitions
//!
//! This crate provides the foundational types for converting SBGN process
//! descriptions into CellDL diagrams. It includes:
//!
//! - **Identifiers**: Per-run unique identifier assignment ([`identifier::IdAssigner`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Semantic**: The glyph/arc document model ([`semantic`] module)

pub mod geometry;
pub mod identifier;
pub mod semantic;
