//! Geometry normalization.
//!
//! Maps raw SBGN-ML bounding boxes into percentage coordinates. Each
//! nesting level is normalized against the union of its own siblings'
//! boxes: positions land in `[min_position, max_position]` and sizes
//! become percentages of the sibling extent.

use std::fmt;

use log::{debug, trace};
use thiserror::Error;

use celldl_core::{
    geometry::{BBox, Bounds, Point, Size},
    semantic::{Document, GlyphIndex},
};

use crate::config::LayoutConfig;

/// An axis of the diagram plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Errors raised while normalizing geometry.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The siblings of one parent span no distance along an axis.
    #[error("children of {} have zero {axis} extent", describe_parent(.parent))]
    DegenerateBounds {
        /// Identifier of the parent glyph, `None` for the document roots.
        parent: Option<String>,
        axis: Axis,
    },
}

fn describe_parent(parent: &Option<String>) -> String {
    match parent {
        Some(id) => format!("`{id}`"),
        None => "the document".to_string(),
    }
}

/// Linear mapping from one sibling set's raw extent into percentages.
///
/// # Examples
///
/// ```
/// # use celldl::{config::LayoutConfig, layout::Scaler};
/// # use celldl_core::geometry::BBox;
/// let boxes = [BBox::new(0.0, 0.0, 10.0, 10.0), BBox::new(90.0, 90.0, 10.0, 10.0)];
/// let scaler = Scaler::new(boxes, &LayoutConfig::default()).unwrap();
///
/// let position = scaler.scale_position(boxes[0].center());
/// assert_eq!(position.x(), 9.5);
/// assert_eq!(scaler.scale_size(boxes[0].size()).width(), 10.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scaler {
    bounds: Bounds,
    min_position: f64,
    max_position: f64,
}

impl Scaler {
    /// Accumulate the union of `boxes`. Returns `None` for an empty set.
    pub fn new(boxes: impl IntoIterator<Item = BBox>, config: &LayoutConfig) -> Option<Self> {
        let bounds = boxes
            .into_iter()
            .map(BBox::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))?;
        Some(Self {
            bounds,
            min_position: config.min_position(),
            max_position: config.max_position(),
        })
    }

    /// Returns the first axis along which the union has no extent.
    pub fn degenerate_axis(&self) -> Option<Axis> {
        if self.bounds.width() <= 0.0 {
            Some(Axis::Horizontal)
        } else if self.bounds.height() <= 0.0 {
            Some(Axis::Vertical)
        } else {
            None
        }
    }

    /// Returns the raw extent of the union.
    pub fn extent(&self) -> Size {
        self.bounds.to_size()
    }

    /// Map a raw point into the position range.
    pub fn scale_position(&self, point: Point) -> Point {
        let span = self.max_position - self.min_position;
        Point::new(
            self.min_position + span * (point.x() - self.bounds.min_x()) / self.bounds.width(),
            self.min_position + span * (point.y() - self.bounds.min_y()) / self.bounds.height(),
        )
    }

    /// Map a raw size into percentages of the extent.
    pub fn scale_size(&self, size: Size) -> Size {
        Size::new(
            100.0 * size.width() / self.bounds.width(),
            100.0 * size.height() / self.bounds.height(),
        )
    }
}

/// Normalize every glyph of `document`, parent first.
///
/// Records the extent of the root level on the document.
///
/// # Errors
///
/// Returns [`LayoutError::DegenerateBounds`] when a sibling set has zero
/// extent on an axis; no glyph is left with a non-finite coordinate.
pub fn normalize(document: &mut Document, config: &LayoutConfig) -> Result<(), LayoutError> {
    let roots = document.roots().to_vec();
    if let Some(scaler) = assign_geometry(document, &roots, None, config)? {
        let extent = scaler.extent();
        debug!(width = extent.width(), height = extent.height(); "Normalized geometry");
        document.set_extent(extent);
    }
    Ok(())
}

fn assign_geometry(
    document: &mut Document,
    siblings: &[GlyphIndex],
    parent: Option<GlyphIndex>,
    config: &LayoutConfig,
) -> Result<Option<Scaler>, LayoutError> {
    let Some(scaler) = Scaler::new(siblings.iter().map(|&i| document.glyph(i).bbox()), config)
    else {
        return Ok(None);
    };
    if let Some(axis) = scaler.degenerate_axis() {
        return Err(LayoutError::DegenerateBounds {
            parent: parent.map(|p| document.glyph(p).id().to_string()),
            axis,
        });
    }

    for &index in siblings {
        let bbox = document.glyph(index).bbox();
        let position = scaler.scale_position(bbox.center());
        let size = scaler.scale_size(bbox.size());
        trace!(id = document.glyph(index).id(), x = position.x(), y = position.y(); "Placed glyph");
        document.glyph_mut(index).set_geometry(position, size);

        let children = document.glyph(index).children().to_vec();
        assign_geometry(document, &children, Some(index), config)?;
    }
    Ok(Some(scaler))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use celldl_core::semantic::{Glyph, GlyphClass};

    use super::*;

    fn add(document: &mut Document, id: &str, class: GlyphClass, bbox: BBox) -> GlyphIndex {
        document.add_glyph(Glyph::new(id, id, class, id, bbox))
    }

    #[test]
    fn test_two_siblings() {
        let mut document = Document::new(None);
        let a = add(&mut document, "a", GlyphClass::Macromolecule, BBox::new(0.0, 0.0, 20.0, 10.0));
        let b = add(&mut document, "b", GlyphClass::Macromolecule, BBox::new(80.0, 40.0, 20.0, 10.0));
        document.add_root(a);
        document.add_root(b);

        normalize(&mut document, &LayoutConfig::default()).unwrap();

        let pa = document.glyph(a).position().unwrap();
        let pb = document.glyph(b).position().unwrap();
        assert_approx_eq!(f64, pa.x(), 14.0);
        assert_approx_eq!(f64, pa.y(), 14.0);
        assert_approx_eq!(f64, pb.x(), 86.0);
        assert_approx_eq!(f64, pb.y(), 86.0);

        let sa = document.glyph(a).size().unwrap();
        assert_approx_eq!(f64, sa.width(), 20.0);
        assert_approx_eq!(f64, sa.height(), 20.0);

        let extent = document.extent().unwrap();
        assert_approx_eq!(f64, extent.width(), 100.0);
        assert_approx_eq!(f64, extent.height(), 50.0);
    }

    #[test]
    fn test_nested_levels_use_their_own_bounds() {
        let mut document = Document::new(None);
        let outer = add(&mut document, "outer", GlyphClass::Compartment, BBox::new(0.0, 0.0, 1000.0, 1000.0));
        let inner = add(&mut document, "inner", GlyphClass::Macromolecule, BBox::new(400.0, 400.0, 10.0, 10.0));
        document.add_root(outer);
        document.link_child(outer, inner);

        normalize(&mut document, &LayoutConfig::default()).unwrap();

        let position = document.glyph(outer).position().unwrap();
        assert_approx_eq!(f64, position.x(), 50.0);
        let size = document.glyph(outer).size().unwrap();
        assert_approx_eq!(f64, size.width(), 100.0);

        // A single child is centred in its parent
        let position = document.glyph(inner).position().unwrap();
        assert_approx_eq!(f64, position.x(), 50.0);
        assert_approx_eq!(f64, position.y(), 50.0);
    }

    #[test]
    fn test_degenerate_bounds() {
        let mut document = Document::new(None);
        let outer = add(&mut document, "Cell", GlyphClass::Compartment, BBox::new(0.0, 0.0, 100.0, 100.0));
        let a = add(&mut document, "a", GlyphClass::Process, BBox::new(10.0, 10.0, 0.0, 5.0));
        let b = add(&mut document, "b", GlyphClass::Process, BBox::new(10.0, 30.0, 0.0, 5.0));
        document.add_root(outer);
        document.link_child(outer, a);
        document.link_child(outer, b);

        let err = normalize(&mut document, &LayoutConfig::default()).unwrap_err();
        assert_eq!(
            err,
            LayoutError::DegenerateBounds {
                parent: Some("Cell".to_string()),
                axis: Axis::Horizontal,
            }
        );
        assert_eq!(err.to_string(), "children of `Cell` have zero horizontal extent");
    }

    #[test]
    fn test_empty_document() {
        let mut document = Document::new(None);
        normalize(&mut document, &LayoutConfig::default()).unwrap();
        assert!(document.extent().is_none());
    }

    proptest! {
        #[test]
        fn prop_positions_within_range(
            boxes in prop::collection::vec(
                (-1000.0f64..1000.0, -1000.0f64..1000.0, 1.0f64..200.0, 1.0f64..200.0),
                2..12,
            )
        ) {
            let mut document = Document::new(None);
            for (i, (x, y, w, h)) in boxes.iter().enumerate() {
                let id = format!("g{i}");
                let index = add(&mut document, &id, GlyphClass::Macromolecule, BBox::new(*x, *y, *w, *h));
                document.add_root(index);
            }

            normalize(&mut document, &LayoutConfig::default()).unwrap();

            for (_, glyph) in document.glyphs() {
                let position = glyph.position().unwrap();
                prop_assert!((5.0 - 1e-9..=95.0 + 1e-9).contains(&position.x()));
                prop_assert!((5.0 - 1e-9..=95.0 + 1e-9).contains(&position.y()));
                let size = glyph.size().unwrap();
                prop_assert!(size.width().is_finite() && size.width() <= 100.0 + 1e-9);
            }
        }
    }
}
