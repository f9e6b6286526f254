//! Geometric primitives for glyph placement.
//!
//! - [`Point`] and [`Size`] hold either raw document units or, after
//!   normalization, percentages of the enclosing glyph (see `celldl::layout`).
//! - [`BBox`] is a glyph's raw SBGN-ML bounding box.
//! - [`Bounds`] is the min/max form used to take the union of sibling boxes.
//!
//! Both SBGN-ML and CellDL put the origin top-left with `y` growing down.

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use celldl_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }
}

/// Width and height of a glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }
}

/// A glyph's raw bounding box in document units.
///
/// SBGN-ML describes a box by its top-left corner and its dimensions.
/// Some editors write negative dimensions for mirrored shapes; those are
/// stored as their absolute value with the corner kept in place.
///
/// # Examples
///
/// ```
/// # use celldl_core::geometry::BBox;
/// let bbox = BBox::new(10.0, 20.0, 40.0, -10.0);
///
/// assert_eq!(bbox.size().height(), 10.0);
/// assert_eq!(bbox.center().x(), 30.0);
/// assert_eq!(bbox.center().y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl BBox {
    /// Creates a bounding box from the SBGN-ML `x`, `y`, `w` and `h` values.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.abs(),
            height: height.abs(),
        }
    }

    /// Returns the centre of the box, where a glyph is anchored.
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounds(self) -> Bounds {
        Bounds {
            min_x: self.x,
            min_y: self.y,
            max_x: self.x + self.width,
            max_y: self.y + self.height,
        }
    }
}

/// The union of one or more bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    pub fn min_y(self) -> f64 {
        self.min_y
    }

    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use celldl_core::geometry::BBox;
    /// let ras = BBox::new(0.0, 0.0, 100.0, 30.0).bounds();
    /// let raf = BBox::new(10.0, 40.0, 120.0, 80.0).bounds();
    ///
    /// let siblings = ras.merge(&raf);
    /// assert_eq!(siblings.min_x(), 0.0);
    /// assert_eq!(siblings.width(), 130.0);
    /// assert_eq!(siblings.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
