//! Geometric primitives for sequence diagram layout.
//!
//! This module provides the small set of geometric types the layout engine and
//! the renderers exchange: positions, dimensions, axis-aligned boxes and
//! four-sided spacing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Rect`] - An axis-aligned box anchored at its top-left corner
//! - [`Insets`] - Margin/padding values for four sides
//!
//! # Coordinate System
//!
//! Coordinates follow SVG conventions:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Every laid-out box is described by its top-left corner plus its size, the
//! same way the layout engine reasons about actor columns.

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use seqdraw_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance between this point and another point.
    ///
    /// ```
    /// # use seqdraw_core::geometry::Point;
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance_to(b), 5.0);
    /// ```
    pub fn distance_to(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Point, t: f32) -> Self {
        Self {
            x: (other.x - self.x) * t + self.x,
            y: (other.y - self.y) * t + self.y,
        }
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size grown by the given insets on each side.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Returns a new Size with only the width changed by `delta`.
    pub fn grow_width(self, delta: f32) -> Self {
        Self {
            width: self.width + delta,
            height: self.height,
        }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
///
/// # Examples
///
/// ```
/// # use seqdraw_core::geometry::{Point, Rect, Size};
/// let rect = Rect::new(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
/// assert_eq!(rect.center_x(), 25.0);
/// assert_eq!(rect.center_y(), 40.0);
/// assert_eq!(rect.max_x(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from raw components.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn x(self) -> f32 {
        self.origin.x()
    }

    pub fn y(self) -> f32 {
        self.origin.y()
    }

    pub fn width(self) -> f32 {
        self.size.width()
    }

    pub fn height(self) -> f32 {
        self.size.height()
    }

    pub fn size(self) -> Size {
        self.size
    }

    pub fn max_x(self) -> f32 {
        self.x() + self.width()
    }

    pub fn max_y(self) -> f32 {
        self.y() + self.height()
    }

    pub fn center_x(self) -> f32 {
        self.x() + self.width() / 2.0
    }

    pub fn center_y(self) -> f32 {
        self.y() + self.height() / 2.0
    }

    pub fn center(self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Shrinks the rectangle by the given insets on each side.
    ///
    /// ```
    /// # use seqdraw_core::geometry::{Insets, Rect};
    /// let outer = Rect::from_xywh(0.0, 0.0, 100.0, 50.0);
    /// let inner = outer.inset(Insets::uniform(10.0));
    /// assert_eq!(inner, Rect::from_xywh(10.0, 10.0, 80.0, 30.0));
    /// ```
    pub fn inset(self, insets: Insets) -> Self {
        Self::from_xywh(
            self.x() + insets.left(),
            self.y() + insets.top(),
            self.width() - insets.horizontal_sum(),
            self.height() - insets.vertical_sum(),
        )
    }
}

/// Spacing on four sides of a box (CSS order: top, right, bottom, left).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Sum of left and right.
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(10.0, 20.0);
        assert_eq!(point.x(), 10.0);
        assert_eq!(point.y(), 20.0);
    }

    #[test]
    fn test_point_sub() {
        let result = Point::new(10.0, 20.0).sub_point(Point::new(4.0, 5.0));
        assert_eq!(result, Point::new(6.0, 15.0));
    }

    #[test]
    fn test_point_lerp_endpoints() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(100.0, 30.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let half = a.lerp(b, 0.5);
        assert_approx_eq!(f32, half.x(), 50.0);
        assert_approx_eq!(f32, half.y(), 20.0);
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(100.0, 50.0).add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_approx_eq!(f32, size.width(), 106.0);
        assert_approx_eq!(f32, size.height(), 54.0);
    }

    #[test]
    fn test_size_grow_width_negative() {
        let size = Size::new(40.0, 10.0).grow_width(-12.0);
        assert_approx_eq!(f32, size.width(), 28.0);
        assert_approx_eq!(f32, size.height(), 10.0);
    }

    #[test]
    fn test_rect_accessors() {
        let rect = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_approx_eq!(f32, rect.x(), 10.0);
        assert_approx_eq!(f32, rect.y(), 20.0);
        assert_approx_eq!(f32, rect.max_x(), 40.0);
        assert_approx_eq!(f32, rect.max_y(), 60.0);
        assert_approx_eq!(f32, rect.center_x(), 25.0);
        assert_approx_eq!(f32, rect.center_y(), 40.0);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::from_xywh(40.0, 45.0, 20.0, 10.0);
        assert_eq!(rect.center(), Point::new(50.0, 50.0));
        assert_eq!(rect.size(), Size::new(20.0, 10.0));
    }

    #[test]
    fn test_rect_inset_uneven() {
        let rect = Rect::from_xywh(5.0, 5.0, 50.0, 20.0);
        let inner = rect.inset(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(inner, Rect::from_xywh(9.0, 6.0, 44.0, 16.0));
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_approx_eq!(f32, insets.horizontal_sum(), 6.0);
        assert_approx_eq!(f32, insets.vertical_sum(), 4.0);
        assert_eq!(Insets::uniform(5.0), Insets::new(5.0, 5.0, 5.0, 5.0));
    }
}
