//! Geometric primitives for drawing coordinates.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in drawing space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Drawings use the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Values are in the drawing's physical unit (millimetres for panel
//! drawings) until they pass through a [`UnitConverter`](crate::units::UnitConverter).

/// A 2D point in drawing coordinate space.
///
/// # Examples
///
/// ```
/// # use panelgen_core::geometry::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
///
/// assert_eq!(a.distance(b), 5.0);
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

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Euclidean distance between this point and another.
    pub fn distance(self, other: Point) -> f32 {
        let delta = self.sub_point(other);
        delta.x.hypot(delta.y)
    }

    /// Returns `true` if the point lies within `[0, size.width] × [0, size.height]`.
    ///
    /// Edges are inclusive.
    pub fn is_within(self, size: Size) -> bool {
        (0.0..=size.width).contains(&self.x) && (0.0..=size.height).contains(&self.y)
    }
}

/// Represents the dimensions of an element with width and height
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
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);

        assert_approx_eq!(f32, a.distance(b), 5.0);
        assert_approx_eq!(f32, b.distance(a), 5.0);
        assert_approx_eq!(f32, a.distance(a), 0.0);
    }

    #[test]
    fn test_point_is_within() {
        let canvas = Size::new(225.0, 190.0);

        assert!(Point::new(0.0, 0.0).is_within(canvas));
        assert!(Point::new(225.0, 190.0).is_within(canvas));
        assert!(Point::new(100.0, 50.0).is_within(canvas));
        assert!(!Point::new(-0.1, 50.0).is_within(canvas));
        assert!(!Point::new(100.0, 190.5).is_within(canvas));
        assert!(!Point::new(300.0, 10.0).is_within(canvas));
    }
}
