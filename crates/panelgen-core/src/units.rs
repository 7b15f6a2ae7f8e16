//! Conversion between physical drawing units and editor pixels.
//!
//! A [`UnitConverter`] holds two independent scale factors, one per axis,
//! derived once from the declared physical canvas size and the declared
//! pixel canvas size. Both factors are strictly positive.

use log::debug;
use thiserror::Error;

use crate::geometry::{Point, Size};

/// Errors produced while deriving scale factors.
#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("physical canvas size must be positive, got {width} x {height}")]
    InvalidPhysical { width: f32, height: f32 },

    #[error("pixel canvas size must be positive, got {width} x {height}")]
    InvalidPixels { width: f32, height: f32 },
}

/// Linear rescale from physical units to pixels.
///
/// # Examples
///
/// ```
/// # use panelgen_core::{geometry::{Point, Size}, units::UnitConverter};
/// let converter = UnitConverter::new(Size::new(225.0, 190.0), Size::new(850.0, 720.0))
///     .expect("valid canvas");
///
/// assert_eq!(converter.to_pixels(Point::new(112.5, 95.0)), (425, 360));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    scale_x: f32,
    scale_y: f32,
}

impl UnitConverter {
    /// Derive scale factors from the physical and pixel canvas sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError`] if any dimension is zero, negative or not finite.
    pub fn new(physical: Size, pixels: Size) -> Result<Self, ScaleError> {
        if !is_positive(physical) {
            return Err(ScaleError::InvalidPhysical {
                width: physical.width(),
                height: physical.height(),
            });
        }
        if !is_positive(pixels) {
            return Err(ScaleError::InvalidPixels {
                width: pixels.width(),
                height: pixels.height(),
            });
        }

        let scale_x = pixels.width() / physical.width();
        let scale_y = pixels.height() / physical.height();
        debug!(scale_x, scale_y; "Derived scale factors");

        Ok(Self { scale_x, scale_y })
    }

    /// Horizontal pixels per physical unit.
    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    /// Vertical pixels per physical unit.
    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    /// Convert a physical position to whole pixels.
    pub fn to_pixels(&self, point: Point) -> (i32, i32) {
        (
            round_px(point.x() * self.scale_x),
            round_px(point.y() * self.scale_y),
        )
    }

    /// Convert a physical size to whole pixels.
    pub fn size_to_pixels(&self, size: Size) -> (i32, i32) {
        (
            round_px(size.width() * self.scale_x),
            round_px(size.height() * self.scale_y),
        )
    }
}

fn is_positive(size: Size) -> bool {
    size.width().is_finite() && size.height().is_finite() && size.width() > 0.0 && size.height() > 0.0
}

fn round_px(value: f32) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_scale_factors() {
        let converter =
            UnitConverter::new(Size::new(225.0, 190.0), Size::new(850.0, 720.0)).unwrap();

        assert_approx_eq!(f32, converter.scale_x(), 850.0 / 225.0);
        assert_approx_eq!(f32, converter.scale_y(), 720.0 / 190.0);
    }

    #[test]
    fn test_to_pixels_rounds() {
        let converter =
            UnitConverter::new(Size::new(225.0, 190.0), Size::new(850.0, 720.0)).unwrap();

        // 30mm * 3.777.. = 113.33 ; 40mm * 3.789.. = 151.57
        assert_eq!(converter.to_pixels(Point::new(30.0, 40.0)), (113, 152));
        assert_eq!(converter.size_to_pixels(Size::new(10.0, 5.0)), (38, 19));
    }

    #[test]
    fn test_axes_are_independent() {
        let converter = UnitConverter::new(Size::new(100.0, 100.0), Size::new(200.0, 50.0)).unwrap();

        assert_eq!(converter.to_pixels(Point::new(10.0, 10.0)), (20, 5));
    }

    #[test]
    fn test_rejects_non_positive_physical() {
        let err = UnitConverter::new(Size::new(0.0, 190.0), Size::new(850.0, 720.0)).unwrap_err();
        assert_eq!(
            err,
            ScaleError::InvalidPhysical {
                width: 0.0,
                height: 190.0
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_pixels() {
        let result = UnitConverter::new(Size::new(225.0, 190.0), Size::new(850.0, -1.0));
        assert!(matches!(result, Err(ScaleError::InvalidPixels { .. })));
    }

    #[test]
    fn test_rejects_non_finite() {
        let result = UnitConverter::new(Size::new(f32::NAN, 190.0), Size::new(850.0, 720.0));
        assert!(result.is_err());
    }
}
