//! Shape records extracted from a drawing.
//!
//! A [`Shape`] is one circle or rectangle pulled out of the source drawing.
//! Records are immutable once built by the reader.

use std::fmt;

use crate::geometry::{Point, Size};

/// The geometric kind of a shape together with its extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// A circle; the shape's position is its centre.
    Circle { radius: f32 },
    /// A rectangle; the shape's position is its top-left corner.
    Rect { size: Size },
}

impl ShapeKind {
    /// Returns the short element name of this kind (`circle` or `rect`).
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Rect { .. } => "rect",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One recognized shape from the drawing.
///
/// # Examples
///
/// ```
/// # use panelgen_core::{geometry::Point, shape::{Shape, ShapeKind}};
/// let knob = Shape::new("knob_mix", ShapeKind::Circle { radius: 6.0 }, Point::new(40.0, 80.0))
///     .with_group("Output");
///
/// assert_eq!(knob.id(), "knob_mix");
/// assert_eq!(knob.group(), Some("Output"));
/// assert_eq!(knob.radius(), Some(6.0));
/// assert_eq!(knob.size(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: String,
    kind: ShapeKind,
    position: Point,
    group: Option<String>,
}

impl Shape {
    /// Create a new ungrouped shape.
    pub fn new(id: impl Into<String>, kind: ShapeKind, position: Point) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            group: None,
        }
    }

    /// Attach the label of the group containing this shape.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Returns the shape identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the shape position (centre for circles, top-left for rectangles).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the group label, if the shape sits inside a labelled group.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Returns the radius for circles.
    pub fn radius(&self) -> Option<f32> {
        match self.kind {
            ShapeKind::Circle { radius } => Some(radius),
            ShapeKind::Rect { .. } => None,
        }
    }

    /// Returns the size for rectangles.
    pub fn size(&self) -> Option<Size> {
        match self.kind {
            ShapeKind::Circle { .. } => None,
            ShapeKind::Rect { size } => Some(size),
        }
    }

    /// Returns `true` if this shape is a circle.
    pub fn is_circle(&self) -> bool {
        matches!(self.kind, ShapeKind::Circle { .. })
    }
}
