//! Diagnostic codes.
//!
//! Codes are grouped by phase:
//! - `E0xx` - Document errors
//! - `E1xx` - Attribute errors
//! - `E2xx` - Shape set errors
//! - `E3xx` - Mapping validation warnings

use std::fmt;

/// Codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The drawing is not well-formed XML.
    E001,

    /// The root element is not an SVG `<svg>` element.
    E002,

    /// A coordinate or size attribute could not be read as a length.
    E100,

    /// The declared canvas size uses a unit that cannot be interpreted
    /// as millimetres.
    E101,

    /// Two kept shapes share the same id.
    E200,

    /// A shape has no mapping entry.
    E300,

    /// A mapping entry still has the `Unknown` widget type.
    E301,

    /// A mapping entry could not be read.
    E302,

    /// Two controls sit closer together than the overlap threshold.
    E303,

    /// A shape lies outside the declared canvas.
    E304,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E304 => "E304",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed document",
            ErrorCode::E002 => "not an svg document",
            ErrorCode::E100 => "invalid length attribute",
            ErrorCode::E101 => "unsupported canvas unit",
            ErrorCode::E200 => "duplicate shape id",
            ErrorCode::E300 => "unmapped shape",
            ErrorCode::E301 => "unknown widget type",
            ErrorCode::E302 => "malformed mapping entry",
            ErrorCode::E303 => "overlapping controls",
            ErrorCode::E304 => "shape outside canvas",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
