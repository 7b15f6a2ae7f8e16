//! Diagnostics for the drawing reader and mapping validation.
//!
//! The error system is built around [`Diagnostic`]: one error or warning with
//! an optional [`ErrorCode`], labelled spans into the drawing source, and
//! help text. Errors from a parse pass are wrapped in [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use panelgen_parser::error::{Diagnostic, ErrorCode};
//! # use panelgen_parser::Span;
//!
//! let diag = Diagnostic::error("shape id `knob_mix` is used more than once")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(120..160), "duplicate id")
//!     .with_secondary_label(Span::new(40..80), "first defined here")
//!     .with_help("give each control a unique id in the drawing");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
