//! # panelgen parser
//!
//! Reads an SVG panel drawing and extracts its controls as [`Shape`]
//! records. Only `<circle>` and `<rect>` elements with an id are kept;
//! decorative elements are filtered out by [`SkipRules`]. Each shape carries
//! the label of its nearest labelled `<g>` group and the byte span of its
//! element, so later phases can point diagnostics at the drawing.
//!
//! ## Usage
//!
//! ```
//! # use panelgen_parser::{parse, ParseError, SkipRules};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <svg xmlns="http://www.w3.org/2000/svg"
//!              xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape"
//!              width="225mm" height="190mm">
//!           <g inkscape:label="Output">
//!             <circle id="knob_mix" cx="40" cy="80" r="6"/>
//!           </g>
//!         </svg>
//!     "#;
//!
//!     let drawing = parse(source, &SkipRules::default())?;
//!     let knob = drawing.get("knob_mix").expect("knob is kept");
//!     assert_eq!(knob.group(), Some("Output"));
//!     Ok(())
//! }
//! ```
//!
//! [`Shape`]: panelgen_core::shape::Shape

pub mod error;
pub mod skip;

mod reader;
mod span;

pub use error::ParseError;
pub use reader::Drawing;
pub use skip::SkipRules;
pub use span::{Span, Spanned};

use reader::Reader;

/// Parse drawing source text into a [`Drawing`].
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every error found in the pass: malformed
/// XML, a non-SVG root, unreadable length attributes, or duplicate ids.
pub fn parse(source: &str, rules: &SkipRules) -> Result<Drawing, ParseError> {
    Reader::new(source, rules).read()
}
