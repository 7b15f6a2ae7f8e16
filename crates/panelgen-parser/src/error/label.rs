//! Pointers from a diagnostic into the SVG source.

use crate::span::Span;

/// A note attached to one element of the drawing.
///
/// The primary label sits on the offending `<circle>` or `<rect>`. A
/// duplicate id also gets a secondary label on the element that claimed the
/// id first.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::at(span, message, true)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::at(span, message, false)
    }

    /// Byte range of the element in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    fn at(span: Span, message: impl Into<String>, is_primary: bool) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_on_element() {
        let label = Label::primary(Span::new(10..20), "in this element");

        assert_eq!((label.span().start(), label.span().end()), (10, 20));
        assert_eq!(label.message(), "in this element");
        assert!(label.is_primary());
    }

    #[test]
    fn test_label_on_first_use() {
        let label = Label::secondary(Span::new(5..15), "first used here");
        assert!(!label.is_primary());
    }
}
