//! One reported problem with a drawing or its mapping.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A problem tied to elements of the SVG source.
///
/// The reader raises these for the drawing itself and validation raises them
/// for mapping findings, so both end up rendered the same way:
///
/// ```text
/// error[E100]: invalid value `12,5` for attribute `cx`
///    ╭─[panel.svg:14:5]
/// 14 │     <circle id="knob_mix" cx="12,5" cy="80" r="6"/>
///    ·     ───────────────────────┬───────────────────────
///    ·                            ╰── in this element
///    ╰────
///   help: use a plain number, optionally followed by `mm` or `px`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// A problem that is reported without stopping the run.
    ///
    /// # Example
    ///
    /// ```
    /// # use panelgen_parser::error::{Diagnostic, ErrorCode};
    /// # use panelgen_parser::Span;
    ///
    /// let diag = Diagnostic::warning("shape `knob_mix` has no mapping entry")
    ///     .with_code(ErrorCode::E300)
    ///     .with_label(Span::new(0..10), "unmapped shape")
    ///     .with_help("run with --init to add suggested entries");
    /// assert!(diag.severity().is_warning());
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// One-line summary, shown after the severity and code.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Elements the problem points at, primary first.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Marks the element at fault.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Marks a related element, such as the first owner of a duplicated id.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Suggests a fix, e.g. the command to run or the attribute to change.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{code}]: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_error() {
        let diag = Diagnostic::error("malformed drawing");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "malformed drawing");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_duplicate_id_points_at_both_elements() {
        let diag = Diagnostic::error("shape id `knob_mix` is used more than once")
            .with_code(ErrorCode::E200)
            .with_label(Span::new(100..120), "duplicate id")
            .with_secondary_label(Span::new(50..70), "first defined here")
            .with_help("rename one of the elements");

        assert_eq!(diag.code(), Some(ErrorCode::E200));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(diag.help(), Some("rename one of the elements"));
    }

    #[test]
    fn test_display_with_code() {
        let diag = Diagnostic::warning("invalid value `12,5` for attribute `cx`")
            .with_code(ErrorCode::E100);
        assert_eq!(
            diag.to_string(),
            "warning[E100]: invalid value `12,5` for attribute `cx`"
        );
    }

    #[test]
    fn test_display_without_code() {
        let diag = Diagnostic::warning("canvas size ignored");
        assert_eq!(diag.to_string(), "warning: canvas size ignored");
    }
}
