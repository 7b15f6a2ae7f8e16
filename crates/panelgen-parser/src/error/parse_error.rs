//! Failure of a whole read.

use std::fmt;

use crate::error::Diagnostic;

/// Every diagnostic of a read that hit at least one error.
///
/// Warnings found in the same pass are kept alongside the errors so the
/// report shows the drawing's problems together.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.diagnostics.first() else {
            return f.write_str("drawing could not be read");
        };
        write!(f, "{first}")?;
        match self.diagnostics.len() {
            1 => Ok(()),
            n => write!(f, " (+{} more)", n - 1),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        vec![diagnostic].into()
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_problem() {
        let err: ParseError = Diagnostic::error("malformed XML").into();
        assert_eq!(err.to_string(), "error: malformed XML");
    }

    #[test]
    fn test_counts_remaining_problems() {
        let err: ParseError = vec![
            Diagnostic::error("shape id `knob_mix` is used more than once"),
            Diagnostic::warning("invalid value `abc` for attribute `r`"),
            Diagnostic::error("shape id `load_btn` is used more than once"),
        ]
        .into();

        assert_eq!(
            err.to_string(),
            "error: shape id `knob_mix` is used more than once (+2 more)"
        );
    }

    #[test]
    fn test_empty_error_still_displays() {
        let err = ParseError::from(Vec::new());
        assert_eq!(err.to_string(), "drawing could not be read");
    }
}
