//! Gathers problems while the drawing is walked.

use crate::error::{Diagnostic, ParseError};

/// Holds every problem found in one walk of the drawing.
///
/// The reader keeps going after a bad element so that a drawing with three
/// duplicated ids reports all three at once.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.has_errors |= diagnostic.severity().is_error();
        self.diagnostics.push(diagnostic);
    }

    /// Ends the walk: warnings only gives `Ok`, any error fails the read.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(self.diagnostics.into())
        } else {
            Ok(self.diagnostics)
        }
    }
}
