//! Terminal rendering of drawing problems and run failures.
//!
//! Drawing problems carry byte spans into the SVG, so miette can underline
//! the offending `<circle>` or `<rect>`. Everything else (a missing mapping,
//! a bad canvas, I/O) is shown as a plain message with an optional hint.
//! A failed read may hold several problems; each becomes its own report.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, SourceSpan};

use panelgen::{PanelgenError, mapping::MappingError};
use panelgen_parser::{
    Span,
    error::{Diagnostic, Severity},
};

/// A drawing problem paired with the SVG text it points into.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The source is the whole drawing; leave it out.
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = self.diag.code()?;
        Some(Box::new(code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        let severity = match self.diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        };
        Some(severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self.diag.help()?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = element_span(label.span());
            let text = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(text, span)
            } else {
                LabeledSpan::new_with_span(text, span)
            }
        })))
    }
}

/// A run failure that has no place in the drawing.
///
/// Codes are `panelgen::<area>`; hints tell the user which flag or file
/// section to look at.
pub struct ErrorAdapter<'a>(pub &'a PanelgenError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let area = match self.0 {
            PanelgenError::Io(_) => "io",
            PanelgenError::Parse { .. } => return None,
            PanelgenError::Mapping(_) => "mapping",
            PanelgenError::Scale(_) => "scale",
            PanelgenError::DrawingNotFound(_) => "drawing",
            PanelgenError::Config(_) => "config",
        };
        Some(Box::new(format!("panelgen::{area}")))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let hint = match self.0 {
            PanelgenError::DrawingNotFound(_) => "pass the drawing with --svg",
            PanelgenError::Mapping(MappingError::Missing(_) | MappingError::Empty(_)) => {
                "run with --init to create the mapping from the drawing"
            }
            PanelgenError::Scale(_) => {
                "check the `config` section of the mapping file; every size must be positive"
            }
            _ => return None,
        };
        Some(Box::new(hint))
    }
}

/// Either kind of report, so callers can render a failure without caring
/// where it came from.
#[derive(Debug)]
pub enum Reportable<'a> {
    Diagnostic(DiagnosticAdapter<'a>),
    Error(ErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Diagnostic(d) => d,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn severity(&self) -> Option<miette::Severity> {
        self.inner().severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

fn element_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Splits a failure into reports: one per problem of a failed read,
/// otherwise exactly one.
pub fn to_reportables(err: &PanelgenError) -> Vec<Reportable<'_>> {
    match err {
        PanelgenError::Parse { err, src } => err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic(DiagnosticAdapter::new(diag, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Renders a report the way miette's graphical handler draws it, or as the
/// bare message if drawing fails.
pub fn render(reportable: &Reportable<'_>) -> String {
    let mut out = String::new();
    match GraphicalReportHandler::new().render_report(&mut out, reportable) {
        Ok(()) => out,
        Err(_) => reportable.to_string(),
    }
}
