//! Consistency checks between a drawing and its mapping file.
//!
//! Validation never fails; it collects [`Finding`]s into a
//! [`ValidationReport`]. Each finding can be turned into a warning
//! [`Diagnostic`] pointing at the offending element in the drawing.

use std::fmt;

use log::{debug, info};

use panelgen_core::{geometry::Point, shape::Shape, widget::WidgetKind};
use panelgen_parser::{
    Drawing, Span, Spanned,
    error::{Diagnostic, ErrorCode},
};

use crate::mapping::MappingStore;

/// Thresholds used by [`validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidateOptions {
    overlap_threshold: f32,
}

impl ValidateOptions {
    /// `overlap_threshold` is in drawing units.
    pub fn new(overlap_threshold: f32) -> Self {
        Self { overlap_threshold }
    }

    pub fn overlap_threshold(&self) -> f32 {
        self.overlap_threshold
    }
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self::new(2.0)
    }
}

/// One problem found by validation.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// The drawing has a shape the mapping file does not mention.
    Unmapped { id: String },
    /// The mapping entry still carries the `Unknown` widget type.
    UnknownType { id: String },
    /// The mapping entry could not be read.
    Malformed { id: String, reason: String },
    /// Two controls sit closer together than the threshold.
    Overlap {
        first: String,
        second: String,
        distance: f32,
    },
    /// The shape's position lies outside the declared canvas.
    OutOfBounds { id: String, position: Point },
}

impl Finding {
    /// Returns the diagnostic code for this finding.
    pub fn code(&self) -> ErrorCode {
        match self {
            Finding::Unmapped { .. } => ErrorCode::E300,
            Finding::UnknownType { .. } => ErrorCode::E301,
            Finding::Malformed { .. } => ErrorCode::E302,
            Finding::Overlap { .. } => ErrorCode::E303,
            Finding::OutOfBounds { .. } => ErrorCode::E304,
        }
    }

    /// Converts the finding into a warning, labelled with the drawing spans
    /// of the shapes involved when they are known.
    pub fn to_diagnostic(&self, drawing: &Drawing) -> Diagnostic {
        let span = |id: &str| drawing.get(id).map(Spanned::span);
        let diag = Diagnostic::warning(self.to_string()).with_code(self.code());

        match self {
            Finding::Unmapped { id } => with_label(diag, span(id), "no mapping entry")
                .with_help("run with --init to add suggested entries, or add one by hand"),
            Finding::UnknownType { id } => with_label(diag, span(id), "mapped as Unknown")
                .with_help("set `type` to one of the supported widget types"),
            Finding::Malformed { id, .. } => {
                with_label(diag, span(id), "entry for this shape is ignored")
                    .with_help("fix the entry in the mapping file; it is skipped during generation")
            }
            Finding::Overlap { first, second, .. } => {
                let diag = with_label(diag, span(second), "overlaps");
                match span(first) {
                    Some(first) => diag.with_secondary_label(first, "this control"),
                    None => diag,
                }
            }
            Finding::OutOfBounds { id, .. } => with_label(diag, span(id), "outside the canvas")
                .with_help("check the canvas size in the mapping file's `config` section"),
        }
    }
}

fn with_label(diag: Diagnostic, span: Option<Span>, message: &str) -> Diagnostic {
    match span {
        Some(span) => diag.with_label(span, message),
        None => diag,
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Unmapped { id } => write!(f, "shape `{id}` has no mapping entry"),
            Finding::UnknownType { id } => write!(f, "component `{id}` has Unknown type"),
            Finding::Malformed { id, reason } => {
                write!(f, "mapping entry `{id}` is malformed: {reason}")
            }
            Finding::Overlap {
                first,
                second,
                distance,
            } => write!(f, "`{first}` & `{second}` overlap ({distance:.1}mm apart)"),
            Finding::OutOfBounds { id, position } => write!(
                f,
                "shape `{id}` at ({:.1}, {:.1}) is outside the canvas",
                position.x(),
                position.y()
            ),
        }
    }
}

/// All findings of one validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns `true` if nothing was found.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Ids of shapes without a mapping entry, in drawing order.
    pub fn unmapped(&self) -> impl Iterator<Item = &str> {
        self.findings.iter().filter_map(|finding| match finding {
            Finding::Unmapped { id } => Some(id.as_str()),
            _ => None,
        })
    }

    /// Converts every finding into a warning diagnostic.
    pub fn to_diagnostics(&self, drawing: &Drawing) -> Vec<Diagnostic> {
        self.findings
            .iter()
            .map(|finding| finding.to_diagnostic(drawing))
            .collect()
    }
}

/// Checks a drawing against its mapping.
///
/// Findings are reported in this order: unmapped shapes, `Unknown` entries,
/// malformed entries, overlapping controls, shapes outside the canvas.
/// Mapping entries with no shape in the drawing are not reported.
pub fn validate(
    drawing: &Drawing,
    store: &MappingStore,
    options: &ValidateOptions,
) -> ValidationReport {
    info!(shapes = drawing.len(), entries = store.len(); "Validating mapping");
    let mut findings = Vec::new();

    findings.extend(
        drawing
            .shapes()
            .filter(|shape| !store.contains(shape.id()))
            .map(|shape| Finding::Unmapped {
                id: shape.id().to_string(),
            }),
    );

    findings.extend(
        store
            .entries()
            .filter(|(_, entry)| entry.kind() == WidgetKind::Unknown)
            .map(|(id, _)| Finding::UnknownType { id: id.to_string() }),
    );

    findings.extend(store.malformed().map(|(id, reason)| Finding::Malformed {
        id: id.to_string(),
        reason: reason.to_string(),
    }));

    let controls: Vec<&Shape> = drawing
        .shapes()
        .map(|shape| shape.inner())
        .filter(|shape| {
            store
                .entry(shape.id())
                .is_some_and(|entry| entry.kind().is_emittable())
        })
        .collect();
    for (i, first) in controls.iter().enumerate() {
        for second in &controls[i + 1..] {
            let distance = first.position().distance(second.position());
            if distance == 0.0 || distance < options.overlap_threshold() {
                debug!(first = first.id(), second = second.id(), distance; "Overlap");
                findings.push(Finding::Overlap {
                    first: first.id().to_string(),
                    second: second.id().to_string(),
                    distance,
                });
            }
        }
    }

    let canvas = store.config().physical();
    findings.extend(
        drawing
            .shapes()
            .filter(|shape| !shape.position().is_within(canvas))
            .map(|shape| Finding::OutOfBounds {
                id: shape.id().to_string(),
                position: shape.position(),
            }),
    );

    info!(findings = findings.len(); "Validation finished");
    ValidationReport { findings }
}
