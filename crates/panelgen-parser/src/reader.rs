//! Single-pass walk over an SVG drawing.
//!
//! The reader visits every element once in document order, keeps the
//! `<circle>` and `<rect>` elements that carry a non-decorative id, and
//! records each as a [`Shape`] paired with the element's source span.

use indexmap::IndexMap;
use log::{debug, info, trace};
use roxmltree::{Document, Node};
use svgtypes::{Length, LengthUnit};

use panelgen_core::{
    geometry::{Point, Size},
    shape::{Shape, ShapeKind},
};

use crate::{
    SkipRules,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::{Span, Spanned},
};

pub(crate) const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub(crate) const INKSCAPE_NS: &str = "http://www.inkscape.org/namespaces/inkscape";

/// The shapes read from one drawing.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    canvas: Option<Size>,
    shapes: IndexMap<String, Spanned<Shape>>,
    warnings: Vec<Diagnostic>,
}

impl Drawing {
    /// Returns the physical canvas size declared on the root element.
    pub fn canvas(&self) -> Option<Size> {
        self.canvas
    }

    /// Iterates over the shapes in document order.
    pub fn shapes(&self) -> impl Iterator<Item = &Spanned<Shape>> {
        self.shapes.values()
    }

    /// Looks up a shape by id.
    pub fn get(&self, id: &str) -> Option<&Spanned<Shape>> {
        self.shapes.get(id)
    }

    /// Returns the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the drawing holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Non-fatal diagnostics raised while reading.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

pub(crate) struct Reader<'a> {
    source: &'a str,
    rules: &'a SkipRules,
    collector: DiagnosticCollector,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(source: &'a str, rules: &'a SkipRules) -> Self {
        Self {
            source,
            rules,
            collector: DiagnosticCollector::new(),
        }
    }

    pub(crate) fn read(mut self) -> Result<Drawing, ParseError> {
        let doc = match Document::parse(self.source) {
            Ok(doc) => doc,
            Err(err) => {
                let span = self.span_at(err.pos().row, err.pos().col);
                return Err(Diagnostic::error(format!("malformed drawing: {err}"))
                    .with_code(ErrorCode::E001)
                    .with_label(span, "parsing stopped here")
                    .into());
            }
        };

        let root = doc.root_element();
        if !is_svg_element(root, "svg") {
            return Err(Diagnostic::error(format!(
                "expected an <svg> root element, found <{}>",
                root.tag_name().name()
            ))
            .with_code(ErrorCode::E002)
            .with_label(Span::new(root.range()), "root element")
            .into());
        }

        info!("Reading drawing");

        let canvas = self.read_canvas(root);
        let mut shapes: IndexMap<String, Spanned<Shape>> = IndexMap::new();

        for node in root.descendants().filter(Node::is_element) {
            let Some(kind) = element_kind(node) else {
                continue;
            };

            let id = node.attribute("id").unwrap_or_default();
            if id.is_empty() {
                trace!(element = kind; "Skipping element without id");
                continue;
            }
            if self.rules.is_decorative(id) {
                debug!(id; "Skipping decorative element");
                continue;
            }

            let span = Span::new(node.range());
            let Some(shape) = self.read_shape(node, id, kind) else {
                continue;
            };

            if let Some(first) = shapes.get(id) {
                self.collector.emit(
                    Diagnostic::error(format!("shape id `{id}` is used more than once"))
                        .with_code(ErrorCode::E200)
                        .with_label(span, "duplicate id")
                        .with_secondary_label(first.span(), "first defined here")
                        .with_help("give each control a unique id in the drawing"),
                );
                continue;
            }

            let shape = match group_label(node) {
                Some(group) => shape.with_group(group),
                None => shape,
            };
            trace!(shape:?; "Read shape");
            shapes.insert(id.to_string(), Spanned::new(shape, span));
        }

        let warnings = self.collector.finish()?;
        info!(shapes = shapes.len(), warnings = warnings.len(); "Drawing read");

        Ok(Drawing {
            canvas,
            shapes,
            warnings,
        })
    }

    fn read_shape(&mut self, node: Node<'_, '_>, id: &str, kind: &str) -> Option<Shape> {
        if kind == "circle" {
            let cx = self.length(node, "cx");
            let cy = self.length(node, "cy");
            let r = self.length(node, "r");
            let kind = ShapeKind::Circle { radius: r? };
            Some(Shape::new(id, kind, Point::new(cx?, cy?)))
        } else {
            let x = self.length(node, "x");
            let y = self.length(node, "y");
            let width = self.length(node, "width");
            let height = self.length(node, "height");
            let kind = ShapeKind::Rect {
                size: Size::new(width?, height?),
            };
            Some(Shape::new(id, kind, Point::new(x?, y?)))
        }
    }

    /// Reads a length attribute; a missing attribute is zero.
    fn length(&mut self, node: Node<'_, '_>, attr: &str) -> Option<f32> {
        let Some(raw) = node.attribute(attr) else {
            return Some(0.0);
        };

        match parse_length(raw) {
            Some(value) => Some(value),
            None => {
                self.collector.emit(
                    Diagnostic::error(format!("invalid value `{raw}` for attribute `{attr}`"))
                        .with_code(ErrorCode::E100)
                        .with_label(Span::new(node.range()), "in this element")
                        .with_help("use a plain number, optionally followed by `mm` or `px`"),
                );
                None
            }
        }
    }

    fn read_canvas(&mut self, root: Node<'_, '_>) -> Option<Size> {
        let (width, height) = (root.attribute("width")?, root.attribute("height")?);

        match (parse_millimetres(width), parse_millimetres(height)) {
            (Some(width), Some(height)) => {
                debug!(width, height; "Declared canvas size");
                Some(Size::new(width, height))
            }
            _ => {
                self.collector.emit(
                    Diagnostic::warning(format!(
                        "canvas size `{width}` x `{height}` is not in millimetres"
                    ))
                    .with_code(ErrorCode::E101)
                    .with_label(Span::new(root.range()), "declared here")
                    .with_help("the canvas size from the mapping file is used instead"),
                );
                None
            }
        }
    }

    /// Converts a 1-based row/column position to a one-character span.
    fn span_at(&self, row: u32, col: u32) -> Span {
        let mut offset = 0;
        for (index, line) in self.source.split_inclusive('\n').enumerate() {
            if index + 1 == row as usize {
                let within = line
                    .char_indices()
                    .nth(col.saturating_sub(1) as usize)
                    .map_or(line.len(), |(i, _)| i);
                offset += within;
                break;
            }
            offset += line.len();
        }

        let offset = offset.min(self.source.len());
        let end = self.source[offset..]
            .chars()
            .next()
            .map_or(offset, |c| offset + c.len_utf8());
        Span::new(offset..end)
    }
}

fn is_svg_element(node: Node<'_, '_>, name: &str) -> bool {
    node.tag_name().namespace() == Some(SVG_NS) && node.tag_name().name() == name
}

fn element_kind(node: Node<'_, '_>) -> Option<&'static str> {
    if is_svg_element(node, "circle") {
        Some("circle")
    } else if is_svg_element(node, "rect") {
        Some("rect")
    } else {
        None
    }
}

/// Label of the nearest enclosing group with a non-empty label.
fn group_label<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.ancestors()
        .skip(1)
        .filter(|n| is_svg_element(*n, "g"))
        .find_map(|g| {
            g.attribute((INKSCAPE_NS, "label"))
                .filter(|label| !label.is_empty())
        })
}

/// Parses a shape attribute. Bare numbers, `mm` and `px` are taken at face value.
fn parse_length(raw: &str) -> Option<f32> {
    let length: Length = raw.trim().parse().ok()?;
    match length.unit {
        LengthUnit::None | LengthUnit::Mm | LengthUnit::Px => Some(length.number as f32),
        _ => None,
    }
}

fn parse_millimetres(raw: &str) -> Option<f32> {
    let length: Length = raw.trim().parse().ok()?;
    match length.unit {
        LengthUnit::None | LengthUnit::Mm => Some(length.number as f32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_units() {
        assert_eq!(parse_length("12.5"), Some(12.5));
        assert_eq!(parse_length(" 40mm "), Some(40.0));
        assert_eq!(parse_length("7px"), Some(7.0));
        assert_eq!(parse_length("-3"), Some(-3.0));
        assert_eq!(parse_length("50%"), None);
        assert_eq!(parse_length("12,5"), None);
        assert_eq!(parse_length(""), None);
    }

    #[test]
    fn test_parse_millimetres_rejects_pixels() {
        assert_eq!(parse_millimetres("225mm"), Some(225.0));
        assert_eq!(parse_millimetres("225"), Some(225.0));
        assert_eq!(parse_millimetres("850px"), None);
    }

    #[test]
    fn test_span_at_second_line() {
        let rules = SkipRules::none();
        let reader = Reader::new("ab\ncdé\n", &rules);

        assert_eq!(reader.span_at(1, 1), Span::new(0..1));
        assert_eq!(reader.span_at(2, 2), Span::new(4..5));
        assert_eq!(reader.span_at(2, 3), Span::new(5..7));
    }

    #[test]
    fn test_span_at_past_end() {
        let rules = SkipRules::none();
        let reader = Reader::new("ab", &rules);

        assert_eq!(reader.span_at(5, 1), Span::new(2..2));
    }
}
