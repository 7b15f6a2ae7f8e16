//! Snippet generation.
//!
//! The [`Emitter`] joins the shapes of a drawing with their mapping entries
//! and renders three blocks of C++ for a JUCE editor: member declarations,
//! constructor wiring, and the body of `resized()`.
//!
//! Shapes are grouped into sections by their group label. Sections are
//! emitted in name order and shapes keep drawing order within a section.
//! The header and `resized()` print a heading for every section that is not
//! excluded, even one with nothing to place.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info, trace};

use panelgen_core::{
    shape::{Shape, ShapeKind},
    units::{ScaleError, UnitConverter},
    widget::WidgetKind,
};
use panelgen_parser::Drawing;

use crate::{
    config::EmitConfig,
    mapping::{MappingEntry, MappingStore},
};

pub const HEADER_FILE: &str = "header_snippet.hpp";
pub const CONSTRUCTOR_FILE: &str = "constructor_snippet.cpp";
pub const RESIZED_FILE: &str = "resized_snippet.cpp";

/// Section name for shapes outside any labelled group.
const DEFAULT_SECTION: &str = "Other";

/// Settings for one emitter run.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitOptions {
    drawing_name: String,
    excluded_sections: Vec<String>,
    knob_width_px: u32,
    knob_height_px: u32,
}

impl EmitOptions {
    /// Creates options from the application configuration. `drawing_name`
    /// is quoted in the banner of every snippet.
    pub fn new(config: &EmitConfig, drawing_name: impl Into<String>) -> Self {
        Self {
            drawing_name: drawing_name.into(),
            excluded_sections: config.excluded_sections().to_vec(),
            knob_width_px: config.knob_width_px(),
            knob_height_px: config.knob_height_px(),
        }
    }

    pub fn drawing_name(&self) -> &str {
        &self.drawing_name
    }

    /// Returns `true` if shapes in `section` produce no code.
    pub fn is_excluded(&self, section: &str) -> bool {
        self.excluded_sections.iter().any(|s| s == section)
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::new(&EmitConfig::default(), "SR.svg")
    }
}

/// The three generated snippets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippets {
    header: String,
    constructor: String,
    resized: String,
}

impl Snippets {
    /// Member variable declarations.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Constructor initialization.
    pub fn constructor(&self) -> &str {
        &self.constructor
    }

    /// `resized()` method body.
    pub fn resized(&self) -> &str {
        &self.resized
    }

    /// Pairs each snippet with its output file name.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (HEADER_FILE, &self.header),
            (CONSTRUCTOR_FILE, &self.constructor),
            (RESIZED_FILE, &self.resized),
        ]
    }

    /// Writes the snippets into `dir`, creating it if needed. Returns the
    /// paths written.
    ///
    /// # Errors
    ///
    /// Returns the I/O error of the first directory or file that fails.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(3);
        for (name, content) in self.files() {
            let path = dir.join(name);
            fs::write(&path, content)?;
            info!(path = path.display().to_string(); "Snippet written");
            written.push(path);
        }
        Ok(written)
    }
}

/// Renders snippets for one mapping.
#[derive(Debug)]
pub struct Emitter<'a> {
    store: &'a MappingStore,
    options: &'a EmitOptions,
    converter: UnitConverter,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter, deriving scale factors from the mapping's canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError`] if the canvas configuration is not strictly
    /// positive.
    pub fn new(store: &'a MappingStore, options: &'a EmitOptions) -> Result<Self, ScaleError> {
        let converter = store.config().converter()?;
        debug!(
            scale_x = converter.scale_x(),
            scale_y = converter.scale_y();
            "Scale factors"
        );

        Ok(Self {
            store,
            options,
            converter,
        })
    }

    /// Renders all three snippets.
    pub fn emit(&self, drawing: &Drawing) -> Snippets {
        info!(shapes = drawing.len(), drawing = self.options.drawing_name(); "Emitting snippets");

        let snippets = Snippets {
            header: self.header(drawing),
            constructor: self.constructor(drawing),
            resized: self.resized(drawing),
        };
        trace!(snippets:?; "Emitted snippets");
        snippets
    }

    fn header(&self, drawing: &Drawing) -> String {
        let mut lines = self.banner("Member variable declarations");

        for (section, shapes) in self.sections(drawing) {
            lines.push(format!("// {section}"));
            for shape in shapes {
                if !self.store.contains(shape.id()) {
                    lines.push(format!("// UNMAPPED: {}", shape.id()));
                    continue;
                }
                let Some(entry) = self.store.entry(shape.id()) else {
                    continue;
                };
                if let Some(line) = declaration(entry) {
                    lines.push(line);
                }
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn constructor(&self, drawing: &Drawing) -> String {
        let mut lines = self.banner("Constructor initialization");
        let controls = self.controls(drawing);

        lines.push("// Setup knobs with parameter attachments".to_string());
        for entry in &controls {
            if entry.kind() != WidgetKind::OccultKnob {
                continue;
            }
            if let Some(param_id) = entry.param_id() {
                lines.push(format!(
                    "setupKnob({}, {param_id}, \"{}\");",
                    entry.member(),
                    escape(entry.label())
                ));
            }
        }

        lines.push(String::new());
        lines.push("// Add components to visible".to_string());
        for entry in &controls {
            lines.push(format!("addAndMakeVisible({});", entry.member()));
        }

        lines.join("\n")
    }

    fn resized(&self, drawing: &Drawing) -> String {
        let mut lines = self.banner("resized() method layout");
        let pixels = self.store.config().pixels();

        lines.push(format!(
            "const float scaleX = getWidth() / {:.1}f;",
            pixels.width()
        ));
        lines.push(format!(
            "const float scaleY = getHeight() / {:.1}f;",
            pixels.height()
        ));
        lines.push(format!(
            "const int knobWidth = static_cast<int>({} * scaleX);",
            self.options.knob_width_px
        ));
        lines.push(format!(
            "const int knobHeight = static_cast<int>({} * scaleY);",
            self.options.knob_height_px
        ));
        lines.push(String::new());

        for (section, shapes) in self.sections(drawing) {
            lines.push(format!("// {section}"));
            for shape in shapes {
                if let Some(entry) = self.emittable_entry(shape) {
                    self.bounds(&mut lines, shape, entry);
                }
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn bounds(&self, lines: &mut Vec<String>, shape: &Shape, entry: &MappingEntry) {
        let position = shape.position();
        let (x, y) = self.converter.to_pixels(position);
        lines.push(format!("{}.setBounds(", entry.member()));

        match shape.kind() {
            ShapeKind::Circle { .. } => {
                lines.push(format!(
                    "    static_cast<int>({x} * scaleX) - knobWidth/2,  // SVG: {:.1}mm",
                    position.x()
                ));
                lines.push(format!(
                    "    static_cast<int>({y} * scaleY) - knobHeight/2, // SVG: {:.1}mm",
                    position.y()
                ));
                lines.push("    knobWidth,".to_string());
                lines.push("    knobHeight".to_string());
            }
            ShapeKind::Rect { size } => {
                let (width, height) = self.converter.size_to_pixels(size);
                lines.push(format!(
                    "    static_cast<int>({x} * scaleX),  // SVG: {:.1}mm",
                    position.x()
                ));
                lines.push(format!(
                    "    static_cast<int>({y} * scaleY),  // SVG: {:.1}mm",
                    position.y()
                ));
                lines.push(format!("    static_cast<int>({width} * scaleX),"));
                lines.push(format!("    static_cast<int>({height} * scaleY)"));
            }
        }

        lines.push(");".to_string());
    }

    fn banner(&self, subtitle: &str) -> Vec<String> {
        vec![
            format!(
                "// AUTO-GENERATED from {} - Review before integrating",
                self.options.drawing_name()
            ),
            format!("// {subtitle}"),
            String::new(),
        ]
    }

    /// Shapes grouped by section, excluded sections dropped.
    fn sections<'d>(&self, drawing: &'d Drawing) -> BTreeMap<&'d str, Vec<&'d Shape>> {
        let mut sections: BTreeMap<&str, Vec<&Shape>> = BTreeMap::new();
        for shape in drawing.shapes() {
            let section = shape.group().unwrap_or(DEFAULT_SECTION);
            if self.options.is_excluded(section) {
                trace!(id = shape.id(), section; "Shape in excluded section");
                continue;
            }
            sections.entry(section).or_default().push(shape.inner());
        }
        sections
    }

    /// Emittable mapped shapes outside excluded sections, in drawing order.
    fn controls(&self, drawing: &Drawing) -> Vec<&'a MappingEntry> {
        drawing
            .shapes()
            .filter(|shape| !self.options.is_excluded(shape.group().unwrap_or(DEFAULT_SECTION)))
            .filter_map(|shape| self.emittable_entry(shape))
            .collect()
    }

    fn emittable_entry(&self, shape: &Shape) -> Option<&'a MappingEntry> {
        self.store
            .entry(shape.id())
            .filter(|entry| entry.kind().is_emittable())
    }
}

/// Member declaration for one widget, if its kind gets one.
fn declaration(entry: &MappingEntry) -> Option<String> {
    let member = entry.member();
    let line = match entry.kind() {
        WidgetKind::OccultKnob => format!("OccultKnob {member}{{\"{}\"}};", escape(entry.label())),
        WidgetKind::TextButton => {
            format!("juce::TextButton {member}{{\"{}\"}};", escape(entry.label()))
        }
        WidgetKind::ComboBox => format!("juce::ComboBox {member};"),
        kind if kind.is_display() => format!("{} {member};", kind.as_str()),
        _ => return None,
    };
    Some(line)
}

/// Escapes text for a C++ string literal.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}
