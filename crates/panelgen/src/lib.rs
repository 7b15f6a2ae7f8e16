//! panelgen - JUCE editor layout snippets from SVG panel drawings.
//!
//! A drawing's circles and rectangles are joined with a hand-edited mapping
//! file that names the widget each one becomes. From that join the crate
//! produces member declarations, constructor wiring, and a `resized()` body
//! scaled from drawing millimetres to editor pixels.

pub mod config;
pub mod emit;
pub mod infer;
pub mod mapping;
pub mod validate;

mod error;

pub use panelgen_core::{geometry, shape, units, widget};
pub use panelgen_parser::Drawing;

pub use error::PanelgenError;

use log::{debug, info, trace};

use config::AppConfig;
use emit::{EmitOptions, Emitter, Snippets};
use mapping::{CanvasConfig, MappingStore};
use validate::{ValidateOptions, ValidationReport};

/// Builder for reading drawings and producing mappings, reports, and
/// snippets.
///
/// # Examples
///
/// ```rust
/// use panelgen::{PanelBuilder, config::AppConfig};
///
/// let source = r#"<svg xmlns="http://www.w3.org/2000/svg">
///   <circle id="knob_mix" cx="40" cy="80" r="6"/>
/// </svg>"#;
///
/// let builder = PanelBuilder::new(AppConfig::default());
/// let drawing = builder.parse(source).expect("Failed to parse");
///
/// // Suggest a mapping, then generate from it
/// let mapping = builder.init_mapping(&drawing, None, false);
/// let snippets = builder
///     .generate(&drawing, &mapping, "panel.svg")
///     .expect("Failed to generate");
///
/// assert!(snippets.header().contains("OccultKnob mixKnob{\"MIX\"};"));
/// ```
#[derive(Debug, Default)]
pub struct PanelBuilder {
    config: AppConfig,
}

impl PanelBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse drawing source into its shapes.
    ///
    /// # Errors
    ///
    /// Returns `PanelgenError::Parse` carrying the source and every error
    /// diagnostic of the pass.
    pub fn parse(&self, source: &str) -> Result<Drawing, PanelgenError> {
        info!("Parsing drawing");

        let drawing = panelgen_parser::parse(source, &self.config.reader().skip_rules())
            .map_err(|err| PanelgenError::new_parse_error(err, source))?;

        debug!(shapes = drawing.len(); "Drawing parsed successfully");
        trace!(drawing:?; "Parsed drawing");

        Ok(drawing)
    }

    /// Build a mapping for a drawing, keeping the entries of `existing`.
    ///
    /// Every shape without an entry gets one suggested from its id. The
    /// canvas configuration of `existing` is kept; a new mapping takes the
    /// drawing's declared size, or the defaults when it declares none. With
    /// `force` the existing mapping is discarded.
    pub fn init_mapping(
        &self,
        drawing: &Drawing,
        existing: Option<MappingStore>,
        force: bool,
    ) -> MappingStore {
        let mut store = match existing {
            Some(store) if !force => store,
            _ => {
                let canvas = drawing
                    .canvas()
                    .map_or_else(CanvasConfig::default, |size| {
                        CanvasConfig::default().with_physical(size)
                    });
                MappingStore::new(canvas)
            }
        };

        let mut added = 0;
        for shape in drawing.shapes() {
            if store.contains(shape.id()) {
                continue;
            }
            let suggestion = infer::suggest(shape.id());
            info!(id = shape.id(), kind = suggestion.kind().as_str(); "Adding mapping entry");
            store.insert(shape.id(), suggestion.into_entry());
            added += 1;
        }

        info!(added, total = store.len(); "Mapping initialized");
        store
    }

    /// Check a drawing against its mapping.
    pub fn validate(&self, drawing: &Drawing, store: &MappingStore) -> ValidationReport {
        let options = ValidateOptions::new(self.config.validate().overlap_threshold_mm());
        validate::validate(drawing, store, &options)
    }

    /// Generate the three snippets for a drawing.
    ///
    /// # Errors
    ///
    /// Returns `PanelgenError::Scale` if the mapping's canvas configuration
    /// cannot produce scale factors.
    pub fn generate(
        &self,
        drawing: &Drawing,
        store: &MappingStore,
        drawing_name: &str,
    ) -> Result<Snippets, PanelgenError> {
        let options = EmitOptions::new(self.config.emit(), drawing_name);
        let emitter = Emitter::new(store, &options)?;
        Ok(emitter.emit(drawing))
    }
}
