//! CLI logic for the panelgen tool.
//!
//! Each run reads the drawing first, then does one of three things: builds
//! the mapping file (`--init`), checks the mapping against the drawing
//! (`--validate`), or writes the code snippets (the default). `--dry-run`
//! prints instead of writing.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Mode};

use std::{fs, path::Path};

use log::{info, warn};

use panelgen::{
    Drawing, PanelBuilder, PanelgenError,
    mapping::{MappingError, MappingStore},
};
use panelgen_parser::error::Diagnostic;

use error_adapter::{DiagnosticAdapter, Reportable, render};

/// Run the panelgen CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PanelgenError` for:
/// - A missing drawing
/// - Configuration loading errors
/// - Drawing parse errors
/// - A missing, empty, or unreadable mapping file (validate and generate)
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), PanelgenError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    let paths = app_config.paths_mut();
    if let Some(svg) = &args.svg {
        paths.set_svg(svg);
    }
    if let Some(mapping) = &args.mapping {
        paths.set_mapping(mapping);
    }
    if let Some(output_dir) = &args.output_dir {
        paths.set_output_dir(output_dir);
    }

    let builder = PanelBuilder::new(app_config);
    let paths = builder.config().paths();

    let svg_path = paths.svg();
    if !svg_path.is_file() {
        return Err(PanelgenError::DrawingNotFound(svg_path.to_path_buf()));
    }

    info!(
        svg = svg_path.display().to_string(),
        mapping = paths.mapping().display().to_string(),
        mode:? = args.mode(),
        dry_run = args.dry_run;
        "Processing drawing"
    );

    let source = fs::read_to_string(svg_path)?;
    let drawing = builder.parse(&source)?;

    match args.mode() {
        Mode::Init => init(&builder, &drawing, args),
        Mode::Validate => validate(&builder, &drawing, &source),
        Mode::Generate => generate(&builder, &drawing, args),
    }
}

fn init(builder: &PanelBuilder, drawing: &Drawing, args: &Args) -> Result<(), PanelgenError> {
    log_drawing_warnings(drawing);
    let mapping_path = builder.config().paths().mapping();

    let existing = MappingStore::load_if_exists(mapping_path)?;
    let before = existing.as_ref().filter(|_| !args.force).map_or(0, MappingStore::len);
    let store = builder.init_mapping(drawing, existing, args.force);

    if args.dry_run {
        let json = store.to_json().map_err(|source| MappingError::Json {
            path: mapping_path.to_path_buf(),
            source,
        })?;
        print!("{json}");
        return Ok(());
    }

    store.save(mapping_path)?;
    println!(
        "Mapped {} shapes ({} new) into {}",
        store.len(),
        store.len().saturating_sub(before),
        mapping_path.display()
    );
    println!("Review the suggested entries, then run again to generate code.");

    Ok(())
}

fn validate(builder: &PanelBuilder, drawing: &Drawing, source: &str) -> Result<(), PanelgenError> {
    let store = load_mapping(builder.config().paths().mapping())?;
    let report = builder.validate(drawing, &store);

    let diagnostics: Vec<Diagnostic> = drawing
        .warnings()
        .iter()
        .cloned()
        .chain(report.to_diagnostics(drawing))
        .collect();
    for diag in &diagnostics {
        let reportable = Reportable::Diagnostic(DiagnosticAdapter::new(diag, source));
        println!("{}", render(&reportable));
    }

    if diagnostics.is_empty() {
        println!(
            "Validation passed: {} shapes, {} mapping entries",
            drawing.len(),
            store.len()
        );
    } else {
        println!("Validation finished with {} warning(s)", diagnostics.len());
    }

    Ok(())
}

fn generate(builder: &PanelBuilder, drawing: &Drawing, args: &Args) -> Result<(), PanelgenError> {
    log_drawing_warnings(drawing);
    let paths = builder.config().paths();
    let store = load_mapping(paths.mapping())?;

    let drawing_name = paths
        .svg()
        .file_name()
        .map_or_else(|| paths.svg().display().to_string(), |name| {
            name.to_string_lossy().into_owned()
        });
    let snippets = builder.generate(drawing, &store, &drawing_name)?;

    if args.dry_run {
        for (name, content) in snippets.files() {
            println!("=== {name} ===");
            println!("{content}");
            println!();
        }
        return Ok(());
    }

    let written = snippets.write_to(paths.output_dir())?;
    for path in written {
        println!("Generated {}", path.display());
    }

    Ok(())
}

/// Loads the mapping, treating a missing or empty file as an error.
fn load_mapping(path: &Path) -> Result<MappingStore, PanelgenError> {
    let store = MappingStore::load(path)?;
    if store.is_empty() {
        return Err(MappingError::Empty(path.to_path_buf()).into());
    }
    Ok(store)
}

fn log_drawing_warnings(drawing: &Drawing) {
    for diag in drawing.warnings() {
        warn!(code:? = diag.code(); "{}", diag.message());
    }
}
