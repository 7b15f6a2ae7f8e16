//! Error types for panelgen operations.
//!
//! This module provides the main error type [`PanelgenError`] which wraps
//! the error conditions that can occur while reading a drawing, loading a
//! mapping, or writing snippets.

use std::{io, path::PathBuf};

use thiserror::Error;

use panelgen_core::units::ScaleError;
use panelgen_parser::error::ParseError;

use crate::mapping::MappingError;

/// The main error type for panelgen operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the drawing source next to the structured
/// diagnostics, so the caller can render them with source snippets.
#[derive(Debug, Error)]
pub enum PanelgenError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("invalid canvas configuration: {0}")]
    Scale(#[from] ScaleError),

    #[error("drawing not found: {}", .0.display())]
    DrawingNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PanelgenError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
