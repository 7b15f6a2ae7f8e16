//! Application configuration.
//!
//! These types control where files live, which drawing elements are treated
//! as decoration, how snippets are laid out, and how strict validation is.
//! All of them implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default.
//!
//! The canvas dimensions are not part of this configuration. They travel with
//! the mapping file (see [`CanvasConfig`](crate::mapping::CanvasConfig)) so a
//! drawing and its mapping always agree on the scale.
//!
//! # Example
//!
//! ```
//! # use panelgen::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.emit().knob_width_px(), 85);
//! assert!(config.reader().skip_rules().is_decorative("panel_background"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use panelgen_parser::{
    SkipRules,
    skip::{DEFAULT_IDS, DEFAULT_PREFIXES, DEFAULT_SUFFIXES},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    paths: PathsConfig,

    #[serde(default)]
    reader: ReaderConfig,

    #[serde(default)]
    emit: EmitConfig,

    #[serde(default)]
    validate: ValidateConfig,
}

impl AppConfig {
    /// Returns the file locations.
    pub fn paths(&self) -> &PathsConfig {
        &self.paths
    }

    /// Returns mutable file locations, used to apply command-line overrides.
    pub fn paths_mut(&mut self) -> &mut PathsConfig {
        &mut self.paths
    }

    /// Returns the drawing reader settings.
    pub fn reader(&self) -> &ReaderConfig {
        &self.reader
    }

    /// Returns the snippet emitter settings.
    pub fn emit(&self) -> &EmitConfig {
        &self.emit
    }

    /// Returns the validation settings.
    pub fn validate(&self) -> &ValidateConfig {
        &self.validate
    }
}

/// Input and output locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// The drawing to read.
    svg: PathBuf,

    /// The mapping file written by `--init`.
    mapping: PathBuf,

    /// Directory receiving the generated snippets.
    output_dir: PathBuf,
}

impl PathsConfig {
    pub fn svg(&self) -> &Path {
        &self.svg
    }

    pub fn mapping(&self) -> &Path {
        &self.mapping
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn set_svg(&mut self, path: impl Into<PathBuf>) {
        self.svg = path.into();
    }

    pub fn set_mapping(&mut self, path: impl Into<PathBuf>) {
        self.mapping = path.into();
    }

    pub fn set_output_dir(&mut self, path: impl Into<PathBuf>) {
        self.output_dir = path.into();
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            svg: PathBuf::from("SR.svg"),
            mapping: PathBuf::from("component_mapping.json"),
            output_dir: PathBuf::from("generated"),
        }
    }
}

/// Which drawing elements are decoration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    skip_prefixes: Vec<String>,
    skip_suffixes: Vec<String>,
    skip_ids: Vec<String>,
}

impl ReaderConfig {
    /// Builds the [`SkipRules`] handed to the drawing reader.
    pub fn skip_rules(&self) -> SkipRules {
        SkipRules::new(
            self.skip_prefixes.clone(),
            self.skip_suffixes.clone(),
            self.skip_ids.clone(),
        )
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            skip_prefixes: owned(DEFAULT_PREFIXES),
            skip_suffixes: owned(DEFAULT_SUFFIXES),
            skip_ids: owned(DEFAULT_IDS),
        }
    }
}

/// Snippet layout settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Group labels that hold no controls.
    excluded_sections: Vec<String>,

    /// Knob bounds at the design size, in pixels.
    knob_width_px: u32,
    knob_height_px: u32,
}

impl EmitConfig {
    pub fn excluded_sections(&self) -> &[String] {
        &self.excluded_sections
    }

    pub fn knob_width_px(&self) -> u32 {
        self.knob_width_px
    }

    pub fn knob_height_px(&self) -> u32 {
        self.knob_height_px
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            excluded_sections: vec![
                "Panel".to_string(),
                "Decorations".to_string(),
                "Header".to_string(),
            ],
            knob_width_px: 85,
            knob_height_px: 100,
        }
    }
}

/// Validation thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Controls closer than this, in drawing units, are reported as overlapping.
    overlap_threshold_mm: f32,
}

impl ValidateConfig {
    pub fn overlap_threshold_mm(&self) -> f32 {
        self.overlap_threshold_mm
    }
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            overlap_threshold_mm: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.paths().svg(), Path::new("SR.svg"));
        assert_eq!(config.paths().mapping(), Path::new("component_mapping.json"));
        assert_eq!(config.paths().output_dir(), Path::new("generated"));
        assert_eq!(config.emit().excluded_sections(), ["Panel", "Decorations", "Header"]);
        assert_eq!(config.emit().knob_height_px(), 100);
        assert_eq!(config.validate().overlap_threshold_mm(), 2.0);
        assert_eq!(config.reader().skip_rules(), SkipRules::default());
    }

    #[test]
    fn test_path_overrides() {
        let mut config = AppConfig::default();
        config.paths_mut().set_svg("panel.svg");
        config.paths_mut().set_output_dir("out");

        assert_eq!(config.paths().svg(), Path::new("panel.svg"));
        assert_eq!(config.paths().output_dir(), Path::new("out"));
        assert_eq!(config.paths().mapping(), Path::new("component_mapping.json"));
    }
}
