//! The mapping file: shape ids bound to editor widgets.
//!
//! A [`MappingStore`] is the in-memory form of the hand-edited JSON file that
//! says how each shape becomes a widget. The file has two sections:
//!
//! ```json
//! {
//!   "config": {
//!     "svg_width_mm": 225.0,
//!     "svg_height_mm": 190.0,
//!     "juce_width_px": 850.0,
//!     "juce_height_px": 720.0
//!   },
//!   "components": {
//!     "knob_mix": {
//!       "type": "OccultKnob",
//!       "member": "mixKnob",
//!       "label": "MIX",
//!       "paramId": "ParamIDs::mix",
//!       "modulation": true
//!     }
//!   }
//! }
//! ```
//!
//! Keys this tool does not know (notes, comments) are carried through a save
//! in both sections. Entries that cannot be read are kept verbatim. Lookups
//! treat them as absent and a save writes them back unchanged, so a typo in
//! one entry never costs the user the rest of the file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use panelgen_core::{
    geometry::Size,
    units::{ScaleError, UnitConverter},
    widget::WidgetKind,
};

/// Errors raised while loading or saving a mapping file.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("mapping file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("mapping file {} has no components", .0.display())]
    Empty(PathBuf),

    #[error("failed to access mapping file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("mapping file {} is not valid: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Physical and pixel canvas sizes used to derive scale factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    svg_width_mm: f32,
    svg_height_mm: f32,
    juce_width_px: f32,
    juce_height_px: f32,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl CanvasConfig {
    pub fn new(physical: Size, pixels: Size) -> Self {
        Self {
            svg_width_mm: physical.width(),
            svg_height_mm: physical.height(),
            juce_width_px: pixels.width(),
            juce_height_px: pixels.height(),
            extra: Map::new(),
        }
    }

    /// Replaces the physical size, keeping the pixel size.
    pub fn with_physical(mut self, physical: Size) -> Self {
        self.svg_width_mm = physical.width();
        self.svg_height_mm = physical.height();
        self
    }

    /// Declared drawing size in millimetres.
    pub fn physical(&self) -> Size {
        Size::new(self.svg_width_mm, self.svg_height_mm)
    }

    /// Editor design size in pixels.
    pub fn pixels(&self) -> Size {
        Size::new(self.juce_width_px, self.juce_height_px)
    }

    /// Derives the unit converter for this canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError`] if any dimension is not strictly positive.
    pub fn converter(&self) -> Result<UnitConverter, ScaleError> {
        UnitConverter::new(self.physical(), self.pixels())
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(Size::new(225.0, 190.0), Size::new(850.0, 720.0))
    }
}

/// How one shape becomes a widget.
///
/// # Examples
///
/// ```
/// # use panelgen::mapping::MappingEntry;
/// # use panelgen_core::widget::WidgetKind;
/// let entry = MappingEntry::new(WidgetKind::OccultKnob, "mixKnob")
///     .with_label("MIX")
///     .with_param_id("ParamIDs::mix");
///
/// assert_eq!(entry.param_id(), Some("ParamIDs::mix"));
/// assert!(!entry.modulation());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    #[serde(rename = "type")]
    kind: WidgetKind,

    member: String,

    #[serde(default)]
    label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    param_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    modulation: Option<bool>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl MappingEntry {
    pub fn new(kind: WidgetKind, member: impl Into<String>) -> Self {
        Self {
            kind,
            member: member.into(),
            label: String::new(),
            param_id: None,
            modulation: None,
            extra: Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_param_id(mut self, param_id: impl Into<String>) -> Self {
        self.param_id = Some(param_id.into());
        self
    }

    pub fn with_modulation(mut self, modulation: bool) -> Self {
        self.modulation = Some(modulation);
        self
    }

    /// Returns the widget kind.
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Returns the member variable name.
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the parameter id, ignoring an empty one.
    pub fn param_id(&self) -> Option<&str> {
        self.param_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns `true` if the widget takes a modulation source.
    pub fn modulation(&self) -> bool {
        self.modulation.unwrap_or(false)
    }

    /// Returns a hand-written key this tool does not interpret.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// A component as stored in the file.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Valid(MappingEntry),
    Malformed { raw: Value, reason: String },
}

impl Entry {
    fn from_value(raw: Value) -> Self {
        match serde_json::from_value::<MappingEntry>(raw.clone()) {
            Ok(entry) if entry.member.trim().is_empty() => Entry::Malformed {
                raw,
                reason: "member name is empty".to_string(),
            },
            Ok(entry) => Entry::Valid(entry),
            Err(err) => Entry::Malformed {
                raw,
                reason: err.to_string(),
            },
        }
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Entry::Valid(entry) => entry.serialize(serializer),
            Entry::Malformed { raw, .. } => raw.serialize(serializer),
        }
    }
}

#[derive(Deserialize)]
struct MappingDocument {
    #[serde(default)]
    config: CanvasConfig,

    #[serde(default)]
    components: IndexMap<String, Value>,
}

#[derive(Serialize)]
struct MappingDocumentRef<'a> {
    config: &'a CanvasConfig,
    components: &'a IndexMap<String, Entry>,
}

/// The mapping from shape ids to widgets, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingStore {
    config: CanvasConfig,
    components: IndexMap<String, Entry>,
}

impl MappingStore {
    /// Creates an empty store with the given canvas configuration.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            components: IndexMap::new(),
        }
    }

    /// Loads a store from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Missing`] if the file does not exist,
    /// [`MappingError::Io`] if it cannot be read, and
    /// [`MappingError::Json`] if the document itself is not valid JSON or
    /// its `config` section cannot be read. Individual malformed components
    /// are not errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MappingError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MappingError::Missing(path.to_path_buf()));
        }

        info!(path = path.display().to_string(); "Loading mapping");
        let content = fs::read_to_string(path).map_err(|source| MappingError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json(&content).map_err(|source| MappingError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            components = store.len(),
            malformed = store.malformed().count();
            "Mapping loaded"
        );

        Ok(store)
    }

    /// Loads a store if the file exists.
    ///
    /// # Errors
    ///
    /// Same as [`MappingStore::load`], except that a missing file is `Ok(None)`.
    pub fn load_if_exists(path: impl AsRef<Path>) -> Result<Option<Self>, MappingError> {
        match Self::load(path) {
            Ok(store) => Ok(Some(store)),
            Err(MappingError::Missing(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Parses a store from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the document structure is invalid.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let document: MappingDocument = serde_json::from_str(content)?;

        let components = document
            .components
            .into_iter()
            .map(|(id, raw)| {
                let entry = Entry::from_value(raw);
                if let Entry::Malformed { reason, .. } = &entry {
                    warn!(id, reason; "Malformed mapping entry");
                }
                (id, entry)
            })
            .collect();

        Ok(Self {
            config: document.config,
            components,
        })
    }

    /// Serializes the store as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let document = MappingDocumentRef {
            config: &self.config,
            components: &self.components,
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }

    /// Writes the store to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), MappingError> {
        let path = path.as_ref();
        let json = self.to_json().map_err(|source| MappingError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, json).map_err(|source| MappingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = path.display().to_string(), components = self.len(); "Mapping saved");

        Ok(())
    }

    /// Returns the canvas configuration.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Returns the readable entry for `id`; malformed entries are `None`.
    pub fn entry(&self, id: &str) -> Option<&MappingEntry> {
        match self.components.get(id) {
            Some(Entry::Valid(entry)) => Some(entry),
            _ => None,
        }
    }

    /// Returns `true` if the file has any component under `id`, readable or not.
    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    /// Adds or replaces the entry for `id`.
    pub fn insert(&mut self, id: impl Into<String>, entry: MappingEntry) {
        self.components.insert(id.into(), Entry::Valid(entry));
    }

    /// Iterates over readable entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.components.iter().filter_map(|(id, entry)| match entry {
            Entry::Valid(entry) => Some((id.as_str(), entry)),
            Entry::Malformed { .. } => None,
        })
    }

    /// Iterates over malformed entries with the reason they could not be read.
    pub fn malformed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.components.iter().filter_map(|(id, entry)| match entry {
            Entry::Malformed { reason, .. } => Some((id.as_str(), reason.as_str())),
            Entry::Valid(_) => None,
        })
    }

    /// Number of components, malformed ones included.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
