//! Target widget kinds.
//!
//! A [`WidgetKind`] names the editor widget a shape becomes. The kind decides
//! which snippet templates apply. Kinds are serialized as their type names
//! (`"OccultKnob"`, `"TextButton"`, ...) so mapping files stay readable.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known widget kind.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown widget type `{0}`")]
pub struct UnknownWidgetKind(pub String);

/// The editor widget a shape maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WidgetKind {
    /// Rotary knob with a parameter attachment.
    OccultKnob,
    /// Push button with a text caption.
    TextButton,
    /// Modulation assignment button; wired by hand.
    ModButton,
    /// Drop-down selector.
    ComboBox,
    WaveformDisplay,
    GrainVisualizer,
    LfoVisualizer,
    /// Status light; wired by hand.
    Indicator,
    /// Placeholder for shapes whose kind could not be inferred.
    Unknown,
}

impl WidgetKind {
    /// All kinds, in declaration order.
    pub const ALL: [WidgetKind; 9] = [
        WidgetKind::OccultKnob,
        WidgetKind::TextButton,
        WidgetKind::ModButton,
        WidgetKind::ComboBox,
        WidgetKind::WaveformDisplay,
        WidgetKind::GrainVisualizer,
        WidgetKind::LfoVisualizer,
        WidgetKind::Indicator,
        WidgetKind::Unknown,
    ];

    /// Returns the type name used in mapping files and generated code.
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::OccultKnob => "OccultKnob",
            WidgetKind::TextButton => "TextButton",
            WidgetKind::ModButton => "ModButton",
            WidgetKind::ComboBox => "ComboBox",
            WidgetKind::WaveformDisplay => "WaveformDisplay",
            WidgetKind::GrainVisualizer => "GrainVisualizer",
            WidgetKind::LfoVisualizer => "LFOVisualizer",
            WidgetKind::Indicator => "Indicator",
            WidgetKind::Unknown => "Unknown",
        }
    }

    /// Returns `true` if snippets are generated for this kind.
    ///
    /// Modulation buttons and indicators are wired by hand, and unknown
    /// kinds have no template.
    pub fn is_emittable(&self) -> bool {
        !matches!(
            self,
            WidgetKind::ModButton | WidgetKind::Indicator | WidgetKind::Unknown
        )
    }

    /// Returns `true` for the display and visualizer kinds.
    pub fn is_display(&self) -> bool {
        matches!(
            self,
            WidgetKind::WaveformDisplay | WidgetKind::GrainVisualizer | WidgetKind::LfoVisualizer
        )
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = UnknownWidgetKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownWidgetKind(s.to_string()))
    }
}

impl TryFrom<String> for WidgetKind {
    type Error = UnknownWidgetKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        kind.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_kind() {
        for kind in WidgetKind::ALL {
            assert_eq!(kind.as_str().parse::<WidgetKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_lfo_visualizer_spelling() {
        assert_eq!(WidgetKind::LfoVisualizer.to_string(), "LFOVisualizer");
        assert!("LfoVisualizer".parse::<WidgetKind>().is_err());
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "Slider".parse::<WidgetKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown widget type `Slider`");
    }

    #[test]
    fn test_emittable_kinds() {
        assert!(WidgetKind::OccultKnob.is_emittable());
        assert!(WidgetKind::ComboBox.is_emittable());
        assert!(WidgetKind::GrainVisualizer.is_emittable());
        assert!(!WidgetKind::ModButton.is_emittable());
        assert!(!WidgetKind::Indicator.is_emittable());
        assert!(!WidgetKind::Unknown.is_emittable());
    }

    #[test]
    fn test_is_display() {
        assert!(WidgetKind::WaveformDisplay.is_display());
        assert!(!WidgetKind::TextButton.is_display());
    }
}
