//! Guessing widget mappings from shape ids.
//!
//! Drawings follow naming conventions (`knob_*`, `*_btn`, `mod_*`,
//! `*_visualizer`, ...). [`suggest`] turns an id into a starting
//! [`MappingEntry`] that the user reviews before generating code.

use log::debug;

use panelgen_core::widget::WidgetKind;

use crate::mapping::MappingEntry;

/// Parameter ids whose names do not follow from the shape id.
const PARAM_ALIASES: &[(&str, &str)] = &[
    ("knob_position", "ParamIDs::position"),
    ("knob_size", "ParamIDs::grainSize"),
    ("knob_density", "ParamIDs::density"),
    ("knob_pitch", "ParamIDs::pitch"),
    ("knob_spray", "ParamIDs::spray"),
    ("knob_pan", "ParamIDs::panSpread"),
    ("knob_gatk", "ParamIDs::grainAttack"),
    ("knob_grel", "ParamIDs::grainRelease"),
    ("knob_attack", "ParamIDs::voiceAttack"),
    ("knob_decay", "ParamIDs::voiceDecay"),
    ("knob_sustain", "ParamIDs::voiceSustain"),
    ("knob_release", "ParamIDs::voiceRelease"),
    ("knob_lfo_rate", "ParamIDs::lfoRate"),
    ("knob_lfo_amount", "ParamIDs::lfoAmount"),
    ("lfo_waveform_box", "ParamIDs::lfoWaveform"),
    ("knob_delay", "ParamIDs::delayTime"),
    ("knob_flutter", "ParamIDs::flutter"),
    ("knob_hiss", "ParamIDs::tapeHiss"),
    ("knob_damage", "ParamIDs::damage"),
    ("knob_life", "ParamIDs::life"),
    ("knob_reverb", "ParamIDs::reverb"),
    ("knob_feedback", "ParamIDs::feedback"),
    ("knob_mix", "ParamIDs::mix"),
    ("knob_output", "ParamIDs::output"),
    ("sample_gain_knob", "ParamIDs::sampleGain"),
];

/// Short ids that read better as abbreviations.
const LABEL_ALIASES: &[(&str, &str)] = &[
    ("gatk", "G.ATK"),
    ("grel", "G.REL"),
    ("lfo_rate", "RATE"),
    ("lfo_amount", "AMOUNT"),
];

/// A suggested mapping for one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    kind: WidgetKind,
    member: String,
    label: String,
    param_id: Option<String>,
}

impl Suggestion {
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn param_id(&self) -> Option<&str> {
        self.param_id.as_deref()
    }

    /// Converts the suggestion into a mapping entry.
    ///
    /// Knobs are flagged as modulation targets.
    pub fn into_entry(self) -> MappingEntry {
        let is_knob = self.kind == WidgetKind::OccultKnob;
        let mut entry = MappingEntry::new(self.kind, self.member).with_label(self.label);
        if let Some(param_id) = self.param_id {
            entry = entry.with_param_id(param_id);
        }
        if is_knob {
            entry = entry.with_modulation(true);
        }
        entry
    }
}

/// Suggests a mapping for a shape id.
///
/// # Examples
///
/// ```
/// # use panelgen::infer::suggest;
/// # use panelgen_core::widget::WidgetKind;
/// let suggestion = suggest("knob_lfo_rate");
///
/// assert_eq!(suggestion.kind(), WidgetKind::OccultKnob);
/// assert_eq!(suggestion.member(), "lfoRateKnob");
/// assert_eq!(suggestion.label(), "RATE");
/// assert_eq!(suggestion.param_id(), Some("ParamIDs::lfoRate"));
/// ```
pub fn suggest(id: &str) -> Suggestion {
    let kind = detect_kind(id);
    let suggestion = Suggestion {
        kind,
        member: member_name(id, kind),
        label: label(id),
        param_id: param_id(id, kind),
    };
    debug!(id, kind = kind.as_str(), member = suggestion.member; "Suggested mapping");
    suggestion
}

/// Guesses the widget kind from naming conventions. The first rule that
/// matches wins.
pub fn detect_kind(id: &str) -> WidgetKind {
    if id.starts_with("knob_") {
        return WidgetKind::OccultKnob;
    }
    if id.ends_with("_btn") {
        return WidgetKind::TextButton;
    }
    if id.starts_with("mod_") {
        return WidgetKind::ModButton;
    }

    if id.contains("visualizer") || id.contains("display") {
        if id.contains("waveform") {
            return WidgetKind::WaveformDisplay;
        } else if id.contains("grain") {
            return WidgetKind::GrainVisualizer;
        } else if id.contains("lfo") {
            return WidgetKind::LfoVisualizer;
        }
    }

    if id.contains("waveform_box") || id.contains("dropdown") {
        return WidgetKind::ComboBox;
    }
    if id.contains("indicator") {
        return WidgetKind::Indicator;
    }

    WidgetKind::Unknown
}

fn member_name(id: &str, kind: WidgetKind) -> String {
    let stem = id.replace("knob_", "").replace("mod_", "");
    let stem = stem.strip_suffix("_btn").unwrap_or(&stem);
    let mut name = camel_case(stem);

    let suffix = match kind {
        WidgetKind::OccultKnob => "Knob",
        WidgetKind::TextButton => "Button",
        WidgetKind::ComboBox => "Box",
        _ => "",
    };
    if !name.ends_with(suffix) {
        name.push_str(suffix);
    }
    name
}

fn label(id: &str) -> String {
    let stem = id.replace("knob_", "").replace("mod_", "").replace("_btn", "");

    LABEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == stem)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| stem.replace('_', " ").to_uppercase())
}

fn param_id(id: &str, kind: WidgetKind) -> Option<String> {
    if let Some((_, param)) = PARAM_ALIASES.iter().find(|(alias, _)| *alias == id) {
        return Some(param.to_string());
    }

    match (kind, id.strip_prefix("knob_")) {
        (WidgetKind::OccultKnob, Some(stem)) if !stem.is_empty() => {
            Some(format!("ParamIDs::{}", camel_case(stem)))
        }
        _ => None,
    }
}

/// `lfo_wave_shape` becomes `lfoWaveShape`. Later words are capitalized
/// and the rest of each word lowercased.
fn camel_case(snake: &str) -> String {
    let mut parts = snake.split('_');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}
