//! Rules for leaving decorative elements out of the shape list.

/// Id prefixes of decorative elements (particles, MIDI dots, keyboard keys).
pub const DEFAULT_PREFIXES: &[&str] = &["grain_particle", "midi_dot", "kbd_key"];

/// Id suffixes of decorative elements.
pub const DEFAULT_SUFFIXES: &[&str] = &["_border"];

/// Exact ids of background elements.
pub const DEFAULT_IDS: &[&str] = &["panel_background", "header_bg", "waveform_path"];

/// Decides which element ids are decorative.
///
/// An id is decorative if it starts with any prefix, ends with any suffix,
/// or equals any listed id. Rules apply to circles and rectangles alike.
///
/// # Examples
///
/// ```
/// # use panelgen_parser::SkipRules;
/// let rules = SkipRules::default();
///
/// assert!(rules.is_decorative("grain_particle_12"));
/// assert!(rules.is_decorative("output_border"));
/// assert!(rules.is_decorative("panel_background"));
/// assert!(!rules.is_decorative("knob_mix"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRules {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    ids: Vec<String>,
}

impl SkipRules {
    /// Create rules from explicit prefix, suffix and id lists.
    pub fn new(prefixes: Vec<String>, suffixes: Vec<String>, ids: Vec<String>) -> Self {
        Self {
            prefixes,
            suffixes,
            ids,
        }
    }

    /// Rules that skip nothing.
    pub fn none() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    /// Returns `true` if an element with this id should be left out.
    pub fn is_decorative(&self, id: &str) -> bool {
        self.prefixes.iter().any(|p| id.starts_with(p.as_str()))
            || self.suffixes.iter().any(|s| id.ends_with(s.as_str()))
            || self.ids.iter().any(|i| i == id)
    }
}

impl Default for SkipRules {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self::new(
            owned(DEFAULT_PREFIXES),
            owned(DEFAULT_SUFFIXES),
            owned(DEFAULT_IDS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = SkipRules::default();

        assert!(rules.is_decorative("midi_dot"));
        assert!(rules.is_decorative("kbd_key_c4"));
        assert!(rules.is_decorative("header_bg"));
        assert!(!rules.is_decorative("header_bg_2"));
        assert!(!rules.is_decorative("border_left"));
        assert!(!rules.is_decorative("load_btn"));
    }

    #[test]
    fn test_none_skips_nothing() {
        let rules = SkipRules::none();
        assert!(!rules.is_decorative("panel_background"));
    }

    #[test]
    fn test_custom_rules() {
        let rules = SkipRules::new(vec!["deco_".into()], vec![], vec!["logo".into()]);

        assert!(rules.is_decorative("deco_star"));
        assert!(rules.is_decorative("logo"));
        assert!(!rules.is_decorative("grain_particle_1"));
    }
}
