use log::{warn, Level};
use serde::Deserialize;

/// Id of the optional JSON island a page can use to override the defaults.
pub const CONFIG_ELEMENT_ID: &str = "effects-config";

/// Tunables for the page effects. Every field has a default, so an override
/// island only needs the keys it wants to change.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub reveal_selector: String,
    pub revealed_class: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub anchor_selector: String,
    pub quiz_advance_delay_ms: u32,
    pub parallax_shape_count: usize,
    pub parallax_speed_step: f64,
    pub parallax_rotation_factor: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            reveal_selector: ".feature-card, .step".to_string(),
            revealed_class: "visible".to_string(),
            reveal_threshold: 0.1,
            // grows the viewport downwards so targets count as entering 50px early
            reveal_root_margin: "0px 0px 50px 0px".to_string(),
            anchor_selector: "a[href^='#']".to_string(),
            quiz_advance_delay_ms: 1000,
            parallax_shape_count: 4,
            parallax_speed_step: 0.1,
            parallax_rotation_factor: 0.1,
        }
    }
}

impl EffectsConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the override island from the current document, falling back to
    /// the defaults when it is missing or malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
