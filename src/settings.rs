//! Runtime preferences
//!
//! Read once at page start from an optional JSON blob. Never written back.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Play answer cues
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Accessibility ===
    /// Reduced motion (no feedback flash)
    pub reduced_motion: bool,
    /// High contrast mode
    pub high_contrast: bool,

    // === Tracing pad ===
    pub guide_color: String,
    pub guide_width: f32,
    pub stroke_color: String,
    pub stroke_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,

            reduced_motion: false,
            high_contrast: false,

            // Indigo guide, red child stroke
            guide_color: "#6366F1".to_string(),
            guide_width: 8.0,
            stroke_color: "#EF4444".to_string(),
            stroke_width: 4.0,
        }
    }
}

impl Settings {
    /// Element id holding the page's settings JSON
    pub const ELEMENT_ID: &'static str = "neuronest-settings";

    /// Parse settings; missing fields take defaults, out-of-range values are clamped
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    fn sanitize(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        if self.high_contrast {
            self.guide_color = "#000000".to_string();
        }
        if !(self.guide_width > 0.0) {
            self.guide_width = Self::default().guide_width;
        }
        if !(self.stroke_width > 0.0) {
            self.stroke_width = Self::default().stroke_width;
        }
    }

    /// Effective cue volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.master_volume * self.sfx_volume
        } else {
            0.0
        }
    }

    /// Whether the lives game flashes its last verdict
    pub fn feedback_flash(&self) -> bool {
        !self.reduced_motion
    }

    /// Read settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded page settings");
                    settings
                }
                Err(err) => {
                    log::warn!("{err}; using defaults");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
