//! Animation tunables, overridable by the hosting page via JSON.

use serde::{Deserialize, Serialize};

use crate::renderer::frame::Rgb;

/// Configuration for one banner animation instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlitchConfig {
    /// Glyph cell size in pixels; grid dimensions are container size / font size.
    pub font_size: u32,
    /// Milliseconds between letter reveals/erasures.
    pub letter_speed_ms: f64,
    /// Milliseconds the fully shown (and fully hidden) states hold.
    pub word_stay_ms: f64,
    /// Polling period of the logic loop in milliseconds.
    pub logic_interval_ms: u32,
    /// Per-cell probability of re-randomizing on each frame.
    pub sparkle_rate: f32,
    /// Attempt budget per word before accepting an overlapping placement.
    pub placement_attempts: u32,
    /// Canvas clear color.
    pub background: Rgb,
    /// Background glyph color (alpha comes from each cell).
    pub grid_color: Rgb,
    /// Word overlay color, drawn fully opaque.
    pub word_color: Rgb,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            font_size: 16,
            letter_speed_ms: 300.0,
            word_stay_ms: 2000.0,
            logic_interval_ms: 100,
            sparkle_rate: 0.01,
            placement_attempts: 50,
            background: Rgb::new(0x12, 0x13, 0x14),
            grid_color: Rgb::new(28, 57, 142),
            word_color: Rgb::new(0x3c, 0x57, 0xa8),
        }
    }
}

impl GlitchConfig {
    /// Parse a config from a JSON string. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
