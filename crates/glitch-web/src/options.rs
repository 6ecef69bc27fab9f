//! Start options supplied by the hosting page.

use glitch_engine::GlitchConfig;
use serde::{Deserialize, Serialize};

use crate::visitors::DEFAULT_THROTTLE_MS;

/// Everything needed to mount one banner, parsed from the host's JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartOptions {
    /// Id of the `<canvas>` element; its parent element supplies the size.
    pub canvas_id: String,
    /// Static words, revealed in order before the dynamic one.
    #[serde(default)]
    pub words: Vec<String>,
    /// Endpoint returning `{"visitors": <number>}`; when set, the resolved
    /// `#<count>` string is appended as the final word.
    #[serde(default)]
    pub count_endpoint: Option<String>,
    /// Cooldown between visitor-count requests.
    #[serde(default = "default_throttle_ms")]
    pub count_throttle_ms: f64,
    /// Animation tunables; absent fields keep their defaults.
    #[serde(default)]
    pub config: GlitchConfig,
    /// RNG seed; defaults to the current time at mount.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_throttle_ms() -> f64 {
    DEFAULT_THROTTLE_MS
}

impl StartOptions {
    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
