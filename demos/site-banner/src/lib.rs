//! The site's welcome banner: WELCOME plus the live visitor count, typed
//! into the flickering background of the `textGlitchCanvas` element.

use glitch_engine::GlitchConfig;
use glitch_web::visitors::DEFAULT_THROTTLE_MS;
use glitch_web::StartOptions;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "textGlitchCanvas";
const COUNT_ENDPOINT: &str = "/api/visitors";

fn banner_options() -> StartOptions {
    StartOptions {
        canvas_id: CANVAS_ID.to_string(),
        words: vec!["WELCOME".to_string()],
        count_endpoint: Some(COUNT_ENDPOINT.to_string()),
        count_throttle_ms: DEFAULT_THROTTLE_MS,
        config: GlitchConfig::default(),
        seed: None,
    }
}

/// Mount the banner onto the page. Returns the teardown handle.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn banner_start() -> glitch_web::AnimationHandle {
    glitch_web::start_with_options(banner_options()).await
}
