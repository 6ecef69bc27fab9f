//! Browser-side visitor count acquisition: fetch, persist, never fail.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::cache::CountCache;

const STORAGE_KEY: &str = "glitch-banner.visitor-count";

/// Resolves the dynamic `#<count>` word for the banner.
///
/// All failure modes (missing window, network error, non-2xx, bad payload)
/// degrade to the cached or fallback value; nothing propagates to the caller.
pub struct VisitorCountProvider {
    endpoint: String,
    cache: CountCache,
}

impl VisitorCountProvider {
    pub fn new(endpoint: String, throttle_ms: f64) -> Self {
        Self {
            endpoint,
            cache: CountCache::new(throttle_ms, read_persisted()),
        }
    }

    /// Fetch the current count, or return the cached/fallback value when
    /// throttled or on any failure. Always resolves to a displayable string.
    pub async fn fetch_count(&mut self) -> String {
        if !self.cache.should_fetch(js_sys::Date::now()) {
            return self.cache.current();
        }
        match request_count(&self.endpoint).await {
            Ok(count) => {
                let display = self.cache.record_success(count);
                persist(&display);
                display
            }
            Err(err) => {
                log::warn!("visitor count fetch failed: {:?}", err);
                self.cache.current()
            }
        }
    }
}

async fn request_count(endpoint: &str) -> Result<u64, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(endpoint))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "visitor endpoint returned {}",
            response.status()
        )));
    }
    let body = JsFuture::from(response.text()?).await?;
    let text = body.as_string().unwrap_or_default();
    CountCache::parse_payload(&text)
        .ok_or_else(|| JsValue::from_str("invalid visitor payload"))
}

fn read_persisted() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

fn persist(value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }
}
