//! Throttle and cache decisions for the visitor count, kept free of browser
//! types so they test on the host target.

use serde::Deserialize;

/// Cooldown between visitor-count requests.
pub const DEFAULT_THROTTLE_MS: f64 = 5000.0;

/// Shown until a count has ever been fetched successfully.
pub const FALLBACK_WORD: &str = "VISITOR";

/// Response body of the counting backend.
#[derive(Debug, Deserialize)]
struct VisitorPayload {
    visitors: u64,
}

/// Instance-scoped throttle window plus last-known-good display value.
///
/// The provider owns one of these per animation instance; there is no
/// module-global state, so independent banners don't share cooldowns.
#[derive(Debug, Clone)]
pub struct CountCache {
    throttle_ms: f64,
    last_attempt_ms: Option<f64>,
    cached: Option<String>,
}

impl CountCache {
    /// `persisted` is the display value recovered from durable storage, if any.
    pub fn new(throttle_ms: f64, persisted: Option<String>) -> Self {
        Self {
            throttle_ms,
            last_attempt_ms: None,
            cached: persisted.filter(|s| !s.is_empty()),
        }
    }

    /// The displayable value right now: last good count, else the fallback.
    pub fn current(&self) -> String {
        self.cached
            .clone()
            .unwrap_or_else(|| FALLBACK_WORD.to_string())
    }

    /// Whether a request may be issued at `now_ms`. A `true` answer starts
    /// the cooldown immediately, so failed attempts are throttled too.
    pub fn should_fetch(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_attempt_ms {
            if now_ms - last < self.throttle_ms {
                return false;
            }
        }
        self.last_attempt_ms = Some(now_ms);
        true
    }

    /// Record a fetched count and return its display form (`#<count>`).
    pub fn record_success(&mut self, count: u64) -> String {
        let display = format!("#{count}");
        self.cached = Some(display.clone());
        display
    }

    /// Extract the count from a response body; `None` on any shape mismatch.
    pub fn parse_payload(json: &str) -> Option<u64> {
        serde_json::from_str::<VisitorPayload>(json)
            .ok()
            .map(|payload| payload.visitors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_within_window_reuse_the_cached_string() {
        let mut cache = CountCache::new(5000.0, None);
        assert!(cache.should_fetch(0.0));
        let first = cache.record_success(42);
        assert_eq!(first, "#42");

        assert!(!cache.should_fetch(1000.0));
        assert!(!cache.should_fetch(4999.0));
        assert_eq!(cache.current(), first);
    }

    #[test]
    fn failure_after_window_returns_prior_value() {
        let mut cache = CountCache::new(5000.0, None);
        assert!(cache.should_fetch(0.0));
        cache.record_success(42);

        // Window elapsed, the request goes out — and fails. No record_success.
        assert!(cache.should_fetch(5000.0));
        assert_eq!(cache.current(), "#42");

        // The failed attempt still started a cooldown.
        assert!(!cache.should_fetch(6000.0));
    }

    #[test]
    fn placeholder_until_first_success() {
        let mut cache = CountCache::new(5000.0, None);
        assert_eq!(cache.current(), FALLBACK_WORD);
        assert!(cache.should_fetch(0.0));
        assert_eq!(cache.current(), FALLBACK_WORD);
    }

    #[test]
    fn persisted_value_survives_reload() {
        let cache = CountCache::new(5000.0, Some("#1337".to_string()));
        assert_eq!(cache.current(), "#1337");

        let empty = CountCache::new(5000.0, Some(String::new()));
        assert_eq!(empty.current(), FALLBACK_WORD);
    }

    #[test]
    fn payload_parsing() {
        assert_eq!(
            CountCache::parse_payload(
                r#"{"visitors": 42, "message": "Visitor count updated successfully!"}"#
            ),
            Some(42)
        );
        assert_eq!(CountCache::parse_payload(r#"{"visitors": -1}"#), None);
        assert_eq!(CountCache::parse_payload(r#"{"count": 42}"#), None);
        assert_eq!(CountCache::parse_payload("not json"), None);
    }
}
