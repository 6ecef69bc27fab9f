pub mod cache;
#[cfg(target_arch = "wasm32")]
pub mod provider;

pub use cache::{CountCache, DEFAULT_THROTTLE_MS, FALLBACK_WORD};
#[cfg(target_arch = "wasm32")]
pub use provider::VisitorCountProvider;
