//! WASM bridge for the glitch-text banner.
//!
//! The engine crate stays headless; everything that touches the DOM lives
//! here: canvas mount, the requestAnimationFrame render loop, the
//! fixed-interval logic loop, the resize listener, teardown, and the
//! visitor-count provider. The pure decision logic (start options, count
//! throttling/caching) compiles and tests on non-wasm hosts; only the glue
//! is gated on `target_arch = "wasm32"`.

pub mod options;
pub mod visitors;

#[cfg(target_arch = "wasm32")]
mod runner;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use options::StartOptions;
#[cfg(target_arch = "wasm32")]
pub use wasm::{start_glitch_animation, start_with_options, AnimationHandle};
