pub mod api;
pub mod core;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::animation::GlitchAnimation;
pub use api::config::GlitchConfig;
// `crate::` disambiguates the core module from the sysroot crate.
pub use crate::core::grid::{Cell, CharacterGrid, GLYPH_ALPHABET};
pub use crate::core::rng::Rng;
pub use renderer::frame::{FrameBuffer, GlyphInstance, Rgb};
pub use systems::phase::{Phase, PhaseClock};
pub use systems::placement::place_words;
pub use systems::render::build_frame;
