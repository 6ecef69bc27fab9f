pub mod frame;

// Re-export key types for convenient access
pub use frame::{FrameBuffer, GlyphInstance, Rgb};
