//! The owning facade for one banner animation instance.
//!
//! Two host-scheduled loops drive it: `frame_tick` at repaint cadence and
//! `logic_tick` at the fixed polling period. Both mutate the same state; the
//! host guarantees they never run concurrently (single-threaded event loop).

use glam::UVec2;

use crate::api::config::GlitchConfig;
use crate::core::grid::CharacterGrid;
use crate::core::rng::Rng;
use crate::renderer::frame::FrameBuffer;
use crate::systems::phase::PhaseClock;
use crate::systems::placement::place_words;
use crate::systems::render::build_frame;

/// State for a single mounted glitch-text animation.
pub struct GlitchAnimation {
    config: GlitchConfig,
    rng: Rng,
    grid: CharacterGrid,
    words: Vec<String>,
    positions: Vec<UVec2>,
    clock: PhaseClock,
    frame: FrameBuffer,
}

impl GlitchAnimation {
    pub fn new(config: GlitchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Rng::new(seed),
            grid: CharacterGrid::new(),
            words: Vec::new(),
            positions: Vec::new(),
            clock: PhaseClock::new(0.0),
            frame: FrameBuffer::new(),
        }
    }

    pub fn config(&self) -> &GlitchConfig {
        &self.config
    }

    pub fn grid(&self) -> &CharacterGrid {
        &self.grid
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn positions(&self) -> &[UVec2] {
        &self.positions
    }

    pub fn clock(&self) -> &PhaseClock {
        &self.clock
    }

    /// The glyphs to paint for the most recently built frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Install the final word list and restart the cycle from the beginning.
    ///
    /// Called once after the dynamic word resolves, before the first frame.
    pub fn set_words(&mut self, words: Vec<String>, now_ms: f64) {
        log::info!("glitch animation words: {:?}", words);
        self.words = words;
        self.clock.reset(now_ms);
        self.place();
    }

    /// Derive grid dimensions from the container's pixel size and rebuild
    /// grid and word positions. Idempotent and safe to call in bursts.
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        let font = self.config.font_size.max(1);
        let columns = width_px / font;
        let rows = height_px / font;
        self.grid.resize(columns, rows, &mut self.rng);
        self.place();
    }

    /// Render-loop tick: sparkle the background and rebuild the frame buffer.
    pub fn frame_tick(&mut self) {
        self.grid.tick(&mut self.rng, self.config.sparkle_rate);
        build_frame(
            &self.grid,
            &self.words,
            &self.positions,
            &self.clock,
            &self.config,
            &mut self.frame,
        );
    }

    /// Logic-loop tick: advance the phase clock; a completed cycle gets fresh
    /// word positions.
    pub fn logic_tick(&mut self, now_ms: f64) {
        if self.clock.advance(now_ms, &self.words, &self.config) {
            self.place();
        }
    }

    fn place(&mut self) {
        self.positions = place_words(
            &self.words,
            self.grid.columns(),
            self.grid.rows(),
            &mut self.rng,
            self.config.placement_attempts,
        );
    }
}
