//! Frame building — flattens grid + clock state into the glyph buffer.

use glam::UVec2;

use crate::api::config::GlitchConfig;
use crate::core::grid::CharacterGrid;
use crate::renderer::frame::{FrameBuffer, GlyphInstance};
use crate::systems::phase::PhaseClock;

/// Rebuild `buffer` for the current frame: every background cell first, then
/// the visible prefix of each word on top at its anchor.
pub fn build_frame(
    grid: &CharacterGrid,
    words: &[String],
    positions: &[UVec2],
    clock: &PhaseClock,
    config: &GlitchConfig,
    buffer: &mut FrameBuffer,
) {
    buffer.clear();

    for (x, y, cell) in grid.iter() {
        buffer.push(GlyphInstance {
            ch: cell.ch,
            col: x,
            row: y,
            color: config.grid_color,
            alpha: cell.opacity,
        });
    }

    for (index, (word, anchor)) in words.iter().zip(positions).enumerate() {
        let visible = clock.visible_letters(index, words);
        for (i, ch) in word.chars().take(visible).enumerate() {
            buffer.push(GlyphInstance {
                ch,
                col: anchor.x + i as u32,
                row: anchor.y,
                color: config.word_color,
                alpha: 1.0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    fn fixture() -> (CharacterGrid, Vec<String>, Vec<UVec2>, GlitchConfig) {
        let mut rng = Rng::new(1);
        let mut grid = CharacterGrid::new();
        grid.resize(20, 10, &mut rng);
        let words = vec!["WELCOME".to_string(), "#42".to_string()];
        let positions = vec![UVec2::new(2, 3), UVec2::new(5, 7)];
        (grid, words, positions, GlitchConfig::default())
    }

    #[test]
    fn background_only_while_nothing_revealed() {
        let (grid, words, positions, config) = fixture();
        let clock = PhaseClock::new(0.0);
        let mut buffer = FrameBuffer::new();

        build_frame(&grid, &words, &positions, &clock, &config, &mut buffer);
        assert_eq!(buffer.len(), 200);
        assert!(buffer.iter().all(|g| g.color == config.grid_color));
    }

    #[test]
    fn revealed_prefix_is_painted_on_top_at_the_anchor() {
        let (grid, words, positions, config) = fixture();
        let mut clock = PhaseClock::new(0.0);
        for i in 1..=3 {
            clock.advance(i as f64 * config.letter_speed_ms, &words, &config);
        }
        let mut buffer = FrameBuffer::new();
        build_frame(&grid, &words, &positions, &clock, &config, &mut buffer);

        assert_eq!(buffer.len(), 200 + 3);
        let overlay: Vec<_> = buffer
            .iter()
            .filter(|g| g.color == config.word_color)
            .collect();
        assert_eq!(overlay.len(), 3);
        for (i, (glyph, expected)) in overlay.iter().zip("WEL".chars()).enumerate() {
            assert_eq!(glyph.ch, expected);
            assert_eq!(glyph.col, 2 + i as u32);
            assert_eq!(glyph.row, 3);
            assert_eq!(glyph.alpha, 1.0);
        }
    }

    #[test]
    fn word_count_and_position_count_may_diverge_without_panicking() {
        // A mid-resize logic tick can momentarily see fewer positions.
        let (grid, words, _, config) = fixture();
        let clock = PhaseClock::new(0.0);
        let mut buffer = FrameBuffer::new();
        build_frame(
            &grid,
            &words,
            &[UVec2::new(0, 0)],
            &clock,
            &config,
            &mut buffer,
        );
        assert_eq!(buffer.len(), 200);
    }
}
