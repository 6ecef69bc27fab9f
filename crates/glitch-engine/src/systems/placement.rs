//! Word placement — random non-overlapping anchors via rejection sampling.

use glam::UVec2;

use crate::core::rng::Rng;

/// Pick one anchor per word so each word fits inside a `columns x rows` grid
/// and, where the attempt budget allows, no two words overlap on a row.
///
/// Rejection sampling: candidates are redrawn until they clear every
/// previously placed word, up to `max_attempts` per word. When the budget runs
/// out the last candidate is accepted even if it overlaps — the animation
/// keeps running on crowded grids instead of looping forever.
///
/// Words wider than the grid anchor at column 0 and overflow off the right
/// edge; zero-dimension grids anchor everything at the origin.
pub fn place_words(
    words: &[String],
    columns: u32,
    rows: u32,
    rng: &mut Rng,
    max_attempts: u32,
) -> Vec<UVec2> {
    let mut placed: Vec<(UVec2, u32)> = Vec::with_capacity(words.len());

    for word in words {
        let len = word.chars().count() as u32;
        let mut candidate = random_anchor(len, columns, rows, rng);
        for _ in 1..max_attempts.max(1) {
            if !overlaps_any(candidate, len, &placed) {
                break;
            }
            candidate = random_anchor(len, columns, rows, rng);
        }
        placed.push((candidate, len));
    }

    placed.into_iter().map(|(anchor, _)| anchor).collect()
}

fn random_anchor(len: u32, columns: u32, rows: u32, rng: &mut Rng) -> UVec2 {
    // x in [0, columns - len], clamped to 0 when the word doesn't fit.
    let x_bound = columns.saturating_sub(len) + 1;
    let x = rng.next_int(x_bound);
    let y = if rows == 0 { 0 } else { rng.next_int(rows) };
    UVec2::new(x, y)
}

fn overlaps_any(candidate: UVec2, len: u32, placed: &[(UVec2, u32)]) -> bool {
    placed.iter().any(|&(anchor, placed_len)| {
        anchor.y == candidate.y
            && candidate.x < anchor.x + placed_len
            && anchor.x < candidate.x + len
    })
}
