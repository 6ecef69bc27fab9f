//! The word reveal/hide cycle — a timed state machine.
//!
//! Words type in letter-by-letter, hold, erase in reverse word order, stay
//! hidden, then the cycle restarts with fresh positions. The clock never reads
//! wall time itself; the caller supplies `now_ms` on every logic tick, so the
//! whole cycle is deterministic under test.

use crate::api::config::GlitchConfig;

/// Stage of the reveal/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing letters, one word after another.
    Appearing,
    /// All words fully shown, holding.
    Visible,
    /// Erasing letters, last word first.
    Disappearing,
    /// Nothing shown, holding before the next cycle.
    Hidden,
}

/// Timed state machine driving letter visibility.
///
/// `current_word` is the word being revealed or erased; `letter_index` is how
/// many of its characters are shown. Earlier words are always fully shown,
/// later words not at all, which makes [`visible_letters`](Self::visible_letters)
/// uniform across phases.
#[derive(Debug, Clone)]
pub struct PhaseClock {
    phase: Phase,
    current_word: usize,
    letter_index: usize,
    phase_started_at: f64,
}

impl PhaseClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            phase: Phase::Appearing,
            current_word: 0,
            letter_index: 0,
            phase_started_at: start_ms,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_word(&self) -> usize {
        self.current_word
    }

    pub fn letter_index(&self) -> usize {
        self.letter_index
    }

    /// Restart the cycle from an empty Appearing state.
    pub fn reset(&mut self, now_ms: f64) {
        self.phase = Phase::Appearing;
        self.current_word = 0;
        self.letter_index = 0;
        self.phase_started_at = now_ms;
    }

    /// Advance the machine; call at the logic-loop cadence, not per frame.
    ///
    /// Returns `true` exactly when a `hidden -> appearing` restart happened,
    /// so the caller can re-randomize word positions for the new cycle.
    pub fn advance(&mut self, now_ms: f64, words: &[String], config: &GlitchConfig) -> bool {
        if words.is_empty() {
            return false;
        }
        let elapsed = now_ms - self.phase_started_at;

        match self.phase {
            Phase::Appearing => {
                if elapsed < config.letter_speed_ms {
                    return false;
                }
                self.phase_started_at = now_ms;
                let len = word_len(words, self.current_word);
                if self.letter_index < len {
                    self.letter_index += 1;
                }
                if self.letter_index >= len {
                    if self.current_word + 1 < words.len() {
                        self.current_word += 1;
                        self.letter_index = 0;
                    } else {
                        self.phase = Phase::Visible;
                    }
                }
                false
            }
            Phase::Visible => {
                if elapsed < config.word_stay_ms {
                    return false;
                }
                // Erase from the end: park on the last word at full length.
                self.phase = Phase::Disappearing;
                self.current_word = words.len() - 1;
                self.letter_index = word_len(words, self.current_word);
                self.phase_started_at = now_ms;
                false
            }
            Phase::Disappearing => {
                if elapsed < config.letter_speed_ms {
                    return false;
                }
                self.phase_started_at = now_ms;
                if self.letter_index > 0 {
                    self.letter_index -= 1;
                }
                if self.letter_index == 0 {
                    if self.current_word > 0 {
                        self.current_word -= 1;
                        self.letter_index = word_len(words, self.current_word);
                    } else {
                        self.phase = Phase::Hidden;
                    }
                }
                false
            }
            Phase::Hidden => {
                if elapsed < config.word_stay_ms {
                    return false;
                }
                self.reset(now_ms);
                true
            }
        }
    }

    /// How many characters of `words[index]` are visible right now.
    ///
    /// Words before the cursor are fully shown, the cursor word shows its
    /// `letter_index` prefix, later words nothing. The phase invariants keep
    /// this correct in every state: Visible parks the cursor on the last word
    /// at full length, Hidden on word 0 at zero.
    pub fn visible_letters(&self, index: usize, words: &[String]) -> usize {
        let len = word_len(words, index);
        if index < self.current_word {
            len
        } else if index == self.current_word {
            self.letter_index.min(len)
        } else {
            0
        }
    }
}

fn word_len(words: &[String], index: usize) -> usize {
    words.get(index).map(|w| w.chars().count()).unwrap_or(0)
}
