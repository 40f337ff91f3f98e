//! Sampled debounce filter for one button.

use crate::board::DEBOUNCE_THRESHOLD;
use crate::pin::Level;

/// Debounce state of one button.
///
/// Fed one raw sample per poll. A sample equal to the stable level resets
/// the run of disagreeing samples. A disagreeing sample extends the run
/// until it has reached `threshold`; the next disagreeing sample after that
/// commits, so with a threshold of 2 the third consecutive disagreeing
/// sample flips the state.
///
/// Levels are electrical: a button reads `High` while released and `Low`
/// while pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debounce {
    stable: Level,
    previous: Level,
    run_length: u8,
    threshold: u8,
}

impl Debounce {
    pub const fn new(initial: Level) -> Self {
        Self::with_threshold(initial, DEBOUNCE_THRESHOLD)
    }

    pub const fn with_threshold(initial: Level, threshold: u8) -> Self {
        Self {
            stable: initial,
            previous: initial,
            run_length: 0,
            threshold,
        }
    }

    /// Feed one raw sample. Returns `true` when the sample committed a new
    /// stable level.
    pub fn update(&mut self, raw: Level) -> bool {
        if raw == self.stable {
            self.run_length = 0;
            return false;
        }

        if self.run_length < self.threshold {
            self.run_length += 1;
            return false;
        }

        self.previous = self.stable;
        self.stable = raw;
        self.run_length = 0;
        trace!("debounce: {} -> {}", self.previous, self.stable);
        true
    }

    pub fn stable(&self) -> Level {
        self.stable
    }

    /// Stable level before the last commit.
    pub fn previous(&self) -> Level {
        self.previous
    }

    pub fn run_length(&self) -> u8 {
        self.run_length
    }

    /// Filtered press state.
    pub fn is_pressed(&self) -> bool {
        self.stable == Level::Low
    }

    /// Released-to-pressed transition.
    ///
    /// Holds from the committing sample until the next commit, i.e. for as
    /// long as the button stays pressed.
    pub fn falling_edge(&self) -> bool {
        self.previous == Level::High && self.stable == Level::Low
    }
}
