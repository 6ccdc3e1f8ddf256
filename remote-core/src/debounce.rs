//! Debounce state machine: raw wake events to stable button masks

use crate::types::{ButtonMask, DebounceState};

/// Verdict on one input sample.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Judgement {
    /// Two consecutive samples agreed; here is the debounced mask.
    Stable(ButtonMask),
    /// Lines still in flux; wait one debounce interval and resample.
    Bouncing,
}

/// Sample-equality debouncer.
///
/// Mechanical switches produce bursts of spurious transitions. Requiring
/// two samples one debounce interval apart to agree collapses a burst
/// into one logical event without a fixed retry count. There is no upper
/// bound on how long the machine stays in `Settling` while the lines
/// keep changing.
pub struct Debouncer {
    state: DebounceState,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            state: DebounceState::Idle,
        }
    }

    pub const fn state(&self) -> DebounceState {
        self.state
    }

    /// Record the first post-wake sample as the comparison baseline.
    ///
    /// The caller has already waited out one debounce interval since the
    /// wake, so the very next [`observe`](Debouncer::observe) of the same
    /// value stabilizes immediately.
    pub fn arm(&mut self, sample: u8) {
        self.state = DebounceState::Settling { last_raw: sample };
    }

    /// Judge a fresh sample against the baseline.
    pub fn observe(&mut self, sample: u8) -> Judgement {
        match self.state {
            DebounceState::Idle => {
                self.state = DebounceState::Settling { last_raw: sample };
                Judgement::Bouncing
            }
            DebounceState::Settling { last_raw } | DebounceState::Stable { last_raw } => {
                if last_raw == sample {
                    self.state = DebounceState::Stable { last_raw: sample };
                    Judgement::Stable(ButtonMask::from_raw(sample))
                } else {
                    self.state = DebounceState::Settling { last_raw: sample };
                    Judgement::Bouncing
                }
            }
        }
    }

    /// Session teardown once the stable mask is empty.
    pub fn reset(&mut self) {
        self.state = DebounceState::Idle;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
