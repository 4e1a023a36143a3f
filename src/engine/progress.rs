//! Move counting and win detection.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Number of completed pair attempts.
///
/// Bumped once per resolved pair, match or not. Revealing the first card of
/// a pair never counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveCounter(u32);

impl MoveCounter {
    /// A counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Record one resolved pair.
    pub fn record_attempt(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Current count.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0
    }
}

/// Fires the win signal at most once per game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinDetector {
    signaled: bool,
}

impl WinDetector {
    /// A detector for a fresh game.
    #[must_use]
    pub const fn new() -> Self {
        Self { signaled: false }
    }

    /// Check the state right after a pair was committed.
    ///
    /// Returns `true` exactly once: the first time every card is matched.
    pub fn observe(&mut self, state: &GameState) -> bool {
        if self.signaled || !state.all_matched() {
            return false;
        }
        self.signaled = true;
        true
    }
}
