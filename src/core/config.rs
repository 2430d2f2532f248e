//! Puzzle configuration.
//!
//! The game is played with fixed budgets. `PuzzleConfig::default()` carries
//! them; the builder methods exist so tests and embedders can exercise
//! budget edges without playing ten full guesses.

use serde::{Deserialize, Serialize};

/// Guesses allowed per puzzle.
pub const GUESS_LIMIT: u32 = 10;

/// Hints allowed per puzzle.
pub const HINT_LIMIT: u32 = 3;

/// Shuffles tried before derangement generation gives up.
pub const MAX_DERANGEMENT_ATTEMPTS: u32 = 100;

/// Complete puzzle configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Total substitution attempts allowed.
    pub guess_limit: u32,

    /// Total hints allowed.
    pub hint_limit: u32,

    /// Rejection-sampling bound for derangement generation.
    pub max_derangement_attempts: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            guess_limit: GUESS_LIMIT,
            hint_limit: HINT_LIMIT,
            max_derangement_attempts: MAX_DERANGEMENT_ATTEMPTS,
        }
    }
}

impl PuzzleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the guess budget.
    #[must_use]
    pub fn with_guess_limit(mut self, limit: u32) -> Self {
        self.guess_limit = limit;
        self
    }

    /// Set the hint budget.
    #[must_use]
    pub fn with_hint_limit(mut self, limit: u32) -> Self {
        self.hint_limit = limit;
        self
    }

    /// Set the derangement attempt cap.
    #[must_use]
    pub fn with_max_derangement_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Must allow at least 1 derangement attempt");
        self.max_derangement_attempts = attempts;
        self
    }
}
