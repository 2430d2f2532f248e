//! Move history: what the player did, in order.

use serde::{Deserialize, Serialize};

/// An accepted player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Replace a coded letter everywhere it is unsolved.
    Guess {
        letter: char,
        substitute: char,
        /// Unsolved positions that held `letter` and were rewritten.
        replaced: usize,
    },
    /// Reveal every occurrence of the leftmost unsolved letter.
    Hint {
        letter: char,
        /// Positions that were unsolved before the reveal.
        revealed: usize,
    },
}

/// A move with its position in the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based index over all accepted moves.
    pub sequence: u32,
    pub kind: Move,
}

impl MoveRecord {
    #[must_use]
    pub fn new(sequence: u32, kind: Move) -> Self {
        Self { sequence, kind }
    }

    #[must_use]
    pub fn is_hint(&self) -> bool {
        matches!(self.kind, Move::Hint { .. })
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            Move::Guess {
                letter, substitute, ..
            } => write!(f, "#{} {letter}->{substitute}", self.sequence),
            Move::Hint { letter, .. } => write!(f, "#{} hint {letter}", self.sequence),
        }
    }
}
