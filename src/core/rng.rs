//! Injectable randomness for derangement shuffles and phrase selection.
//!
//! ## Key Features
//!
//! - **Injectable**: The engine only sees the `RandomSource` trait, so tests
//!   can script exact shuffles and phrase picks
//! - **Deterministic**: Same seed produces the same derangement and phrase
//! - **Serializable**: O(1) state capture and restore for replaying a session
//!
//! ## Usage
//!
//! ```
//! use codewords::core::{PuzzleRng, RandomSource};
//!
//! let mut rng1 = PuzzleRng::new(42);
//! let mut rng2 = PuzzleRng::new(42);
//!
//! let mut a: Vec<char> = ('A'..='Z').collect();
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness consumed by the puzzle.
///
/// Implementations must shuffle uniformly and pick indices uniformly for
/// the game to be fair; scripted implementations in tests need not.
pub trait RandomSource {
    /// Shuffle the letters in place.
    fn shuffle(&mut self, letters: &mut [char]);

    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Seeded ChaCha8 random source.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed is still recorded so the session can be reported and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> PuzzleRngState {
        PuzzleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &PuzzleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for PuzzleRng {
    fn shuffle(&mut self, letters: &mut [char]) {
        letters.shuffle(&mut self.inner);
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Vec<char> {
        ('A'..='Z').collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = PuzzleRng::new(42);
        let mut rng2 = PuzzleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.choose_index(1000), rng2.choose_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = PuzzleRng::new(1);
        let mut rng2 = PuzzleRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.choose_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.choose_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = PuzzleRng::new(7);
        let mut letters = alphabet();

        rng.shuffle(&mut letters);

        // Same letters, different order (very likely)
        assert_ne!(letters, alphabet());
        letters.sort_unstable();
        assert_eq!(letters, alphabet());
    }

    #[test]
    fn test_choose_index_in_range() {
        let mut rng = PuzzleRng::new(3);
        for _ in 0..200 {
            assert!(rng.choose_index(5) < 5);
        }
        assert_eq!(rng.choose_index(1), 0);
    }

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(PuzzleRng::new(99).seed(), 99);

        let rng = PuzzleRng::from_entropy();
        let replay = PuzzleRng::new(rng.seed());
        assert_eq!(rng.state(), replay.state());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = PuzzleRng::new(42);
        let mut scratch = alphabet();
        rng.shuffle(&mut scratch);

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.choose_index(1000)).collect();

        let mut restored = PuzzleRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.choose_index(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = PuzzleRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: PuzzleRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
