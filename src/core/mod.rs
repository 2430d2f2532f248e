//! Core types: alphabet, configuration, errors, randomness.
//!
//! These are shared by the cipher, the puzzle engine and the phrase source.

pub mod alphabet;
pub mod config;
pub mod error;
pub mod rng;

pub use alphabet::{letter_index, parse_letter, ALPHABET, ALPHABET_LEN};
pub use config::{PuzzleConfig, GUESS_LIMIT, HINT_LIMIT, MAX_DERANGEMENT_ATTEMPTS};
pub use error::{PuzzleError, Result};
pub use rng::{PuzzleRng, PuzzleRngState, RandomSource};
