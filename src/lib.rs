//! # codewords
//!
//! A single-player decoding puzzle. A secret phrase is enciphered with a
//! derangement of the alphabet (no letter maps to itself) and the player
//! recovers it by proposing letter substitutions, with a few hints to spend.
//!
//! ## Rules
//!
//! - 10 guesses per puzzle; a guess replaces one coded letter at every
//!   position not already solved
//! - 3 hints; a hint reveals every occurrence of the leftmost unsolved letter
//! - The puzzle is won when the coded text equals the phrase
//!
//! ## Modules
//!
//! - `core`: Alphabet, configuration, errors, injectable randomness
//! - `cipher`: Derangement generation and phrase encoding
//! - `puzzle`: The puzzle engine, budgets and move history
//! - `phrases`: Phrase sources
//! - `display`: Rendering coded text with solved letters highlighted
//! - `session`: The interactive prompt loop
//!
//! ## Example
//!
//! ```
//! use codewords::{PhraseList, PuzzleConfig, PuzzleEngine, PuzzleRng};
//!
//! let mut phrases = PhraseList::new(["hello world"]);
//! let mut rng = PuzzleRng::new(7);
//! let mut engine = PuzzleEngine::new(&mut phrases, &mut rng, PuzzleConfig::default()).unwrap();
//!
//! assert_eq!(engine.phrase_text(), "HELLO WORLD");
//! assert_eq!(engine.request_hint().unwrap(), Some('H'));
//! assert!(engine.is_solved_at(0));
//! assert!(!engine.is_won());
//! ```

pub mod cipher;
pub mod core;
pub mod display;
pub mod phrases;
pub mod puzzle;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    parse_letter, PuzzleConfig, PuzzleError, PuzzleRng, PuzzleRngState, RandomSource, Result,
};

pub use crate::cipher::{encode, Derangement};

pub use crate::puzzle::{Budget, Move, MoveRecord, Outcome, PuzzleEngine, PuzzleSnapshot};

pub use crate::phrases::{PhraseList, PhraseSource};

pub use crate::display::{render, ColorMode};

pub use crate::session::Session;
