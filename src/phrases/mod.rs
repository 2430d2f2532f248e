//! Phrase sources.
//!
//! The engine asks a `PhraseSource` for one phrase per puzzle. `PhraseList`
//! is the standard in-memory corpus, loadable from a one-phrase-per-line
//! text file.

pub mod list;

pub use list::PhraseList;

use crate::core::{RandomSource, Result};

/// Supplies the secret phrase for a new puzzle.
pub trait PhraseSource {
    /// Pick one uppercase phrase of letters and spaces.
    fn select_phrase(&mut self, rng: &mut dyn RandomSource) -> Result<String>;
}
