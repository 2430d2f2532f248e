//! The puzzle engine: cipher state, guesses, hints, win/loss.
//!
//! ## Solved positions
//!
//! Position `i` is solved when `coded[i] == phrase[i]`. Guesses never touch
//! a solved position, even when it holds the guessed letter. Hints write
//! the true letter and so only ever add solved positions.
//!
//! ## Rejections
//!
//! Every operation validates before it writes. A rejected guess or hint
//! leaves coded text, budgets and history exactly as they were.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::budget::Budget;
use super::history::{Move, MoveRecord};
use crate::cipher::{encode, Derangement};
use crate::core::{PuzzleConfig, PuzzleError, RandomSource, Result};
use crate::phrases::PhraseSource;

/// Where the puzzle stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    /// Coded text equals the phrase.
    Won,
    /// Guesses are exhausted without a win.
    Lost,
}

/// One puzzle: a secret phrase, its coded form, and the player's budgets.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    phrase: Vec<char>,
    derangement: Derangement,
    original_coded: Vec<char>,
    coded: Vec<char>,
    guesses: Budget,
    hints: Budget,
    history: Vector<MoveRecord>,
}

impl PuzzleEngine {
    /// Start a puzzle: pick a phrase, derange the alphabet, encode.
    pub fn new(
        source: &mut dyn PhraseSource,
        rng: &mut dyn RandomSource,
        config: PuzzleConfig,
    ) -> Result<Self> {
        let phrase = source.select_phrase(rng)?;
        let derangement = Derangement::generate(rng, config.max_derangement_attempts)?;
        Self::with_derangement(&phrase, derangement, config)
    }

    /// Start a puzzle from a known phrase and substitution.
    ///
    /// The phrase is upper-cased. A phrase with nothing but whitespace is
    /// rejected with `EmptyPhrase`.
    pub fn with_derangement(
        phrase: &str,
        derangement: Derangement,
        config: PuzzleConfig,
    ) -> Result<Self> {
        if phrase.trim().is_empty() {
            return Err(PuzzleError::EmptyPhrase);
        }

        let phrase: Vec<char> = phrase.chars().map(|c| c.to_ascii_uppercase()).collect();
        let coded = encode(&phrase, &derangement);
        info!(len = phrase.len(), "puzzle started");

        Ok(Self {
            original_coded: coded.clone(),
            coded,
            phrase,
            derangement,
            guesses: Budget::new(config.guess_limit),
            hints: Budget::new(config.hint_limit),
            history: Vector::new(),
        })
    }

    // === Moves ===

    /// Replace `letter` with `substitute` at every unsolved position that
    /// holds it. Returns whether the puzzle is now won.
    ///
    /// Checks run in order: guess budget, letter format, letter presence.
    /// An accepted guess costs one guess even when nothing changes.
    pub fn apply_guess(&mut self, letter: char, substitute: char) -> Result<bool> {
        if self.guesses.is_exhausted() {
            return Err(PuzzleError::GuessBudgetExhausted {
                limit: self.guesses.limit(),
            });
        }
        for c in [letter, substitute] {
            if !c.is_ascii_uppercase() {
                return Err(PuzzleError::invalid_guess(c));
            }
        }
        if !self.coded.contains(&letter) {
            return Err(PuzzleError::LetterNotPresent { letter });
        }

        let mut replaced = 0;
        for (coded, &plain) in self.coded.iter_mut().zip(&self.phrase) {
            if *coded == letter && *coded != plain {
                *coded = substitute;
                replaced += 1;
            }
        }
        self.guesses.consume();
        self.record(Move::Guess {
            letter,
            substitute,
            replaced,
        });
        debug!(%letter, %substitute, replaced, guesses = %self.guesses, "guess applied");

        let won = self.is_won();
        if won {
            info!(guesses = %self.guesses, hints = %self.hints, "puzzle solved");
        }
        Ok(won)
    }

    /// Reveal every occurrence of the leftmost unsolved letter.
    ///
    /// Returns the revealed letter, or `None` without spending a hint when
    /// nothing is left to reveal.
    pub fn request_hint(&mut self) -> Result<Option<char>> {
        if self.hints.is_exhausted() {
            return Err(PuzzleError::HintBudgetExhausted {
                limit: self.hints.limit(),
            });
        }

        let Some(target) = self.first_unsolved().map(|i| self.phrase[i]) else {
            return Ok(None);
        };

        let mut revealed = 0;
        for (coded, &plain) in self.coded.iter_mut().zip(&self.phrase) {
            if plain == target {
                if *coded != plain {
                    revealed += 1;
                }
                *coded = plain;
            }
        }
        self.hints.consume();
        self.record(Move::Hint {
            letter: target,
            revealed,
        });
        debug!(letter = %target, revealed, hints = %self.hints, "hint revealed");

        Ok(Some(target))
    }

    fn record(&mut self, kind: Move) {
        let sequence = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord::new(sequence, kind));
    }

    // === Status ===

    /// Coded text equals the phrase, spaces included.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.coded == self.phrase
    }

    /// Guesses are exhausted and the puzzle is not won.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.guesses.is_exhausted() && !self.is_won()
    }

    /// Win is checked before loss, so a winning last guess is a win.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_won() {
            Outcome::Won
        } else if self.is_lost() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Whether position `i` already shows the true character.
    #[must_use]
    pub fn is_solved_at(&self, i: usize) -> bool {
        matches!((self.coded.get(i), self.phrase.get(i)), (Some(c), Some(p)) if c == p)
    }

    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.coded
            .iter()
            .zip(&self.phrase)
            .filter(|(c, p)| c == p)
            .count()
    }

    fn first_unsolved(&self) -> Option<usize> {
        (0..self.phrase.len()).find(|&i| !self.is_solved_at(i))
    }

    // === Accessors ===

    /// The secret phrase.
    #[must_use]
    pub fn phrase(&self) -> &[char] {
        &self.phrase
    }

    /// The current, partially decoded text.
    #[must_use]
    pub fn coded(&self) -> &[char] {
        &self.coded
    }

    #[must_use]
    pub fn phrase_text(&self) -> String {
        self.phrase.iter().collect()
    }

    #[must_use]
    pub fn coded_text(&self) -> String {
        self.coded.iter().collect()
    }

    /// The coded text as first dealt, before any move.
    #[must_use]
    pub fn original_coded_text(&self) -> String {
        self.original_coded.iter().collect()
    }

    #[must_use]
    pub fn derangement(&self) -> &Derangement {
        &self.derangement
    }

    #[must_use]
    pub fn guesses(&self) -> Budget {
        self.guesses
    }

    #[must_use]
    pub fn hints(&self) -> Budget {
        self.hints
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Capture the full puzzle state.
    #[must_use]
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            phrase: self.phrase_text(),
            original_coded: self.original_coded_text(),
            coded: self.coded_text(),
            derangement: self.derangement,
            guesses: self.guesses,
            hints: self.hints,
            outcome: self.outcome(),
            history: self.history.clone(),
        }
    }
}

impl std::fmt::Display for PuzzleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Welcome to CodeWords!\nCoded word: {}", self.coded_text())
    }
}

/// Serializable puzzle state, shown to the player when a round ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    pub phrase: String,
    pub original_coded: String,
    pub coded: String,
    pub derangement: Derangement,
    pub guesses: Budget,
    pub hints: Budget,
    pub outcome: Outcome,
    pub history: Vector<MoveRecord>,
}

impl std::fmt::Display for PuzzleSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CodeWords(phrase: {}, coded: {}, guesses: {}, hints: {})",
            self.phrase, self.original_coded, self.guesses, self.hints
        )
    }
}
