//! Alphabet derangements: substitutions with no letter mapped to itself.
//!
//! Generation is rejection sampling: shuffle a copy of the alphabet and keep
//! the first shuffle with no fixed point. About 1 in e shuffles qualifies,
//! so the attempt cap is a safety bound rather than a realistic failure.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{letter_index, PuzzleError, RandomSource, Result, ALPHABET, ALPHABET_LEN};

/// A bijection over A-Z with no fixed points.
///
/// `ALPHABET[i]` encodes to `substitutes[i]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derangement {
    substitutes: [char; ALPHABET_LEN],
}

impl Derangement {
    /// Generate a random derangement.
    ///
    /// Fails with `DerangementFailure` if `max_attempts` shuffles all leave
    /// some letter in place.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, max_attempts: u32) -> Result<Self> {
        for attempt in 1..=max_attempts {
            let mut shuffled = ALPHABET;
            rng.shuffle(&mut shuffled);

            if !has_fixed_point(&shuffled) {
                debug!(attempt, "derangement found");
                return Ok(Self {
                    substitutes: shuffled,
                });
            }
        }

        warn!(attempts = max_attempts, "no derangement within attempt cap");
        Err(PuzzleError::DerangementFailure {
            attempts: max_attempts,
        })
    }

    /// Build a derangement from an explicit substitution alphabet.
    ///
    /// `permuted[i]` is the substitute for the i-th letter. The input must be
    /// a permutation of A-Z with no letter in its own position.
    ///
    /// ```
    /// use codewords::cipher::Derangement;
    ///
    /// let d = Derangement::from_permutation("BCDEFGHIJKLMNOPQRSTUVWXYZA").unwrap();
    /// assert_eq!(d.substitute('A'), Some('B'));
    /// assert!(Derangement::from_permutation("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn from_permutation(permuted: &str) -> Result<Self> {
        let letters: Vec<char> = permuted.chars().collect();
        if letters.len() != ALPHABET_LEN {
            return Err(PuzzleError::invalid_permutation(format!(
                "expected {ALPHABET_LEN} letters, got {}",
                letters.len()
            )));
        }

        let mut seen = [false; ALPHABET_LEN];
        let mut substitutes = ALPHABET;
        for (i, &c) in letters.iter().enumerate() {
            let idx = letter_index(c).ok_or_else(|| {
                PuzzleError::invalid_permutation(format!("'{c}' is not an uppercase letter"))
            })?;
            if seen[idx] {
                return Err(PuzzleError::invalid_permutation(format!(
                    "'{c}' appears more than once"
                )));
            }
            if idx == i {
                return Err(PuzzleError::invalid_permutation(format!(
                    "'{c}' maps to itself"
                )));
            }
            seen[idx] = true;
            substitutes[i] = c;
        }

        Ok(Self { substitutes })
    }

    /// Substitute for a plaintext letter. `None` for anything outside A-Z.
    #[must_use]
    pub fn substitute(&self, letter: char) -> Option<char> {
        letter_index(letter).map(|i| self.substitutes[i])
    }

    /// The substitution alphabet, in plaintext order.
    #[must_use]
    pub fn substitutes(&self) -> &[char; ALPHABET_LEN] {
        &self.substitutes
    }

    /// Iterate `(plain, coded)` pairs in alphabet order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        ALPHABET.iter().copied().zip(self.substitutes.iter().copied())
    }
}

impl std::fmt::Display for Derangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.substitutes.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

fn has_fixed_point(permuted: &[char; ALPHABET_LEN]) -> bool {
    ALPHABET.iter().zip(permuted).any(|(a, b)| a == b)
}
