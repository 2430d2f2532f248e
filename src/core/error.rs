//! Error types for puzzle construction and play.

use thiserror::Error;

/// Errors raised by the puzzle engine and its collaborators.
///
/// Every rejected operation leaves engine state untouched.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// No shuffle without a fixed point was found within the attempt cap.
    #[error("failed to generate a deranged alphabet after {attempts} attempts")]
    DerangementFailure {
        /// Shuffles tried
        attempts: u32,
    },

    /// A hand-supplied permutation is not a derangement of A-Z.
    #[error("invalid permutation: {reason}")]
    InvalidPermutation {
        /// What is wrong with it
        reason: String,
    },

    /// Guess input was not a single letter A-Z.
    #[error("'{input}' is not a single letter from A-Z")]
    InvalidGuessFormat {
        /// The rejected input
        input: String,
    },

    /// The guessed letter does not appear in the coded text.
    #[error("letter '{letter}' not found in the coded word")]
    LetterNotPresent {
        /// The guessed letter
        letter: char,
    },

    /// All guesses have been used.
    #[error("all {limit} guesses have been used")]
    GuessBudgetExhausted {
        /// Guess budget
        limit: u32,
    },

    /// All hints have been used.
    #[error("all {limit} hints have been used")]
    HintBudgetExhausted {
        /// Hint budget
        limit: u32,
    },

    /// The selected phrase has no characters to decode.
    #[error("phrase is empty")]
    EmptyPhrase,

    /// The phrase corpus has no usable lines.
    #[error("phrase corpus is empty")]
    EmptyCorpus,

    /// Reading the phrase corpus failed.
    #[error("failed to read phrases: {0}")]
    Io(#[from] std::io::Error),
}

impl PuzzleError {
    /// Create an InvalidGuessFormat error.
    pub fn invalid_guess(input: impl Into<String>) -> Self {
        Self::InvalidGuessFormat {
            input: input.into(),
        }
    }

    /// Create an InvalidPermutation error.
    pub fn invalid_permutation(reason: impl Into<String>) -> Self {
        Self::InvalidPermutation {
            reason: reason.into(),
        }
    }

    /// Whether the driving loop should report this and re-prompt.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuessFormat { .. }
                | Self::LetterNotPresent { .. }
                | Self::GuessBudgetExhausted { .. }
                | Self::HintBudgetExhausted { .. }
        )
    }
}

/// Result alias for puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            PuzzleError::LetterNotPresent { letter: 'Q' }.to_string(),
            "letter 'Q' not found in the coded word"
        );
        assert_eq!(
            PuzzleError::invalid_guess("AB").to_string(),
            "'AB' is not a single letter from A-Z"
        );
        assert_eq!(
            PuzzleError::DerangementFailure { attempts: 100 }.to_string(),
            "failed to generate a deranged alphabet after 100 attempts"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(PuzzleError::invalid_guess("1").is_recoverable());
        assert!(PuzzleError::LetterNotPresent { letter: 'A' }.is_recoverable());
        assert!(PuzzleError::GuessBudgetExhausted { limit: 10 }.is_recoverable());
        assert!(PuzzleError::HintBudgetExhausted { limit: 3 }.is_recoverable());

        assert!(!PuzzleError::DerangementFailure { attempts: 100 }.is_recoverable());
        assert!(!PuzzleError::EmptyCorpus.is_recoverable());
        assert!(!PuzzleError::EmptyPhrase.is_recoverable());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PuzzleError = io.into();
        assert!(matches!(err, PuzzleError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
