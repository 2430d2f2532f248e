//! The 26-letter alphabet and single-letter input parsing.

use super::error::{PuzzleError, Result};

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The plaintext alphabet, A through Z.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Position of an uppercase letter in the alphabet.
#[must_use]
pub fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

/// Parse player input into one uppercase letter.
///
/// Surrounding whitespace is ignored and lowercase is accepted, matching how
/// players type at the prompt.
///
/// ```
/// use codewords::core::parse_letter;
///
/// assert_eq!(parse_letter(" q ").unwrap(), 'Q');
/// assert!(parse_letter("QR").is_err());
/// ```
pub fn parse_letter(input: &str) -> Result<char> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(PuzzleError::invalid_guess(trimmed)),
    }
}
