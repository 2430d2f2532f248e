//! Phrase encoding.

use super::Derangement;

/// Encode a phrase through a derangement.
///
/// Letters A-Z are substituted; spaces and any other characters pass
/// through unchanged, so the output always has the input's length.
#[must_use]
pub fn encode(phrase: &[char], derangement: &Derangement) -> Vec<char> {
    phrase
        .iter()
        .map(|&c| derangement.substitute(c).unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift_by_one() -> Derangement {
        Derangement::from_permutation("BCDEFGHIJKLMNOPQRSTUVWXYZA").unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_encode_letters() {
        let coded: String = encode(&chars("HAL"), &shift_by_one()).into_iter().collect();
        assert_eq!(coded, "IBM");
    }

    #[test]
    fn test_encode_preserves_spaces_and_punctuation() {
        let coded: String = encode(&chars("ZZ TOP'S"), &shift_by_one())
            .into_iter()
            .collect();
        assert_eq!(coded, "AA UPQ'T");
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode(&[], &shift_by_one()).is_empty());
    }
}
