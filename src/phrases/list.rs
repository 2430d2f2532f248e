//! In-memory phrase corpus.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::PhraseSource;
use crate::core::{PuzzleError, RandomSource, Result};

/// A list of phrases, selected from uniformly.
///
/// Phrases are trimmed and upper-cased on the way in; blank lines are
/// dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    /// Build a corpus from any iterator of phrases.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_uppercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    /// Read one phrase per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self::new(lines))
    }

    /// Read one phrase per line from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let list = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), count = list.len(), "phrases loaded");
        Ok(list)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl PhraseSource for PhraseList {
    fn select_phrase(&mut self, rng: &mut dyn RandomSource) -> Result<String> {
        if self.phrases.is_empty() {
            return Err(PuzzleError::EmptyCorpus);
        }
        let idx = rng.choose_index(self.phrases.len());
        Ok(self.phrases[idx].clone())
    }
}
