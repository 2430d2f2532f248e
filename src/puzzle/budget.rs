//! Usage counters for guesses and hints.

use serde::{Deserialize, Serialize};

/// A capped counter. `used` never exceeds `limit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    used: u32,
    limit: u32,
}

impl Budget {
    /// A fresh budget with nothing used.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self { used: 0, limit }
    }

    #[must_use]
    pub const fn used(&self) -> u32 {
        self.used
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.limit - self.used
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    /// Use one unit. Returns false, leaving the count alone, when exhausted.
    pub(crate) fn consume(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.used += 1;
        true
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.used, self.limit)
    }
}
