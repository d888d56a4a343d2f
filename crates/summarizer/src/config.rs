use serde::{Deserialize, Serialize};

/// Summary length used when the caller does not pick one.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Configuration for [`crate::Summarizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Upper bound on sentences returned (0 = always empty)
    pub max_sentences: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}

impl SummarizerConfig {
    #[must_use]
    pub const fn with_max_sentences(max_sentences: usize) -> Self {
        Self { max_sentences }
    }

    /// Build from a signed count; anything below 1 selects nothing.
    #[must_use]
    pub fn from_signed(max_sentences: i64) -> Self {
        Self::with_max_sentences(usize::try_from(max_sentences).unwrap_or(0))
    }
}
