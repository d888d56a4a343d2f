use crate::config::SummarizerConfig;
use crate::scorer::score_corpus;
use crate::sentence::Corpus;
use serde::Serialize;

/// A sentence together with its rank inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub index: usize,
    pub score: f64,
    pub text: String,
}

/// Extractive summarizer over a single text.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    #[must_use]
    pub const fn new(config: SummarizerConfig) -> Self {
        Self { config }
    }

    /// Every sentence of `text`, best first.
    ///
    /// Sorted by score descending; equal scores keep input order (lower index first).
    #[must_use]
    pub fn rank(&self, text: &str) -> Vec<ScoredSentence> {
        let corpus = Corpus::from_text(text);
        if corpus.is_empty() {
            return Vec::new();
        }

        let scores = score_corpus(&corpus);
        let mut order: Vec<usize> = (0..corpus.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then_with(|| a.cmp(&b)));

        let sentences = corpus.sentences();
        order
            .into_iter()
            .map(|idx| ScoredSentence {
                index: idx,
                score: scores[idx],
                text: sentences[idx].text.to_string(),
            })
            .collect()
    }

    /// The top `max_sentences` sentences of `text`, in reading order.
    #[must_use]
    pub fn summarize(&self, text: &str) -> Vec<String> {
        if self.config.max_sentences == 0 {
            return Vec::new();
        }

        let mut selected = self.rank(text);
        let total = selected.len();
        selected.truncate(self.config.max_sentences);
        selected.sort_by_key(|sentence| sentence.index);

        log::debug!(
            "Summarized {} sentences down to {} (max {})",
            total,
            selected.len(),
            self.config.max_sentences
        );

        selected.into_iter().map(|sentence| sentence.text).collect()
    }
}

/// Summarize `text` into at most `max_sentences` sentences.
///
/// Non-positive `max_sentences` and sentence-less text both give an empty result.
#[must_use]
pub fn summarize(text: &str, max_sentences: i64) -> Vec<String> {
    Summarizer::new(SummarizerConfig::from_signed(max_sentences)).summarize(text)
}
