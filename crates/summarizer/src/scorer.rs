use crate::sentence::Corpus;
use std::collections::{HashMap, HashSet};

/// Number of distinct sentences each token appears in, for one corpus.
#[derive(Debug, Clone, Default)]
pub struct DocumentFrequency {
    counts: HashMap<String, usize>,
    sentences: usize,
}

impl DocumentFrequency {
    pub fn build(corpus: &Corpus<'_>) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for sentence in corpus.sentences() {
            let unique: HashSet<&str> = sentence.tokens.iter().map(String::as_str).collect();
            for token in unique {
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }
        Self {
            counts,
            sentences: corpus.len(),
        }
    }

    #[must_use]
    pub fn df(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// `ln(N / (1 + df))`. Negative for tokens present in every sentence.
    #[must_use]
    pub fn idf(&self, token: &str) -> f64 {
        let n = self.sentences as f64;
        let df = self.df(token) as f64;
        (n / (1.0 + df)).ln()
    }

    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.sentences
    }

    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }
}

/// Score one tokenized sentence against a document frequency table.
///
/// Every occurrence contributes `tf(t) * idf(t)`, so a token repeated `k` times adds its
/// weight `k` times.
#[must_use]
pub fn score_sentence(tokens: &[String], df: &DocumentFrequency) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let mut term_freq: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *term_freq.entry(token.as_str()).or_insert(0) += 1;
    }

    let len = tokens.len() as f64;
    tokens
        .iter()
        .map(|token| {
            let tf = term_freq[token.as_str()] as f64 / len;
            tf * df.idf(token)
        })
        .sum()
}

/// Score every sentence of `corpus`, indexed like `corpus.sentences()`.
#[must_use]
pub fn score_corpus(corpus: &Corpus<'_>) -> Vec<f64> {
    let df = DocumentFrequency::build(corpus);
    log::debug!(
        "Scoring {} sentences over {} distinct tokens",
        df.sentence_count(),
        df.vocabulary_size()
    );
    corpus
        .sentences()
        .iter()
        .map(|sentence| score_sentence(&sentence.tokens, &df))
        .collect()
}
