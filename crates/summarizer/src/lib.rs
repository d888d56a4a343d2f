//! # Notebook Summarizer
//!
//! Extractive summarization for short note collections.
//!
//! Sentences are scored with a TF-IDF style weighting where the "documents" are the
//! sentences of a single input text. The highest scoring sentences are returned verbatim,
//! in the order they appear in the input.
//!
//! ## Architecture
//!
//! ```text
//! Text
//!     │
//!     ├──> Sentence Splitting (`.`, `!`, `?` followed by whitespace)
//!     │
//!     ├──> Tokenization (lowercase word runs per sentence)
//!     │
//!     ├──> Scoring
//!     │    ├─> Document frequency per token (distinct sentences)
//!     │    └─> Σ tf(t, i) · ln(N / (1 + df(t))) over every token occurrence
//!     │
//!     └──> Selection
//!          ├─> Rank by score desc, index asc
//!          ├─> Keep the first `max_sentences`
//!          └─> Restore reading order
//! ```
//!
//! ## Example
//!
//! ```rust
//! use notebook_summarizer::summarize;
//!
//! let text = "Python is a programming language. It is popular for scripting. \
//!             It also powers many data tools.";
//!
//! let summary = summarize(text, 2);
//! assert_eq!(summary.len(), 2);
//! assert_eq!(summary[0], "Python is a programming language.");
//! ```

mod config;
mod scorer;
mod sentence;
mod summarizer;
mod tokenizer;

pub use config::{SummarizerConfig, DEFAULT_MAX_SENTENCES};
pub use scorer::{score_corpus, score_sentence, DocumentFrequency};
pub use sentence::{split_sentences, Corpus, Sentence};
pub use summarizer::{summarize, ScoredSentence, Summarizer};
pub use tokenizer::{is_word_char, tokenize, Tokens};
