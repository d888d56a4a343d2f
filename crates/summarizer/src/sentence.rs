use crate::tokenizer::tokenize;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, fragment: &'a str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

/// Split `text` into trimmed, non-empty sentences.
///
/// A boundary sits right after `.`, `!` or `?` when the next character is whitespace.
/// The whitespace run between two sentences belongs to neither of them.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }
        let Some(&(boundary, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }

        push_trimmed(&mut sentences, &text[start..boundary]);

        let mut resume = text.len();
        while let Some(&(idx, c)) = chars.peek() {
            if !c.is_whitespace() {
                resume = idx;
                break;
            }
            chars.next();
        }
        start = resume;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

/// One sentence of a [`Corpus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Position in the corpus (dense, starting at 0)
    pub index: usize,
    /// Trimmed sentence text as it appears in the input
    pub text: &'a str,
    /// Lowercase tokens, duplicates kept
    pub tokens: Vec<String>,
}

/// The sentences of a single summarization input.
#[derive(Debug, Clone, Default)]
pub struct Corpus<'a> {
    sentences: Vec<Sentence<'a>>,
}

impl<'a> Corpus<'a> {
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        let sentences = split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Sentence {
                index,
                text,
                tokens: tokenize(text).collect(),
            })
            .collect();
        Self { sentences }
    }

    #[must_use]
    pub fn sentences(&self) -> &[Sentence<'a>] {
        &self.sentences
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
