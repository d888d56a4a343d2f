/// Returns true for characters that can appear inside a token.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lazy iterator over the lowercase word tokens of a string.
///
/// A token is a maximal run of [`is_word_char`] characters. Everything else is a
/// delimiter and never produces a token. The iterator is `Clone`, so the same text can be
/// walked more than once without re-scanning from the caller's side.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let start = rest.find(is_word_char)?;
        let tail = &rest[start..];
        let end = tail
            .find(|c: char| !is_word_char(c))
            .unwrap_or(tail.len());
        let (word, rest) = tail.split_at(end);
        self.rest = rest;
        Some(word.to_lowercase())
    }
}

/// Tokenize `text` into lowercase words.
#[must_use]
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens::new(text)
}
