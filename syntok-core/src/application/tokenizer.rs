//! Token assembly: sub-token spans plus their preceding separator text

use crate::application::subtokenizer::SubTokens;
use crate::domain::classification::StandardClassifier;
use crate::domain::traits::CharacterClassifier;
use crate::domain::types::Token;
use core::iter::FusedIterator;

/// Expected bytes per token, used to size eager collections
pub const EXPECTED_BYTES_PER_TOKEN: usize = 5;

/// Iterator over the [`Token`]s of a text
///
/// Each token's `prefix` is the raw text between the previous token's value
/// and its own. If separator text remains after the last sub-token, one
/// final token with an empty value and `offset == text.len()` carries it.
#[derive(Debug, Clone)]
pub struct Tokens<'a, C = StandardClassifier> {
    text: &'a str,
    spans: SubTokens<'a, C>,
    last: usize,
}

impl<'a> Tokens<'a> {
    /// Create a token iterator using the standard classifier
    pub fn new(text: &'a str) -> Self {
        Self::from_subtokens(SubTokens::new(text))
    }
}

impl<'a, C: CharacterClassifier> Tokens<'a, C> {
    /// Create a token iterator using a custom classifier
    pub fn with_classifier(text: &'a str, classifier: C) -> Self {
        Self::from_subtokens(SubTokens::with_classifier(text, classifier))
    }

    /// Assemble tokens from an existing sub-token iterator
    pub fn from_subtokens(spans: SubTokens<'a, C>) -> Self {
        Self {
            text: spans.text(),
            spans,
            last: 0,
        }
    }

    /// The text being tokenized
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset up to which the text has been consumed
    pub fn consumed(&self) -> usize {
        self.last
    }
}

impl<'a, C: CharacterClassifier> Iterator for Tokens<'a, C> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let text = self.text;

        if let Some(span) = self.spans.next() {
            let token = Token::new(&text[self.last..span.start], span.start, span.slice(text));
            self.last = span.end;
            return Some(token);
        }

        if self.last < text.len() {
            let token = Token::new(&text[self.last..], text.len(), "");
            self.last = text.len();
            return Some(token);
        }

        None
    }
}

impl<C: CharacterClassifier> FusedIterator for Tokens<'_, C> {}

/// Generate all tokens of `text`
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens::new(text)
}

/// Collect all tokens of `text`
pub fn split(text: &str) -> Vec<Token<'_>> {
    let mut result = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_TOKEN);
    result.extend(tokenize(text));
    result
}
