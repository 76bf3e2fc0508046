//! Core value types produced by the tokenization pipeline

use core::fmt;
use core::ops::Range;

/// A sub-token: a half-open `[start, end)` byte range into the original text
///
/// Spans produced by the sub-tokenizer are never empty, never overlap, and
/// always fall on UTF-8 character boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The span as a `Range<usize>`
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Borrow the text covered by this span
    ///
    /// The span must have been produced for `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token: the raw separator text preceding it plus its value
///
/// Both `prefix` and `value` borrow from the tokenized text. Concatenating
/// `prefix` and `value` of every token, in order, reproduces the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    /// Separator text between the previous token's value and this one
    pub prefix: &'a str,
    /// Absolute byte offset of `value`
    pub offset: usize,
    /// The token text itself; empty only for a trailing separator token
    pub value: &'a str,
}

impl<'a> Token<'a> {
    /// Create a new token
    pub fn new(prefix: &'a str, offset: usize, value: &'a str) -> Self {
        Self {
            prefix,
            offset,
            value,
        }
    }

    /// Byte offset one past the end of `value`
    pub fn end(&self) -> usize {
        self.offset + self.value.len()
    }

    /// Byte offset where `prefix` starts
    pub fn prefix_offset(&self) -> usize {
        self.offset - self.prefix.len()
    }

    /// The byte range of `value`
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.end())
    }

    /// Check if this is the trailing token that only carries separator text
    pub fn is_trailing(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.value)
    }
}
