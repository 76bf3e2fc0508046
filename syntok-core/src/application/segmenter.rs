//! Sentence segmentation over a token stream
//!
//! Where sentences end is decided by an injected [`SegmentationPolicy`].
//! The default [`ParagraphPolicy`] keeps the whole stream in one sentence.

use crate::application::tokenizer::{tokenize, Tokens};
use crate::domain::traits::{ParagraphPolicy, SegmentationPolicy};
use crate::domain::types::Token;
use core::fmt;
use core::iter::{FusedIterator, Peekable};

/// Expected bytes per sentence, used to size eager collections
pub const EXPECTED_BYTES_PER_SENTENCE: usize = 50;

/// A non-empty, ordered group of tokens
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sentence<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Sentence<'a> {
    /// Create a sentence; returns `None` for an empty token list
    pub fn new(tokens: Vec<Token<'a>>) -> Option<Self> {
        (!tokens.is_empty()).then_some(Self { tokens })
    }

    /// The tokens of this sentence
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Byte offset where the first token's prefix starts
    pub fn offset(&self) -> usize {
        self.tokens[0].prefix_offset()
    }

    /// Byte offset one past the last token's value
    pub fn end(&self) -> usize {
        self.tokens[self.tokens.len() - 1].end()
    }

    /// Iterate over the tokens
    pub fn iter(&self) -> core::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }

    /// Take ownership of the tokens
    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }
}

impl<'a> IntoIterator for Sentence<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s Sentence<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = core::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Sentence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Progress of the segmenter through the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationState {
    /// No token of the next sentence consumed yet
    Begin,
    /// The sentence holds exactly one token
    FirstToken,
    /// The sentence holds more than one token
    InnerToken,
    /// The policy closed the sentence after the last token
    TerminalToken,
    /// The token stream is exhausted
    End,
}

/// Iterator over the [`Sentence`]s of a token stream
pub struct Sentences<I, P = ParagraphPolicy>
where
    I: Iterator,
{
    tokens: Peekable<I>,
    policy: P,
    state: SegmentationState,
}

impl<'a, I, P> Sentences<I, P>
where
    I: Iterator<Item = Token<'a>>,
    P: SegmentationPolicy,
{
    /// Segment `tokens` with `policy`
    pub fn new(tokens: I, policy: P) -> Self {
        Self {
            tokens: tokens.peekable(),
            policy,
            state: SegmentationState::Begin,
        }
    }

    /// Where the segmenter currently stands
    pub fn state(&self) -> SegmentationState {
        self.state
    }

    /// The segmentation policy
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<'a, I, P> Iterator for Sentences<I, P>
where
    I: Iterator<Item = Token<'a>>,
    P: SegmentationPolicy,
{
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Sentence<'a>> {
        if self.state == SegmentationState::End {
            return None;
        }

        self.state = SegmentationState::Begin;
        let mut buffer = Vec::new();

        while let Some(token) = self.tokens.next() {
            buffer.push(token);
            self.state = if buffer.len() == 1 {
                SegmentationState::FirstToken
            } else {
                SegmentationState::InnerToken
            };

            let next = self.tokens.peek();
            if self.policy.is_terminal(&token, next) {
                self.state = SegmentationState::TerminalToken;
                break;
            }
        }

        if self.tokens.peek().is_none() {
            self.state = SegmentationState::End;
        }

        let sentence = Sentence::new(buffer)?;
        tracing::debug!(
            tokens = sentence.len(),
            offset = sentence.offset(),
            end = sentence.end(),
            "sentence"
        );
        Some(sentence)
    }
}

impl<'a, I, P> FusedIterator for Sentences<I, P>
where
    I: Iterator<Item = Token<'a>>,
    P: SegmentationPolicy,
{
}

impl<I, P> fmt::Debug for Sentences<I, P>
where
    I: Iterator,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sentences")
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Segment `text` into sentences with the default policy
pub fn segment(text: &str) -> Sentences<Tokens<'_>> {
    Sentences::new(tokenize(text), ParagraphPolicy)
}

/// Segment `text` into sentences with a custom policy
pub fn segment_with<P: SegmentationPolicy>(text: &str, policy: P) -> Sentences<Tokens<'_>, P> {
    Sentences::new(tokenize(text), policy)
}

/// Segment an existing token stream with a custom policy
pub fn segment_tokens<'a, I, P>(tokens: I, policy: P) -> Sentences<I::IntoIter, P>
where
    I: IntoIterator<Item = Token<'a>>,
    P: SegmentationPolicy,
{
    Sentences::new(tokens.into_iter(), policy)
}

/// Collect all sentences of `text` with the default policy
pub fn analyze(text: &str) -> Vec<Sentence<'_>> {
    let mut result = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_SENTENCE);
    result.extend(segment(text));
    result
}
