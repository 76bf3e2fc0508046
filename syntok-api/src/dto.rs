//! Data Transfer Objects for API

use crate::error::Result;
use syntok_core::{CoreError, Sentence, Token};

/// Input source for processing
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// Raw bytes, validated as UTF-8 before use
    Bytes(Vec<u8>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input::Bytes(bytes.into())
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::Bytes(bytes) => Ok(String::from_utf8(bytes).map_err(CoreError::from)?),
        }
    }
}

/// Owned token for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDto {
    /// Separator text before the value
    pub prefix: String,
    /// Byte offset of the value
    pub offset: usize,
    /// The token itself; empty only for a trailing separator token
    pub value: String,
}

impl From<&Token<'_>> for TokenDto {
    fn from(token: &Token<'_>) -> Self {
        Self {
            prefix: token.prefix.to_owned(),
            offset: token.offset,
            value: token.value.to_owned(),
        }
    }
}

/// Owned sentence for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceDto {
    /// Byte offset where the sentence's first prefix starts
    pub offset: usize,
    /// Byte offset one past the sentence's last value
    pub end: usize,
    /// Tokens in text order
    pub tokens: Vec<TokenDto>,
}

impl SentenceDto {
    /// Rebuild the sentence text from its tokens
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .flat_map(|token| [token.prefix.as_str(), token.value.as_str()])
            .collect()
    }
}

impl From<&Sentence<'_>> for SentenceDto {
    fn from(sentence: &Sentence<'_>) -> Self {
        Self {
            offset: sentence.offset(),
            end: sentence.end(),
            tokens: sentence.iter().map(TokenDto::from).collect(),
        }
    }
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes processed
    pub total_bytes: usize,
    /// Total characters processed
    pub total_chars: usize,
    /// Number of tokens, including a trailing separator token
    pub token_count: usize,
    /// Number of sentences
    pub sentence_count: usize,
}

/// Complete output with sentences and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Segmented sentences
    pub sentences: Vec<SentenceDto>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Iterate over all tokens of all sentences
    pub fn tokens(&self) -> impl Iterator<Item = &TokenDto> {
        self.sentences.iter().flat_map(|sentence| &sentence.tokens)
    }

    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
