//! Public API for syntok tokenization and sentence segmentation
//!
//! This crate wraps the borrowing pipeline of `syntok-core` behind a
//! configurable [`Tokenizer`] and owned, serializable results.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use syntok_core::{
    segment_tokens, ParagraphPolicy, SegmentationPolicy, Sentence, Sentences, Span, SubTokens,
    TableClassifier, Token, Tokens, EXPECTED_BYTES_PER_SENTENCE, EXPECTED_BYTES_PER_TOKEN,
};

// Re-export key types
pub use config::{ClassifierConfig, Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output, SentenceDto, TokenDto};
pub use error::ApiError;

/// Main entry point for tokenization
///
/// Holds the configured classifier; all methods borrow the text they are
/// given and can be called concurrently.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    classifier: TableClassifier,
    config: Config,
}

impl Tokenizer {
    /// Create a tokenizer with the default configuration
    pub fn new() -> Self {
        Self {
            classifier: TableClassifier::default(),
            config: Config::default(),
        }
    }

    /// Create a tokenizer with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: config.classifier(),
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate the sub-token spans of `text`
    pub fn subtokenize<'a>(&'a self, text: &'a str) -> SubTokens<'a, &'a TableClassifier> {
        SubTokens::with_classifier(text, &self.classifier)
    }

    /// Generate the tokens of `text`
    pub fn tokenize<'a>(&'a self, text: &'a str) -> Tokens<'a, &'a TableClassifier> {
        Tokens::with_classifier(text, &self.classifier)
    }

    /// Generate the sentences of `text` with the default policy
    pub fn segment<'a>(
        &'a self,
        text: &'a str,
    ) -> Sentences<Tokens<'a, &'a TableClassifier>, ParagraphPolicy> {
        self.segment_with(text, ParagraphPolicy)
    }

    /// Generate the sentences of `text` with a custom policy
    pub fn segment_with<'a, P: SegmentationPolicy>(
        &'a self,
        text: &'a str,
        policy: P,
    ) -> Sentences<Tokens<'a, &'a TableClassifier>, P> {
        segment_tokens(self.tokenize(text), policy)
    }

    /// Collect the sub-token spans of `text`
    pub fn subsplit(&self, text: &str) -> Vec<Span> {
        self.subtokenize(text).collect()
    }

    /// Collect the tokens of `text`
    pub fn split<'a>(&'a self, text: &'a str) -> Vec<Token<'a>> {
        let mut result = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_TOKEN);
        result.extend(self.tokenize(text));
        result
    }

    /// Collect the sentences of `text` with the default policy
    pub fn analyze<'a>(&'a self, text: &'a str) -> Vec<Sentence<'a>> {
        let mut result = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_SENTENCE);
        result.extend(self.segment(text));
        result
    }

    /// Process input and return owned sentences
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.read_text()?;
        tracing::debug!(bytes = text.len(), "processing input");

        let sentences: Vec<SentenceDto> = self
            .segment(&text)
            .map(|sentence| SentenceDto::from(&sentence))
            .collect();

        let metadata = Metadata {
            total_bytes: text.len(),
            total_chars: text.chars().count(),
            token_count: sentences.iter().map(|sentence| sentence.tokens.len()).sum(),
            sentence_count: sentences.len(),
        };

        tracing::debug!(
            tokens = metadata.token_count,
            sentences = metadata.sentence_count,
            "processed input"
        );

        Ok(Output {
            sentences,
            metadata,
        })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Process independent inputs in parallel
    ///
    /// Each input is still tokenized by a single sequential pass; results are
    /// returned in input order.
    #[cfg(feature = "parallel")]
    pub fn process_batch(&self, inputs: Vec<Input>) -> Vec<Result<Output>> {
        use rayon::prelude::*;

        tracing::debug!(inputs = inputs.len(), "processing batch");
        inputs
            .into_par_iter()
            .map(|input| self.process(input))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Process text with default configuration
pub fn process_text(text: &str) -> Result<Output> {
    Tokenizer::new().process(Input::from_text(text))
}

/// Process raw bytes with default configuration
pub fn process_bytes(bytes: impl Into<Vec<u8>>) -> Result<Output> {
    Tokenizer::new().process(Input::from_bytes(bytes))
}
