//! Sub-token boundary detection, token assembly and sentence segmentation
//!
//! This crate splits natural-language text into word-level units in a single
//! forward pass. The core is a small state machine over a four-character
//! lookahead window; everything else is lazy plumbing around it.
//!
//! # Architecture
//!
//! The crate follows a hexagonal architecture pattern:
//! - **Domain layer**: Character classification, the lookahead window and
//!   the boundary state machine
//! - **Application layer**: The pull-based pipeline stages
//!   (sub-tokens → tokens → sentences)
//! - **Input**: UTF-8 validation for callers holding raw bytes
//!
//! Every stage borrows the input text; no token or sentence copies it.
//!
//! # Example
//!
//! ```rust
//! use syntok_core::{split, subsplit, Span, Token};
//!
//! let spans = subsplit("don't");
//! assert_eq!(spans, vec![Span::new(0, 2), Span::new(2, 5)]);
//!
//! let tokens = split(" Hello, world ");
//! assert_eq!(tokens[0], Token::new(" ", 1, "Hello"));
//! assert_eq!(tokens[1], Token::new("", 6, ","));
//!
//! let text: String = tokens.iter().map(ToString::to_string).collect();
//! assert_eq!(text, " Hello, world ");
//! ```
#![warn(missing_docs)]

pub mod application;
pub mod domain;
pub mod error;
pub mod input;

pub use application::{
    analyze, segment, segment_tokens, segment_with, split, subsplit, subtokenize, tokenize,
    SegmentationState, Sentence, Sentences, SubTokens, Tokens, EXPECTED_BYTES_PER_SENTENCE,
    EXPECTED_BYTES_PER_TOKEN,
};
pub use domain::{
    classify, CharacterClassifier, CharacterGroup, ParagraphPolicy, SegmentationPolicy, Span,
    StandardClassifier, TableClassifier, Token,
};
pub use error::{CoreError, Result};
pub use input::{decode, segment_bytes, subtokenize_bytes, tokenize_bytes};
