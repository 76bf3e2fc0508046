//! Application layer: the lazy pipeline stages
//!
//! text → [`SubTokens`] → [`Tokens`] → [`Sentences`]
//!
//! Each stage is a pull-based iterator that owns its own state and reads
//! only the output of the stage before it.

pub mod segmenter;
pub mod subtokenizer;
pub mod tokenizer;

pub use segmenter::{
    analyze, segment, segment_tokens, segment_with, SegmentationState, Sentence, Sentences,
    EXPECTED_BYTES_PER_SENTENCE,
};
pub use subtokenizer::{subsplit, subtokenize, SubTokens};
pub use tokenizer::{split, tokenize, Tokens, EXPECTED_BYTES_PER_TOKEN};
