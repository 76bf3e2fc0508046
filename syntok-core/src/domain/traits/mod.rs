//! Pure domain traits for tokenization and segmentation
//!
//! This module contains the seams of the pipeline: how characters are
//! classified and how a token stream is cut into sentences.

mod character_classifier;
mod segmentation_policy;

pub use character_classifier::{CharacterClassifier, CharacterGroup};
pub use segmentation_policy::{ParagraphPolicy, SegmentationPolicy};

#[cfg(test)]
mod tests;
