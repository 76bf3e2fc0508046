//! Lazy sub-token offsets over a whole text

use crate::domain::classification::StandardClassifier;
use crate::domain::machine::{BoundaryMachine, END_OF_INPUT_FLUSHES};
use crate::domain::traits::CharacterClassifier;
use crate::domain::types::Span;
use core::iter::FusedIterator;
use core::str::CharIndices;

/// Iterator over the sub-token [`Span`]s of a text
///
/// Pulls one character at a time through the [`BoundaryMachine`] and
/// suspends as soon as a span completes. Single-pass; call
/// [`subtokenize`] again to start over.
#[derive(Debug, Clone)]
pub struct SubTokens<'a, C = StandardClassifier> {
    machine: BoundaryMachine<'a, C>,
    chars: CharIndices<'a>,
    flushes: usize,
}

impl<'a> SubTokens<'a> {
    /// Create a sub-token iterator using the standard classifier
    pub fn new(text: &'a str) -> Self {
        Self::with_classifier(text, StandardClassifier)
    }
}

impl<'a, C: CharacterClassifier> SubTokens<'a, C> {
    /// Create a sub-token iterator using a custom classifier
    pub fn with_classifier(text: &'a str, classifier: C) -> Self {
        Self {
            machine: BoundaryMachine::with_classifier(text, classifier),
            chars: text.char_indices(),
            flushes: END_OF_INPUT_FLUSHES,
        }
    }

    /// The text being split
    pub fn text(&self) -> &'a str {
        self.machine.text()
    }
}

impl<C: CharacterClassifier> Iterator for SubTokens<'_, C> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        loop {
            let produced = match self.chars.next() {
                Some((offset, ch)) => self.machine.step(offset, ch),
                None if self.flushes > 0 => {
                    self.flushes -= 1;
                    self.machine.finish()
                }
                None => return None,
            };

            if produced.is_some() {
                return produced;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // at most one span per remaining character, plus the final flush
        let (_, upper) = self.chars.size_hint();
        (0, upper.map(|n| n + self.flushes))
    }
}

impl<C: CharacterClassifier> FusedIterator for SubTokens<'_, C> {}

/// Generate all sub-token offsets of `text`
pub fn subtokenize(text: &str) -> SubTokens<'_> {
    SubTokens::new(text)
}

/// Collect all sub-token offsets of `text`
pub fn subsplit(text: &str) -> Vec<Span> {
    subtokenize(text).collect()
}
