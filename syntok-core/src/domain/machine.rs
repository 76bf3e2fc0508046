//! Sub-token boundary state machine
//!
//! A single forward pass over the text. Each character is classified and
//! pushed into the [`LookaheadWindow`]; the character that becomes `current`
//! is then tested for a boundary immediately before it. Because that test
//! looks at `next`, the last real character is only decided after the input
//! is exhausted, which is what [`BoundaryMachine::finish`] is for.

use crate::domain::classification::StandardClassifier;
use crate::domain::traits::{CharacterClassifier, CharacterGroup};
use crate::domain::types::Span;
use crate::domain::window::LookaheadWindow;

/// Number of `End` sentinel steps needed to flush the final token
pub const END_OF_INPUT_FLUSHES: usize = 2;

/// Start of the sub-token currently being accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// A token started at this byte offset
    Pending(usize),
    /// No token pending; the last separator was dropped
    Idle,
}

impl Cursor {
    /// Offset of the pending token, or `idle` if none is pending
    pub fn offset_or(self, idle: usize) -> usize {
        match self {
            Cursor::Pending(offset) => offset,
            Cursor::Idle => idle,
        }
    }
}

/// Boundary state machine over one text
///
/// Owns the lookahead window and the token-start cursor exclusively.
#[derive(Debug, Clone)]
pub struct BoundaryMachine<'a, C = StandardClassifier> {
    text: &'a str,
    classifier: C,
    window: LookaheadWindow,
    cursor: Cursor,
}

impl<'a> BoundaryMachine<'a> {
    /// Create a machine using the standard classifier
    pub fn new(text: &'a str) -> Self {
        Self::with_classifier(text, StandardClassifier)
    }
}

impl<'a, C: CharacterClassifier> BoundaryMachine<'a, C> {
    /// Create a machine using a custom classifier
    pub fn with_classifier(text: &'a str, classifier: C) -> Self {
        Self {
            text,
            classifier,
            window: LookaheadWindow::new(),
            cursor: Cursor::Idle,
        }
    }

    /// The text under analysis
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Current token-start cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Current lookahead window
    pub fn window(&self) -> &LookaheadWindow {
        &self.window
    }

    /// Feed the character at `offset`; returns a sub-token if one completed
    pub fn step(&mut self, offset: usize, ch: char) -> Option<Span> {
        let group = self.classifier.classify(ch);
        self.advance(group, offset)
    }

    /// Feed one `End` sentinel at the text length
    ///
    /// Must be called [`END_OF_INPUT_FLUSHES`] times after the last character.
    /// Extra calls are harmless.
    pub fn finish(&mut self) -> Option<Span> {
        self.advance(CharacterGroup::End, self.text.len())
    }

    fn advance(&mut self, group: CharacterGroup, offset: usize) -> Option<Span> {
        self.window.advance(group, offset);
        self.adjust_cursor();
        let split = self.split_offset();
        self.produce(split)
    }

    /// Move the cursor to the current character when a token (re)starts here
    fn adjust_cursor(&mut self) {
        let previous = self.window.previous().group;
        let current = self.window.current();

        if matches!(previous, CharacterGroup::Space | CharacterGroup::Start)
            && current.group != CharacterGroup::Space
        {
            self.cursor = Cursor::Pending(current.offset);
        } else if current.group.is_alphanumeric() && self.cursor == Cursor::Idle {
            self.cursor = Cursor::Pending(current.offset);
        }
    }

    /// Offset at which to split before the current character, if any
    fn split_offset(&self) -> Option<usize> {
        let current = self.window.current();

        let split = match current.group {
            CharacterGroup::Lower => self.is_word_start(),
            CharacterGroup::Upper => {
                self.window.previous().is(CharacterGroup::Lower) || self.is_word_start()
            }
            CharacterGroup::Number => self.is_number_start(),
            CharacterGroup::Apostrophe => {
                if self.is_negation() {
                    return Some(self.window.previous().offset);
                }
                self.is_attached_mark()
            }
            CharacterGroup::Terminal
            | CharacterGroup::Hyphen
            | CharacterGroup::Punctuation
            | CharacterGroup::Symbol => self.is_attached_mark(),
            CharacterGroup::Space => !matches!(
                self.window.previous().group,
                CharacterGroup::Space | CharacterGroup::Start
            ),
            CharacterGroup::End => true,
            CharacterGroup::Start => false,
        };

        split.then_some(current.offset)
    }

    /// A letter directly after a mark that does not join it to the word
    fn is_word_start(&self) -> bool {
        let previous = self.window.previous().group;
        let after_space = self.window.before().is(CharacterGroup::Space);

        !previous.is_alphanumeric()
            && previous != CharacterGroup::Space
            && previous != CharacterGroup::Hyphen
            && (previous != CharacterGroup::Apostrophe || after_space)
    }

    /// A digit after a mark, unless it continues a numeric pattern like a date
    fn is_number_start(&self) -> bool {
        let previous = self.window.previous().group;

        !previous.is_alphanumeric()
            && previous != CharacterGroup::Space
            && !self.window.before().is(CharacterGroup::Number)
    }

    /// A mark attached to the preceding text, unless it sits between digits
    fn is_attached_mark(&self) -> bool {
        !self.window.previous().is(CharacterGroup::Space) && !self.window.is_numeric_flank()
    }

    /// An `n't` contraction, split so that the `n` stays with the `'t`
    fn is_negation(&self) -> bool {
        let previous = self.window.previous();
        let next = self.window.next();

        previous.is(CharacterGroup::Lower)
            && next.is(CharacterGroup::Lower)
            && self.byte_at(previous.offset) == Some(b'n')
            && self.byte_at(next.offset) == Some(b't')
    }

    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(offset).copied()
    }

    /// Emit `[cursor, end)` and decide where the next token starts
    fn produce(&mut self, split: Option<usize>) -> Option<Span> {
        let end = split.filter(|&end| end > 0)?;
        let text_len = self.text.len();
        let start = self.cursor.offset_or(text_len);

        if end <= start && end != text_len {
            return None;
        }

        let current = self.window.current().group;
        let next = self.window.next().group;

        self.cursor = if current != CharacterGroup::Symbol
            && (next == CharacterGroup::Space || current == CharacterGroup::Hyphen)
        {
            Cursor::Idle
        } else {
            Cursor::Pending(end)
        };

        if start >= end {
            // trailing separator run: nothing left to emit
            return None;
        }

        let span = Span::new(start, end);
        tracing::trace!(start = span.start, end = span.end, "sub-token");
        Some(span)
    }
}
