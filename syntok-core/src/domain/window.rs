//! Lookahead window for the boundary state machine
//!
//! Keeps the classified context around the character under evaluation
//! without ever re-reading the text.

use crate::domain::traits::CharacterGroup;

/// One classified character and its absolute byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Character group of the slot
    pub group: CharacterGroup,
    /// Byte offset of the character in the text
    pub offset: usize,
}

impl Slot {
    /// Create a new slot
    pub fn new(group: CharacterGroup, offset: usize) -> Self {
        Self { group, offset }
    }

    /// The sentinel slot that fills the window before any input
    pub fn start() -> Self {
        Self::new(CharacterGroup::Start, 0)
    }

    /// Check if the slot holds the given group
    pub fn is(&self, group: CharacterGroup) -> bool {
        self.group == group
    }
}

const BEFORE: usize = 0;
const PREVIOUS: usize = 1;
const CURRENT: usize = 2;
const NEXT: usize = 3;

/// Sliding window of four slots: [before, previous, current, next]
///
/// Every advance drops `before` and appends a new `next`, so the character
/// being decided on is always the one that was `next` a step earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookaheadWindow {
    slots: [Slot; 4],
}

impl LookaheadWindow {
    /// Create a window filled with `Start` sentinels at offset 0
    pub fn new() -> Self {
        Self {
            slots: [Slot::start(); 4],
        }
    }

    /// Shift the window by one position and append a new `next` slot
    pub fn advance(&mut self, group: CharacterGroup, offset: usize) {
        self.slots.copy_within(PREVIOUS.., BEFORE);
        self.slots[NEXT] = Slot::new(group, offset);
    }

    /// Slot two positions before current
    pub fn before(&self) -> Slot {
        self.slots[BEFORE]
    }

    /// Slot immediately before current
    pub fn previous(&self) -> Slot {
        self.slots[PREVIOUS]
    }

    /// Slot under evaluation
    pub fn current(&self) -> Slot {
        self.slots[CURRENT]
    }

    /// Slot immediately after current
    pub fn next(&self) -> Slot {
        self.slots[NEXT]
    }

    /// Check if previous and next are both digits
    pub fn is_numeric_flank(&self) -> bool {
        self.previous().is(CharacterGroup::Number) && self.next().is(CharacterGroup::Number)
    }
}

impl Default for LookaheadWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharacterGroup::*;

    #[test]
    fn test_window_starts_with_sentinels() {
        let window = LookaheadWindow::new();
        assert_eq!(window.before(), Slot::start());
        assert_eq!(window.previous(), Slot::start());
        assert_eq!(window.current(), Slot::start());
        assert_eq!(window.next(), Slot::start());
    }

    #[test]
    fn test_window_sliding() {
        let mut window = LookaheadWindow::new();

        window.advance(Lower, 0);
        assert_eq!(window.next(), Slot::new(Lower, 0));
        assert_eq!(window.current(), Slot::start());

        window.advance(Hyphen, 1);
        window.advance(Number, 2);
        window.advance(End, 3);

        assert_eq!(window.before(), Slot::new(Lower, 0));
        assert_eq!(window.previous(), Slot::new(Hyphen, 1));
        assert_eq!(window.current(), Slot::new(Number, 2));
        assert_eq!(window.next(), Slot::new(End, 3));
    }

    #[test]
    fn test_multibyte_offsets_are_kept() {
        let mut window = LookaheadWindow::new();

        // "a’s": the apostrophe is 3 bytes wide
        window.advance(Lower, 0);
        window.advance(Apostrophe, 1);
        window.advance(Lower, 4);

        assert_eq!(window.previous().offset, 0);
        assert_eq!(window.current().offset, 1);
        assert_eq!(window.next().offset, 4);
    }

    #[test]
    fn test_numeric_flank() {
        let mut window = LookaheadWindow::new();
        window.advance(Number, 0);
        window.advance(Terminal, 1);
        window.advance(Number, 2);
        assert!(window.is_numeric_flank());

        window.advance(Lower, 3);
        assert!(!window.is_numeric_flank());
    }
}
