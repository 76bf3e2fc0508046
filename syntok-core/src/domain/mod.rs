//! Domain layer: classification and the boundary state machine
//!
//! Everything here is pure and total over valid Unicode text.

pub mod classification;
pub mod machine;
pub mod traits;
pub mod types;
pub mod window;

pub use classification::{
    classify, classify_fixed, StandardClassifier, TableClassifier, APOSTROPHES, HYPHENS,
    TERMINALS,
};
pub use machine::{BoundaryMachine, Cursor, END_OF_INPUT_FLUSHES};
pub use traits::{CharacterClassifier, CharacterGroup, ParagraphPolicy, SegmentationPolicy};
pub use types::{Span, Token};
pub use window::{LookaheadWindow, Slot};
