//! Codepoint to character-group classification
//!
//! Classification order is significant: the first matching rule wins.
//!
//! 1. lowercase letter
//! 2. whitespace
//! 3. uppercase letter
//! 4. decimal digit
//! 5. `.`, `?`, `!`
//! 6. open or close punctuation
//! 7. hyphen table
//! 8. apostrophe table
//! 9. anything else

use crate::domain::traits::{CharacterClassifier, CharacterGroup};
use smallvec::SmallVec;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Hyphens and dashes, including the underscore which is treated alike
pub const HYPHENS: &[char] = &[
    '\u{00AD}', // soft hyphen
    '\u{058A}', // armenian hyphen
    '\u{05BE}', // hebrew maqaf
    '\u{0F0C}', // tibetan mark delimiter tsheg bstar
    '\u{1400}', // canadian syllabics hyphen
    '\u{1806}', // mongolian todo soft hyphen
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2E17}', // double oblique hyphen
    '\u{30A0}', // katakana-hiragana double hyphen
    '_',
    '-',
];

/// Apostrophes, including the ASCII single quote which is treated alike
pub const APOSTROPHES: &[char] = &[
    '\u{00B4}', // acute accent
    '\u{02B9}', // modifier letter prime
    '\u{02BC}', // modifier letter apostrophe
    '\u{2019}', // right single quotation mark
    '\u{2032}', // prime
    '\'',
];

/// Sentence terminals
pub const TERMINALS: &[char] = &['.', '?', '!'];

/// Classify a codepoint with the default hyphen and apostrophe tables
pub fn classify(ch: char) -> CharacterGroup {
    classify_with(ch, HYPHENS, APOSTROPHES)
}

/// Classify a codepoint only by the rules that take priority over the tables
///
/// Returns `None` when the character would fall through to the hyphen,
/// apostrophe or symbol rules.
pub fn classify_fixed(ch: char) -> Option<CharacterGroup> {
    let category = get_general_category(ch);

    if category == GeneralCategory::LowercaseLetter {
        Some(CharacterGroup::Lower)
    } else if ch.is_whitespace() {
        Some(CharacterGroup::Space)
    } else if category == GeneralCategory::UppercaseLetter {
        Some(CharacterGroup::Upper)
    } else if category == GeneralCategory::DecimalNumber {
        Some(CharacterGroup::Number)
    } else if TERMINALS.contains(&ch) {
        Some(CharacterGroup::Terminal)
    } else if matches!(
        category,
        GeneralCategory::OpenPunctuation | GeneralCategory::ClosePunctuation
    ) {
        Some(CharacterGroup::Punctuation)
    } else {
        None
    }
}

fn classify_with(ch: char, hyphens: &[char], apostrophes: &[char]) -> CharacterGroup {
    if let Some(group) = classify_fixed(ch) {
        group
    } else if hyphens.contains(&ch) {
        CharacterGroup::Hyphen
    } else if apostrophes.contains(&ch) {
        CharacterGroup::Apostrophe
    } else {
        CharacterGroup::Symbol
    }
}

/// The default classifier: a stateless wrapper around [`classify`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardClassifier;

impl CharacterClassifier for StandardClassifier {
    fn classify(&self, ch: char) -> CharacterGroup {
        classify(ch)
    }
}

/// Classifier with replaceable hyphen and apostrophe tables
///
/// The priority order of the standard rules is kept: a table entry that is
/// a letter, digit, whitespace, terminal or bracket never reaches the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableClassifier {
    hyphens: SmallVec<[char; 16]>,
    apostrophes: SmallVec<[char; 8]>,
}

impl TableClassifier {
    /// Create a classifier from custom tables
    pub fn new<H, A>(hyphens: H, apostrophes: A) -> Self
    where
        H: IntoIterator<Item = char>,
        A: IntoIterator<Item = char>,
    {
        Self {
            hyphens: hyphens.into_iter().collect(),
            apostrophes: apostrophes.into_iter().collect(),
        }
    }

    /// The hyphen table
    pub fn hyphens(&self) -> &[char] {
        &self.hyphens
    }

    /// The apostrophe table
    pub fn apostrophes(&self) -> &[char] {
        &self.apostrophes
    }
}

impl Default for TableClassifier {
    fn default() -> Self {
        Self::new(HYPHENS.iter().copied(), APOSTROPHES.iter().copied())
    }
}

impl CharacterClassifier for TableClassifier {
    fn classify(&self, ch: char) -> CharacterGroup {
        classify_with(ch, &self.hyphens, &self.apostrophes)
    }
}
