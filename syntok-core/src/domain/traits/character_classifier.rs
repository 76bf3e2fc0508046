//! Character classification for sub-token boundary detection

/// Classification bucket assigned to a single codepoint
///
/// `Start` and `End` are synthetic sentinels that never come out of a
/// classifier; they fill the lookahead window before the first character and
/// after the last one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharacterGroup {
    /// Sentinel before any input
    Start,
    /// Lowercase letter
    Lower,
    /// Uppercase letter
    Upper,
    /// Decimal digit
    Number,
    /// Sentence terminal (`.`, `?`, `!`)
    Terminal,
    /// Hyphen, dash or underscore
    Hyphen,
    /// Open or close bracket punctuation
    Punctuation,
    /// Apostrophe or single-quote variant
    Apostrophe,
    /// Anything else
    Symbol,
    /// Whitespace
    Space,
    /// Sentinel at the end of input
    End,
}

impl CharacterGroup {
    /// Check if the group is a letter or a digit
    pub fn is_alphanumeric(self) -> bool {
        matches!(
            self,
            CharacterGroup::Lower | CharacterGroup::Upper | CharacterGroup::Number
        )
    }

    /// Check if the group is one of the synthetic window sentinels
    pub fn is_sentinel(self) -> bool {
        matches!(self, CharacterGroup::Start | CharacterGroup::End)
    }

    /// Check if the group separates tokens and is dropped from them
    pub fn is_separator(self) -> bool {
        matches!(self, CharacterGroup::Space | CharacterGroup::Hyphen)
    }
}

/// Pure character classification logic
///
/// Implementations must be deterministic: the same codepoint always maps to
/// the same group, and `Start`/`End` are never returned.
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharacterGroup;

    /// Check if character is a sentence terminal
    fn is_terminal(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterGroup::Terminal)
    }

    /// Check if character is a hyphen
    fn is_hyphen(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterGroup::Hyphen)
    }

    /// Check if character is an apostrophe
    fn is_apostrophe(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterGroup::Apostrophe)
    }

    /// Check if character is whitespace
    fn is_space(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterGroup::Space)
    }
}

impl<C: CharacterClassifier + ?Sized> CharacterClassifier for &C {
    fn classify(&self, ch: char) -> CharacterGroup {
        (**self).classify(ch)
    }
}
