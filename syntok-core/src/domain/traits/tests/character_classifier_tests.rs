//! Tests for the character classifier trait and groups

use crate::domain::traits::character_classifier::*;

/// Mock classifier that only knows ASCII
struct MockCharacterClassifier {
    /// Characters reported as hyphens
    hyphens: Vec<char>,
}

impl MockCharacterClassifier {
    fn new() -> Self {
        Self {
            hyphens: vec!['-', '_'],
        }
    }

    fn with_hyphens(hyphens: Vec<char>) -> Self {
        Self { hyphens }
    }
}

impl CharacterClassifier for MockCharacterClassifier {
    fn classify(&self, ch: char) -> CharacterGroup {
        if ch.is_ascii_lowercase() {
            CharacterGroup::Lower
        } else if ch.is_ascii_whitespace() {
            CharacterGroup::Space
        } else if ch.is_ascii_uppercase() {
            CharacterGroup::Upper
        } else if ch.is_ascii_digit() {
            CharacterGroup::Number
        } else if matches!(ch, '.' | '?' | '!') {
            CharacterGroup::Terminal
        } else if matches!(ch, '(' | ')' | '[' | ']' | '{' | '}') {
            CharacterGroup::Punctuation
        } else if self.hyphens.contains(&ch) {
            CharacterGroup::Hyphen
        } else if ch == '\'' {
            CharacterGroup::Apostrophe
        } else {
            CharacterGroup::Symbol
        }
    }
}

#[cfg(test)]
mod character_group_tests {
    use super::*;

    #[test]
    fn test_alphanumeric_groups() {
        assert!(CharacterGroup::Lower.is_alphanumeric());
        assert!(CharacterGroup::Upper.is_alphanumeric());
        assert!(CharacterGroup::Number.is_alphanumeric());
        assert!(!CharacterGroup::Apostrophe.is_alphanumeric());
        assert!(!CharacterGroup::Start.is_alphanumeric());
    }

    #[test]
    fn test_sentinels() {
        assert!(CharacterGroup::Start.is_sentinel());
        assert!(CharacterGroup::End.is_sentinel());
        assert!(!CharacterGroup::Space.is_sentinel());
    }

    #[test]
    fn test_separators() {
        assert!(CharacterGroup::Space.is_separator());
        assert!(CharacterGroup::Hyphen.is_separator());
        assert!(!CharacterGroup::Terminal.is_separator());
        assert!(!CharacterGroup::Symbol.is_separator());
    }
}

#[cfg(test)]
mod classifier_trait_tests {
    use super::*;

    #[test]
    fn test_default_predicates() {
        let classifier = MockCharacterClassifier::new();

        assert!(classifier.is_terminal('.'));
        assert!(classifier.is_terminal('!'));
        assert!(!classifier.is_terminal(','));

        assert!(classifier.is_hyphen('-'));
        assert!(classifier.is_hyphen('_'));
        assert!(!classifier.is_hyphen('~'));

        assert!(classifier.is_apostrophe('\''));
        assert!(classifier.is_space(' '));
        assert!(!classifier.is_space('a'));
    }

    #[test]
    fn test_custom_hyphens() {
        let classifier = MockCharacterClassifier::with_hyphens(vec!['~']);
        assert!(classifier.is_hyphen('~'));
        assert_eq!(classifier.classify('-'), CharacterGroup::Symbol);
    }

    #[test]
    fn test_classifier_through_reference() {
        fn classify_all<C: CharacterClassifier>(classifier: C, text: &str) -> Vec<CharacterGroup> {
            text.chars().map(|ch| classifier.classify(ch)).collect()
        }

        let classifier = MockCharacterClassifier::new();
        assert_eq!(
            classify_all(&classifier, "a1 "),
            vec![
                CharacterGroup::Lower,
                CharacterGroup::Number,
                CharacterGroup::Space
            ]
        );
    }

    #[test]
    fn test_classifier_as_trait_object() {
        let classifier: Box<dyn CharacterClassifier> = Box::new(MockCharacterClassifier::new());
        assert_eq!(classifier.classify('('), CharacterGroup::Punctuation);
        assert_eq!(classifier.classify('#'), CharacterGroup::Symbol);
    }
}
