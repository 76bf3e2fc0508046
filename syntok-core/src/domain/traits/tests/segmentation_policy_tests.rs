//! Tests for the segmentation policy trait

use crate::domain::traits::segmentation_policy::*;
use crate::domain::types::Token;

/// Mock policy that ends a sentence after every terminal value
/// and counts how often it was asked
#[derive(Default)]
struct MockTerminalPolicy {
    calls: usize,
}

impl SegmentationPolicy for MockTerminalPolicy {
    fn is_terminal(&mut self, token: &Token<'_>, _next: Option<&Token<'_>>) -> bool {
        self.calls += 1;
        matches!(token.value, "." | "?" | "!")
    }
}

#[test]
fn test_paragraph_policy_never_breaks() {
    let mut policy = ParagraphPolicy;
    let token = Token::new("", 0, ".");
    let next = Token::new(" ", 2, "Next");

    assert!(!policy.is_terminal(&token, Some(&next)));
    assert!(!policy.is_terminal(&token, None));
}

#[test]
fn test_stateful_policy() {
    let mut policy = MockTerminalPolicy::default();
    let word = Token::new("", 0, "Hi");
    let stop = Token::new("", 2, "!");

    assert!(!policy.is_terminal(&word, Some(&stop)));
    assert!(policy.is_terminal(&stop, None));
    assert_eq!(policy.calls, 2);
}

#[test]
fn test_closure_policy_sees_next_token() {
    let mut policy = |_token: &Token<'_>, next: Option<&Token<'_>>| next.is_none();
    let token = Token::new("", 0, "end");

    assert!(policy.is_terminal(&token, None));
    assert!(!policy.is_terminal(&token, Some(&token)));
}
