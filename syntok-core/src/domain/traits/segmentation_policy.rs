//! Injectable sentence boundary policy

use crate::domain::types::Token;

/// Decides where sentences end in a token stream
///
/// The segmenter asks the policy once per token, passing the token that
/// follows it (if any). Returning `true` closes the current sentence after
/// `token`.
pub trait SegmentationPolicy {
    /// Check if the sentence ends after `token`
    fn is_terminal(&mut self, token: &Token<'_>, next: Option<&Token<'_>>) -> bool;
}

impl<F> SegmentationPolicy for F
where
    F: FnMut(&Token<'_>, Option<&Token<'_>>) -> bool,
{
    fn is_terminal(&mut self, token: &Token<'_>, next: Option<&Token<'_>>) -> bool {
        self(token, next)
    }
}

/// Treats the whole token stream as a single sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParagraphPolicy;

impl SegmentationPolicy for ParagraphPolicy {
    fn is_terminal(&mut self, _token: &Token<'_>, _next: Option<&Token<'_>>) -> bool {
        false
    }
}
