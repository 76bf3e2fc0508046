//! Input validation at the byte boundary
//!
//! Raw bytes are checked once, up front; everything downstream works on
//! `&str` and cannot see malformed encodings.

use crate::application::{segment, subtokenize, tokenize, Sentences, SubTokens, Tokens};
use crate::error::Result;

/// Validate that `bytes` are UTF-8 and borrow them as text
pub fn decode(bytes: &[u8]) -> Result<&str> {
    let text = core::str::from_utf8(bytes).map_err(|err| {
        tracing::debug!(valid_up_to = err.valid_up_to(), "rejected input bytes");
        err
    })?;
    Ok(text)
}

/// Validate `bytes` and generate their sub-token offsets
pub fn subtokenize_bytes(bytes: &[u8]) -> Result<SubTokens<'_>> {
    decode(bytes).map(subtokenize)
}

/// Validate `bytes` and generate their tokens
pub fn tokenize_bytes(bytes: &[u8]) -> Result<Tokens<'_>> {
    decode(bytes).map(tokenize)
}

/// Validate `bytes` and generate their sentences with the default policy
pub fn segment_bytes(bytes: &[u8]) -> Result<Sentences<Tokens<'_>>> {
    decode(bytes).map(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Span, Token};
    use crate::error::CoreError;

    #[test]
    fn test_decode_valid() {
        assert_eq!(decode("he\u{2019}s".as_bytes()).unwrap(), "he\u{2019}s");
        assert_eq!(decode(b"").unwrap(), "");
    }

    #[test]
    fn test_decode_invalid() {
        let err = decode(b"token\xC0\xAF").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidEncoding {
                valid_up_to: 5,
                error_len: Some(1)
            }
        );
    }

    #[test]
    fn test_stage_wrappers() {
        let spans: Vec<Span> = subtokenize_bytes(b"end!").unwrap().collect();
        assert_eq!(spans, vec![Span::new(0, 3), Span::new(3, 4)]);

        let tokens: Vec<Token<'_>> = tokenize_bytes(b" text ").unwrap().collect();
        assert_eq!(tokens, vec![Token::new(" ", 1, "text"), Token::new(" ", 6, "")]);

        assert_eq!(segment_bytes(b"text").unwrap().count(), 1);
    }

    #[test]
    fn test_stage_wrappers_reject_invalid() {
        assert!(subtokenize_bytes(b"\xFF").is_err());
        assert!(tokenize_bytes(b"a\xFFb").is_err());
        assert!(segment_bytes(b"\xE2\x80").is_err());
    }
}
