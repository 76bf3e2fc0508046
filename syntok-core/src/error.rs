//! Core error types
//!
//! The tokenizer itself cannot fail; the only error is rejecting input that
//! is not valid UTF-8 before it reaches the classifier.

use std::string::FromUtf8Error;
use thiserror::Error;

/// Core errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The input bytes are not valid UTF-8
    #[error("invalid encoding: {}", describe_utf8(.valid_up_to, .error_len))]
    InvalidEncoding {
        /// Length of the valid prefix in bytes
        valid_up_to: usize,
        /// Length of the invalid sequence, `None` if the input ended mid-sequence
        error_len: Option<usize>,
    },
}

fn describe_utf8(valid_up_to: &usize, error_len: &Option<usize>) -> String {
    match error_len {
        Some(len) => format!("invalid UTF-8 sequence of {len} bytes at byte {valid_up_to}"),
        None => format!("incomplete UTF-8 sequence at byte {valid_up_to}"),
    }
}

impl From<core::str::Utf8Error> for CoreError {
    fn from(err: core::str::Utf8Error) -> Self {
        CoreError::InvalidEncoding {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}

impl From<FromUtf8Error> for CoreError {
    fn from(err: FromUtf8Error) -> Self {
        err.utf8_error().into()
    }
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
