//! Error types for input validation.

use std::fmt;
use thiserror::Error;

/// Why a word was rejected in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInputKind {
    /// An upper-case letter; callers are expected to lowercase first.
    Uppercase,
    Digit,
    /// A letter outside the ASCII alphabet.
    NonAscii,
    /// Punctuation, whitespace, or any other symbol.
    NonAlphabetic,
}

impl InvalidInputKind {
    /// Classify a character that is not a lowercase ASCII letter.
    pub fn of(ch: char) -> Self {
        if ch.is_uppercase() {
            InvalidInputKind::Uppercase
        } else if ch.is_numeric() {
            InvalidInputKind::Digit
        } else if ch.is_alphabetic() {
            InvalidInputKind::NonAscii
        } else {
            InvalidInputKind::NonAlphabetic
        }
    }
}

impl fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvalidInputKind::Uppercase => "upper-case letter",
            InvalidInputKind::Digit => "digit",
            InvalidInputKind::NonAscii => "non-ASCII letter",
            InvalidInputKind::NonAlphabetic => "non-alphabetic character",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StemError {
    #[error("invalid input {word:?}: {kind} {found:?} at byte {position}")]
    InvalidInput { word: String, kind: InvalidInputKind, found: char, position: usize },
}

pub type Result<T> = std::result::Result<T, StemError>;
