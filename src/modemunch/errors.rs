//! Error types for mode string parsing.

use thiserror::Error;

/// Why a mode string was rejected.
///
/// Each variant names exactly one failure cause. Older callers that still
/// speak in negative integer codes can use [`ModeError::legacy_code`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeError {
    /// A `rwxrwxrwx` string held a character that does not fit its slot,
    /// was shorter than nine characters, or (in strict mode) longer.
    #[error("bad rwxrwxrwx mode change")]
    BadRwxToken,

    /// An octal mode was longer than eight digits or held a non-octal
    /// character.
    #[error("bad octal mode")]
    BadOctalSyntax,

    /// The character after the selector run was not `+`, `-` or `=`.
    #[error("bad operator in mode change")]
    BadOperator,

    /// A clause was followed by something other than `,` or end of string.
    #[error("bad mode change syntax")]
    BadChangeSyntax,
}

impl ModeError {
    /// Negative status code returned by the historical C helpers.
    ///
    /// Note that `BadRwxToken` and `BadOctalSyntax` share -4 there.
    pub fn legacy_code(&self) -> i32 {
        match self {
            ModeError::BadRwxToken => -4,
            ModeError::BadOctalSyntax => -4,
            ModeError::BadOperator => -1,
            ModeError::BadChangeSyntax => -2,
        }
    }

    /// errno a syscall-style caller should fail with.
    pub fn errno(&self) -> i32 {
        libc::EINVAL
    }
}
