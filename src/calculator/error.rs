//! Internal evaluation errors.
//!
//! The public contract collapses every failure into a single error
//! marker ([`super::CalcResult::Error`]); these variants exist so the
//! lexer and parser can report what actually went wrong for logging.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("expected a number")]
    ExpectedNumber,
    #[error("unexpected trailing input")]
    TrailingInput,
    #[error("result is not finite")]
    NonFinite,
}
