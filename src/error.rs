//! Error types for constraint operations.

use thiserror::Error;

use crate::ast::InvalidCoordinates;
use crate::parser::ParseError;

/// Errors surfaced to a client handling constraint expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DceError {
    /// The constraint text could not be parsed. No partial tree is kept.
    #[error("malformed constraint expression: {0}")]
    Parse(#[from] ParseError),

    /// A projection's slice composition fell outside its enclosing range.
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),
}

impl DceError {
    /// Every parser diagnostic, or none for non-parse errors.
    pub fn diagnostics(&self) -> &[crate::parser::SyntaxError] {
        match self {
            Self::Parse(err) => &err.diagnostics,
            Self::InvalidCoordinates(_) => &[],
        }
    }
}

/// Result type for constraint operations.
pub type Result<T, E = DceError> = std::result::Result<T, E>;
