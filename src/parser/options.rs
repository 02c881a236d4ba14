//! Parsing options

use crate::base::constants::{DEFAULT_MAX_LIST_LENGTH, DEFAULT_MAX_TOKEN_LENGTH};

/// Limits applied while lexing and parsing a constraint expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Longest accepted token, in bytes of source text
    pub max_token_length: usize,
    /// Most items accepted in any one list (projections, selections,
    /// arguments, slices)
    pub max_list_length: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            max_list_length: DEFAULT_MAX_LIST_LENGTH,
        }
    }
}
