//! Parser for DAP constraint expressions
//!
//! ## Architecture
//!
//! ```text
//! Constraint text (URL query)
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Parser → recursive descent over the constraint grammar
//!     ↓
//! ParseState actions → Constraint tree (crate::ast)
//! ```
//!
//! Lexical problems and invalid ranges or constants are recorded as
//! diagnostics and parsing continues; a grammar error stops the parse. Any
//! diagnostic turns the result into a [`ParseError`], and the partially
//! built tree is dropped.

mod actions;
pub mod errors;
mod lexer;
mod options;
#[allow(clippy::module_inception)]
mod parser;
mod token_kind;

use tracing::{debug, warn};

use crate::ast::Constraint;

pub use actions::ParseState;
pub use errors::{ErrorCode, ParseError, RelatedInfo, SyntaxError};
pub use lexer::{Lexer, Token, is_word_char, tokenize};
pub use options::ParseOptions;
pub use parser::{Parse, parse_source};
pub use token_kind::TokenKind;

/// Parse a constraint expression with default limits.
pub fn parse(input: &str) -> Result<Constraint, ParseError> {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a constraint expression.
///
/// Fails if any diagnostic was recorded; the error carries all of them and
/// its message is the first one in source order.
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Constraint, ParseError> {
    let Parse { constraint, errors } = parse_source(input, options);
    match ParseError::from_diagnostics(errors) {
        Some(error) => {
            warn!(input, code = %error.code, message = %error.message, "malformed constraint expression");
            Err(error)
        }
        None => {
            debug!(
                input,
                projections = constraint.projections.len(),
                selections = constraint.selections.len(),
                "parsed constraint"
            );
            Ok(constraint)
        }
    }
}
