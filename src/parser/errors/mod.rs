//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Diagnostics with source ranges, hints and related locations
//! - The top-level [`ParseError`] surfaced by `parse`

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ParseError, RelatedInfo, SyntaxError};
