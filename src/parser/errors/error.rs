//! Diagnostic and failure types produced while parsing
//!
//! - [`SyntaxError`]: one diagnostic with code, location, optional hint and
//!   related locations
//! - [`ParseError`]: the failure returned by a top-level parse, carrying
//!   every diagnostic that was recorded

use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;

/// Related location information for an error
///
/// Used to point to related source locations, e.g.,
/// "'[' opened here" pointing to the opening bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Description of this related location
    pub message: String,
    /// Source range
    pub range: TextRange,
}

impl RelatedInfo {
    /// Create a new related info
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A diagnostic recorded by the lexer or parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    /// Related source locations
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    /// Create a new syntax error with minimal information
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            hint: None,
            related: vec![],
        }
    }

    /// Create an error carrying the code's default message
    pub fn from_code(code: ErrorCode, range: TextRange) -> Self {
        Self::new(code.default_message(), range, code)
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Add related information
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        let mut result = format!(
            "{}: {} at {}..{}",
            self.code,
            self.message,
            u32::from(self.range.start()),
            u32::from(self.range.end())
        );
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

/// A constraint expression failed to parse.
///
/// `message` is the first recorded diagnostic; `diagnostics` holds all of
/// them in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub diagnostics: Vec<SyntaxError>,
}

impl ParseError {
    /// Build from recorded diagnostics; `None` when there are none.
    pub fn from_diagnostics(diagnostics: Vec<SyntaxError>) -> Option<Self> {
        let first = diagnostics.first()?;
        Some(Self {
            code: first.code,
            message: first.message.clone(),
            diagnostics,
        })
    }
}
