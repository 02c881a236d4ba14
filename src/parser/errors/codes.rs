//! Error code definitions for constraint diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (string literals, token length)
//! - E02xx: Structural errors (brackets, parentheses, braces)
//! - E03xx: Range errors (slice indices)
//! - E04xx: Value errors (constants, operators, lists)
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for constraint diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Malformed `\xHH` escape in a string literal
    E0101,
    /// Unterminated string literal
    E0102,
    /// Token exceeds the configured length bound
    E0103,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Unclosed bracket `[`
    E0201,
    /// Unclosed parenthesis `(`
    E0202,
    /// Unclosed brace `{`
    E0203,
    /// Input left over after a complete constraint
    E0204,

    // =========================================================================
    // E03xx: Range errors
    // =========================================================================
    /// Zero stride
    E0301,
    /// Last index before first index
    E0302,
    /// Index is not an unsigned integer
    E0303,
    /// Too many dimensions on one segment
    E0304,

    // =========================================================================
    // E04xx: Value errors
    // =========================================================================
    /// Constant text is not a number
    E0401,
    /// Missing operand
    E0402,
    /// Unknown relational operator
    E0403,
    /// List grew past the configured bound
    E0404,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 => "structural error",
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 => "range error",
            Self::E0401 | Self::E0402 | Self::E0403 | Self::E0404 => "value error",
            Self::E0901 | Self::E0902 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "illegal \\xDD in string",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "token too long",
            Self::E0201 => "unclosed bracket",
            Self::E0202 => "unclosed parenthesis",
            Self::E0203 => "unclosed brace",
            Self::E0204 => "unexpected trailing input",
            Self::E0301 => "illegal index for range stride",
            Self::E0302 => "illegal index for range last index",
            Self::E0303 => "illegal range index",
            Self::E0304 => "too many dimensions",
            Self::E0401 => "illegal numeric constant",
            Self::E0402 => "missing operand",
            Self::E0403 => "unknown operator",
            Self::E0404 => "list too long",
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
        }
    }

    /// Check if this is a lexical error
    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0102 | Self::E0103)
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
