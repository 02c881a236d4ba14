//! Token kinds produced by the constraint lexer

/// All token kinds in a DAP constraint expression
///
/// Punctuation is lexed one character at a time; multi-character operators
/// such as `>=` and `=~` are assembled by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // LITERALS
    // =========================================================================
    STRING = 0, // "text"
    NUMBER,     // 42, -1.5e3
    WORD,       // temp, a/b%20c

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    L_BRACE,   // {
    R_BRACE,   // }
    COLON,     // :
    COMMA,     // ,
    DOT,       // .
    AMP,       // &
    EQ,        // =
    BANG,      // !
    LT,        // <
    GT,        // >
    TILDE,     // ~
    QUESTION,  // ?
    PUNCT,     // any other non-space character

    // =========================================================================
    // SPECIAL
    // =========================================================================
    EOF,
}

impl TokenKind {
    /// Kind of a single punctuation character
    pub fn from_punct(c: char) -> Self {
        match c {
            '[' => Self::L_BRACKET,
            ']' => Self::R_BRACKET,
            '(' => Self::L_PAREN,
            ')' => Self::R_PAREN,
            '{' => Self::L_BRACE,
            '}' => Self::R_BRACE,
            ':' => Self::COLON,
            ',' => Self::COMMA,
            '.' => Self::DOT,
            '&' => Self::AMP,
            '=' => Self::EQ,
            '!' => Self::BANG,
            '<' => Self::LT,
            '>' => Self::GT,
            '~' => Self::TILDE,
            '?' => Self::QUESTION,
            _ => Self::PUNCT,
        }
    }

    pub fn is_literal(self) -> bool {
        matches!(self, Self::STRING | Self::NUMBER | Self::WORD)
    }

    /// Human-readable description used in diagnostics
    pub fn describe(self) -> &'static str {
        match self {
            Self::STRING => "string",
            Self::NUMBER => "number",
            Self::WORD => "name",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::COLON => "':'",
            Self::COMMA => "','",
            Self::DOT => "'.'",
            Self::AMP => "'&'",
            Self::EQ => "'='",
            Self::BANG => "'!'",
            Self::LT => "'<'",
            Self::GT => "'>'",
            Self::TILDE => "'~'",
            Self::QUESTION => "'?'",
            Self::PUNCT => "punctuation",
            Self::EOF => "end of input",
        }
    }
}
