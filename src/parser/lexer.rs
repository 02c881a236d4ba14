//! Logos-based lexer for DAP constraint expressions
//!
//! logos recognizes the raw token classes; [`Lexer`] layers the DAP rules on
//! top: escape processing in strings, and numbers that run into a name are
//! re-read as names.

use std::borrow::Cow;

use logos::Logos;
use text_size::{TextRange, TextSize};
use tracing::trace;

use super::errors::{ErrorCode, SyntaxError};
use super::options::ParseOptions;
use super::token_kind::TokenKind;
use crate::base::MAX_TOKEN_LENGTH;

/// A token with its kind, decoded text, and position
///
/// `text` borrows from the source unless escape processing had to rewrite
/// a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Cow<'a, str>,
    pub range: TextRange,
}

impl Token<'_> {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    options: ParseOptions,
    last_text: String,
    errors: Vec<SyntaxError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            source: input,
            pos: 0,
            options,
            last_text: String::new(),
            errors: Vec::new(),
        }
    }

    /// Raw source text of the most recent token, truncated to
    /// [`MAX_TOKEN_LENGTH`] bytes.
    pub fn last_text(&self) -> &str {
        &self.last_text
    }

    /// Diagnostics recorded so far.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<SyntaxError> {
        std::mem::take(&mut self.errors)
    }

    /// Produce the next token, or an [`TokenKind::EOF`] token once the input
    /// is exhausted.
    pub fn next_token(&mut self) -> Token<'a> {
        let source = self.source;
        let rest = &source[self.pos..];
        let mut inner = LogosToken::lexer(rest);
        let Some(result) = inner.next() else {
            self.pos = source.len();
            return Token {
                kind: TokenKind::EOF,
                text: Cow::Borrowed(""),
                range: TextRange::empty(offset(source.len())),
            };
        };

        let span = inner.span();
        let start = self.pos + span.start;
        let mut end = self.pos + span.end;

        let mut closing = Quote::Closed;
        let kind = match result {
            Ok(LogosToken::String(quote)) => {
                closing = quote;
                if quote == Quote::Open {
                    self.errors.push(SyntaxError::from_code(
                        ErrorCode::E0102,
                        TextRange::new(offset(start), offset(end)),
                    ));
                }
                TokenKind::STRING
            }
            Ok(LogosToken::Number) => {
                let text = &source[start..end];
                let runs_into_word = source[end..].chars().next().is_some_and(is_word_char);
                if is_number(text) && !runs_into_word {
                    TokenKind::NUMBER
                } else {
                    // Re-read as a name, stopping before any '.' or exponent
                    // sign the number pattern swallowed.
                    end = start + text.bytes().take_while(|b| is_word_char(char::from(*b))).count();
                    TokenKind::WORD
                }
            }
            Ok(LogosToken::Word) => TokenKind::WORD,
            Ok(LogosToken::Punct) | Err(()) => {
                TokenKind::from_punct(source[start..end].chars().next().unwrap_or('\0'))
            }
        };

        self.pos = end;
        let raw = &source[start..end];
        let range = TextRange::new(offset(start), offset(end));
        self.remember(raw);

        if raw.len() > self.options.max_token_length {
            self.errors.push(
                SyntaxError::from_code(ErrorCode::E0103, range).with_hint(format!(
                    "tokens are limited to {} bytes",
                    self.options.max_token_length
                )),
            );
        }

        let text = if kind == TokenKind::STRING {
            let body = match closing {
                Quote::Closed => &raw[1..raw.len() - 1],
                Quote::Open => &raw[1..],
            };
            self.unescape(body, start + 1)
        } else {
            Cow::Borrowed(raw)
        };

        trace!(kind = ?kind, text = %text, "token");
        Token { kind, text, range }
    }

    fn remember(&mut self, raw: &str) {
        let mut cut = raw.len().min(MAX_TOKEN_LENGTH);
        while !raw.is_char_boundary(cut) {
            cut -= 1;
        }
        self.last_text.clear();
        self.last_text.push_str(&raw[..cut]);
    }

    /// Decode `\r \n \f \t \xHH` escapes; any other escaped character stands
    /// for itself. `base` is the byte offset of `body` in the source.
    fn unescape(&mut self, body: &'a str, base: usize) -> Cow<'a, str> {
        if !body.contains('\\') {
            return Cow::Borrowed(body);
        }

        let mut out = String::with_capacity(body.len());
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            let Some((j, escaped)) = chars.next() else {
                out.push('\\');
                break;
            };
            match escaped {
                'r' => out.push('\r'),
                'n' => out.push('\n'),
                'f' => out.push('\u{0c}'),
                't' => out.push('\t'),
                'x' => {
                    let hex = body
                        .get(j + 1..j + 3)
                        .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()));
                    match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                        Some(byte) => {
                            out.push(char::from(byte));
                            chars.next();
                            chars.next();
                        }
                        None => {
                            self.errors.push(
                                SyntaxError::from_code(
                                    ErrorCode::E0101,
                                    TextRange::new(offset(base + i), offset(base + j + 1)),
                                )
                                .with_hint("write exactly two hex digits after \\x"),
                            );
                            out.push('?');
                        }
                    }
                }
                other => out.push(other),
            }
        }
        Cow::Owned(out)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::EOF).then_some(token)
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Characters allowed in a bare word
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '/' | '%' | '\\')
}

fn is_number(text: &str) -> bool {
    text.parse::<i64>().is_ok() || text.parse::<f64>().is_ok()
}

fn offset(pos: usize) -> TextSize {
    TextSize::try_from(pos).unwrap_or(TextSize::new(u32::MAX))
}

/// Whether a string literal reached its closing quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Closed,
    Open,
}

/// Scan a string literal after its opening quote.
fn lex_string(lex: &mut logos::Lexer<LogosToken>) -> Quote {
    let rest = lex.remainder();
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                lex.bump(i + 1);
                return Quote::Closed;
            }
            _ => {}
        }
    }
    lex.bump(rest.len());
    Quote::Open
}

/// Logos token enum - raw classes before DAP reclassification
///
/// ASCII control characters and spaces are skipped between tokens. Any other
/// character outside the classes below, non-ASCII included, becomes a
/// one-character punctuation token for the grammar to reject.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[\x00-\x20\x7f]+")]
enum LogosToken {
    #[token("\"", lex_string, priority = 10)]
    String(Quote),

    #[regex(r"[+\-0-9][0-9Ee.+\-]*", priority = 4)]
    Number,

    #[regex(r"[A-Za-z0-9_/%\\+\-]+", priority = 3)]
    Word,

    #[regex(r"[^\x00-\x20\x7f]", priority = 1)]
    Punct,
}
