//! Recursive descent parser for DAP constraint expressions
//!
//! Drives the lexer and hands every reduced rule to the semantic actions in
//! [`ParseState`]. Parsing stops at the first grammar error; errors raised by
//! the lexer or by actions are recorded and parsing carries on.

use text_size::{TextRange, TextSize};

use super::actions::ParseState;
use super::errors::{ErrorCode, RelatedInfo, SyntaxError};
use super::lexer::{Lexer, Token};
use super::options::ParseOptions;
use super::token_kind::TokenKind;
use crate::ast::{Constraint, Function, Operator, Projection, Segment, Selection, Slice, Value};
use crate::base::MAX_VAR_DIMS;

/// Outcome of driving the grammar over one input
#[derive(Debug)]
pub struct Parse {
    pub constraint: Constraint,
    /// All diagnostics, ordered by source position
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a constraint expression, collecting diagnostics.
///
/// The returned constraint is only meaningful when [`Parse::ok`] holds.
pub fn parse_source(input: &str, options: ParseOptions) -> Parse {
    let mut parser = Parser::new(input, options);
    let constraint = match parser.parse_constraint() {
        Ok(constraint) => constraint,
        Err(error) => {
            parser.state.error(error);
            Constraint::default()
        }
    };
    parser.finish(constraint)
}

type PResult<T> = Result<T, SyntaxError>;

/// The parser state
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    /// End of the most recently consumed token
    last_end: TextSize,
    state: ParseState,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, options: ParseOptions) -> Self {
        let mut lexer = Lexer::with_options(input, options);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            last_end: TextSize::new(0),
            state: ParseState::new(options),
        }
    }

    fn finish(mut self, constraint: Constraint) -> Parse {
        let mut errors = self.lexer.take_errors();
        errors.extend(self.state.into_errors());
        errors.sort_by_key(|e| e.range.start());
        Parse { constraint, errors }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn range(&self) -> TextRange {
        self.current.range
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Token<'a> {
        let next = self.lexer.next_token();
        let token = std::mem::replace(&mut self.current, next);
        self.last_end = token.range.end();
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect_word(&mut self, what: &str) -> PResult<Token<'a>> {
        if self.at(TokenKind::WORD) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Consume the closing delimiter for `open`.
    fn expect_close(&mut self, close: TokenKind, open: &Token<'_>, code: ErrorCode) -> PResult<()> {
        if self.eat(close) {
            return Ok(());
        }
        let related = RelatedInfo::new(format!("{} opened here", open.kind.describe()), open.range);
        let error = if self.at(TokenKind::EOF) {
            SyntaxError::from_code(code, self.range())
        } else {
            SyntaxError::new(
                format!("expected {}, found '{}'", close.describe(), self.lexer.last_text()),
                self.range(),
                ErrorCode::E0902,
            )
        };
        Err(error
            .with_hint(format!("add {} to close it", close.describe()))
            .with_related(related))
    }

    fn unexpected(&self, what: &str) -> SyntaxError {
        if self.at(TokenKind::EOF) {
            SyntaxError::new(format!("expected {what}, found end of input"), self.range(), ErrorCode::E0902)
        } else {
            SyntaxError::new(
                format!("expected {what}, found '{}'", self.lexer.last_text()),
                self.range(),
                ErrorCode::E0901,
            )
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    /// constraint: `['?'] [projection (',' projection)*] ('&' clause)*`
    fn parse_constraint(&mut self) -> PResult<Constraint> {
        self.eat(TokenKind::QUESTION);

        let mut projections = Vec::new();
        if !self.at(TokenKind::AMP) && !self.at(TokenKind::EOF) {
            loop {
                let range = self.range();
                let projection = self.parse_projection()?;
                self.state.push(&mut projections, projection, range);
                if !self.eat(TokenKind::COMMA) {
                    break;
                }
            }
        }

        let mut selections = Vec::new();
        while self.eat(TokenKind::AMP) {
            let range = self.range();
            let selection = self.parse_clause()?;
            self.state.push(&mut selections, selection, range);
        }

        if !self.at(TokenKind::EOF) {
            return Err(SyntaxError::new(
                format!("unexpected '{}' after constraint", self.lexer.last_text()),
                self.range(),
                ErrorCode::E0204,
            )
            .with_hint("separate projections with ',' and selections with '&'"));
        }

        Ok(self.state.constraint(projections, selections))
    }

    /// projection: `function | segment ('.' segment)*`
    fn parse_projection(&mut self) -> PResult<Projection> {
        let name = self.expect_word("a variable or function name")?;
        let value = self.parse_reference(name)?;
        Ok(self.state.projection(value))
    }

    /// The rest of a variable path or function call whose first name has
    /// been consumed.
    fn parse_reference(&mut self, name: Token<'a>) -> PResult<Value> {
        if self.at(TokenKind::L_PAREN) {
            return self.parse_call(name).map(Value::Function);
        }

        let mut segments = Vec::new();
        let mut name = name;
        loop {
            let range = name.range;
            let segment = self.parse_segment(name)?;
            self.state.push(&mut segments, segment, range);
            if !self.eat(TokenKind::DOT) {
                break;
            }
            name = self.expect_word("a segment name")?;
        }
        Ok(Value::Var(self.state.var(segments)))
    }

    /// segment: `WORD range*`
    fn parse_segment(&mut self, name: Token<'a>) -> PResult<Segment> {
        let mut slices: Option<Vec<Slice>> = None;
        while self.at(TokenKind::L_BRACKET) {
            let slice = self.parse_range()?;
            let list = slices.get_or_insert_with(Vec::new);
            // One past the limit is kept so the segment action reports it.
            if list.len() <= MAX_VAR_DIMS {
                list.push(slice);
            }
        }
        let range = TextRange::new(name.range.start(), self.last_end);
        Ok(self.state.segment(name.text(), slices, range))
    }

    /// range: `'[' index [':' index [':' index]] ']'`
    fn parse_range(&mut self) -> PResult<Slice> {
        let open = self.bump();
        let first = self.expect_index()?;
        let (stride, last) = if self.eat(TokenKind::COLON) {
            let second = self.expect_index()?;
            if self.eat(TokenKind::COLON) {
                (Some(second), Some(self.expect_index()?))
            } else {
                (None, Some(second))
            }
        } else {
            (None, None)
        };
        self.expect_close(TokenKind::R_BRACKET, &open, ErrorCode::E0201)?;
        Ok(self.state.range(&first, stride.as_ref(), last.as_ref()))
    }

    fn expect_index(&mut self) -> PResult<Token<'a>> {
        if self.at(TokenKind::NUMBER) || self.at(TokenKind::WORD) {
            Ok(self.bump())
        } else {
            Err(self.unexpected("a range index"))
        }
    }

    /// function: `WORD '(' [value (',' value)*] ')'`
    fn parse_call(&mut self, name: Token<'a>) -> PResult<Function> {
        let open = self.bump();
        let mut args = Vec::new();
        if !self.at(TokenKind::R_PAREN) {
            loop {
                let range = self.range();
                let arg = self.parse_value()?;
                self.state.push(&mut args, arg, range);
                if !self.eat(TokenKind::COMMA) {
                    break;
                }
            }
        }
        self.expect_close(TokenKind::R_PAREN, &open, ErrorCode::E0202)?;
        Ok(self.state.function(name.text(), args))
    }

    /// value: `NUMBER | STRING | function | var`
    fn parse_value(&mut self) -> PResult<Value> {
        match self.current.kind {
            TokenKind::NUMBER | TokenKind::STRING => {
                let token = self.bump();
                Ok(Value::Constant(self.state.constant(token.text(), token.kind, token.range)))
            }
            TokenKind::WORD => {
                let name = self.bump();
                self.parse_reference(name)
            }
            _ => {
                let found = if self.at(TokenKind::EOF) {
                    "end of input".to_string()
                } else {
                    format!("'{}'", self.lexer.last_text())
                };
                Err(SyntaxError::new(
                    format!("missing operand, found {found}"),
                    self.range(),
                    ErrorCode::E0402,
                ))
            }
        }
    }

    /// clause: `value op value | value op '{' value (',' value)* '}' | function`
    fn parse_clause(&mut self) -> PResult<Selection> {
        let lhs = self.parse_value()?;
        let Some(operator) = self.parse_operator()? else {
            if matches!(lhs, Value::Function(_)) {
                return Ok(self.state.selection(lhs, Operator::Nil, Vec::new()));
            }
            return Err(SyntaxError::from_code(ErrorCode::E0403, self.range())
                .with_hint("expected one of = != > >= < <= =~"));
        };

        let mut rhs = Vec::new();
        if self.at(TokenKind::L_BRACE) {
            let open = self.bump();
            loop {
                let range = self.range();
                let value = self.parse_value()?;
                self.state.push(&mut rhs, value, range);
                if !self.eat(TokenKind::COMMA) {
                    break;
                }
            }
            self.expect_close(TokenKind::R_BRACE, &open, ErrorCode::E0203)?;
        } else {
            rhs.push(self.parse_value()?);
        }
        Ok(self.state.selection(lhs, operator, rhs))
    }

    /// Relational operator, assembled from single-character tokens.
    /// `None` when no operator starts here.
    fn parse_operator(&mut self) -> PResult<Option<Operator>> {
        let operator = match self.current.kind {
            TokenKind::EQ => {
                self.bump();
                if self.eat(TokenKind::TILDE) { Operator::Re } else { Operator::Eq }
            }
            TokenKind::BANG => {
                let bang = self.bump();
                if !self.eat(TokenKind::EQ) {
                    return Err(SyntaxError::new("expected '=' after '!'", bang.range, ErrorCode::E0403));
                }
                Operator::Neq
            }
            TokenKind::GT => {
                self.bump();
                if self.eat(TokenKind::EQ) { Operator::Ge } else { Operator::Gt }
            }
            TokenKind::LT => {
                self.bump();
                if self.eat(TokenKind::EQ) { Operator::Le } else { Operator::Lt }
            }
            _ => return Ok(None),
        };
        Ok(Some(operator))
    }
}
