//! Semantic actions run as grammar rules are reduced.
//!
//! Each action assembles one node from already-built children. Problems in
//! the input are recorded on the [`ParseState`] and a usable placeholder is
//! returned so parsing can continue.

use text_size::TextRange;

use super::errors::{ErrorCode, SyntaxError};
use super::lexer::Token;
use super::options::ParseOptions;
use super::token_kind::TokenKind;
use crate::ast::{Constant, Constraint, Function, Operator, Projection, Segment, Selection, Slice, Value, Var};
use crate::base::MAX_VAR_DIMS;

/// State shared by every action during one parse.
#[derive(Debug, Default)]
pub struct ParseState {
    options: ParseOptions,
    errors: Vec<SyntaxError>,
    list_overflowed: bool,
}

impl ParseState {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
            list_overflowed: false,
        }
    }

    pub fn error(&mut self, error: SyntaxError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    /// Append `item` unless the list is already at its length bound. Only the
    /// first overflow in a parse is reported.
    pub fn push<T>(&mut self, list: &mut Vec<T>, item: T, range: TextRange) {
        if list.len() >= self.options.max_list_length {
            if !self.list_overflowed {
                self.list_overflowed = true;
                self.error(SyntaxError::from_code(ErrorCode::E0404, range).with_hint(format!(
                    "lists are limited to {} items",
                    self.options.max_list_length
                )));
            }
            return;
        }
        list.push(item);
    }

    /// Wrap a variable or function reference as a projection.
    ///
    /// # Panics
    ///
    /// Panics if handed a constant; the grammar never projects one.
    pub fn projection(&mut self, value: Value) -> Projection {
        match value {
            Value::Var(var) => Projection::Var(var),
            Value::Function(fcn) => Projection::Function(fcn),
            Value::Constant(c) => unreachable!("constant {c:?} cannot be projected"),
        }
    }

    /// Build a segment; `slices` is `None` when no brackets followed the name.
    pub fn segment(&mut self, name: &str, slices: Option<Vec<Slice>>, range: TextRange) -> Segment {
        let Some(mut slices) = slices else {
            return Segment::new(name);
        };
        if slices.len() > MAX_VAR_DIMS {
            self.error(
                SyntaxError::from_code(ErrorCode::E0304, range)
                    .with_hint(format!("at most {MAX_VAR_DIMS} dimensions may be sliced")),
            );
            slices.truncate(MAX_VAR_DIMS);
        }
        Segment::with_slices(name, slices)
    }

    /// Build one slice from `[first]`, `[first:last]` or
    /// `[first:stride:last]`.
    pub fn range(&mut self, first: &Token<'_>, stride: Option<&Token<'_>>, last: Option<&Token<'_>>) -> Slice {
        let first_index = self.index(first);
        let stride_index = match stride {
            Some(token) => {
                let value = self.index(token);
                if value == Some(0) {
                    self.error(SyntaxError::from_code(ErrorCode::E0301, token.range));
                    Some(1)
                } else {
                    value
                }
            }
            None => Some(1),
        };
        let last_index = match last {
            Some(token) => {
                let value = self.index(token);
                if let (Some(f), Some(l)) = (first_index, value) {
                    if l < f {
                        self.error(
                            SyntaxError::from_code(ErrorCode::E0302, token.range)
                                .with_hint(format!("last index must be at least {f}")),
                        );
                    }
                }
                value
            }
            None => first_index,
        };

        let first = first_index.unwrap_or(0);
        Slice::new(first, stride_index.unwrap_or(1), last_index.unwrap_or(first))
    }

    /// Parse one range index. The largest `usize` is refused because the
    /// exclusive stop of a slice ending there would not be representable.
    fn index(&mut self, token: &Token<'_>) -> Option<usize> {
        let parsed = match token.kind {
            TokenKind::NUMBER | TokenKind::WORD => token
                .text()
                .parse::<usize>()
                .ok()
                .filter(|v| v.checked_add(1).is_some()),
            _ => None,
        };
        if parsed.is_none() {
            self.error(SyntaxError::new(
                format!("illegal range index '{}'", token.text()),
                token.range,
                ErrorCode::E0303,
            ));
        }
        parsed
    }

    /// Build a constant from a string or numeric token: integer first, then
    /// float.
    pub fn constant(&mut self, text: &str, kind: TokenKind, range: TextRange) -> Constant {
        if kind == TokenKind::STRING {
            return Constant::Str(text.to_string());
        }
        if let Ok(v) = text.parse::<i64>() {
            return Constant::Int(v);
        }
        if let Ok(v) = text.parse::<f64>() {
            return Constant::Float(v);
        }
        self.error(SyntaxError::new(
            format!("illegal numeric constant '{text}'"),
            range,
            ErrorCode::E0401,
        ));
        Constant::default()
    }

    pub fn var(&mut self, segments: Vec<Segment>) -> Var {
        Var::new(segments)
    }

    pub fn function(&mut self, name: &str, args: Vec<Value>) -> Function {
        Function::new(name, args)
    }

    pub fn selection(&mut self, lhs: Value, operator: Operator, rhs: Vec<Value>) -> Selection {
        Selection::new(lhs, operator, rhs)
    }

    pub fn constraint(&mut self, projections: Vec<Projection>, selections: Vec<Selection>) -> Constraint {
        Constraint::new(projections, selections)
    }
}
