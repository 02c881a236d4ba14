//! Selection clauses and the values they compare.

use super::elements::{Function, Var};

/// A literal operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constant {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Default for Constant {
    fn default() -> Self {
        Self::Int(0)
    }
}

/// An operand of a selection or function call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Constant(Constant),
    Var(Var),
    Function(Function),
}

impl Default for Value {
    fn default() -> Self {
        Self::Constant(Constant::default())
    }
}

impl From<Constant> for Value {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

impl From<Var> for Value {
    fn from(var: Var) -> Self {
        Self::Var(var)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

/// Relational operators of a selection clause.
///
/// `Nil` marks a clause that is a bare boolean function call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    #[default]
    Nil,
    Eq,
    Neq,
    Ge,
    Gt,
    Le,
    Lt,
    Re,
}

static OPERATOR_STRINGS: [&str; 8] = ["?", "=", "!=", ">=", ">", "<=", "<", "=~"];

impl Operator {
    pub fn as_str(self) -> &'static str {
        OPERATOR_STRINGS[self as usize]
    }
}

/// One filter clause: `lhs op rhs` or `lhs op {rhs,...}`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub lhs: Value,
    pub operator: Operator,
    pub rhs: Vec<Value>,
}

impl Selection {
    pub fn new(lhs: Value, operator: Operator, rhs: Vec<Value>) -> Self {
        Self { lhs, operator, rhs }
    }
}
