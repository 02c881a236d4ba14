//! Variables, function calls, projections and the constraint root.

use super::expressions::{Selection, Value};
use super::segment::Segment;

/// A fully qualified variable path, e.g. `grid.temp[0:9]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Var {
    pub segments: Vec<Segment>,
}

impl Var {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Segment names in path order.
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.name.as_str())
    }

    /// True when every segment is unsliced or whole.
    pub fn is_whole(&self) -> bool {
        self.segments.iter().all(|s| s.rank() == 0 || s.is_whole())
    }

    /// Rebase every slice of every segment to `0..count` stride 1.
    pub fn shift(&mut self) {
        for segment in &mut self.segments {
            segment.slices.iter_mut().for_each(|s| s.shift());
        }
    }
}

/// A server-side function call, `name(arg,...)`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: String,
    pub args: Vec<Value>,
}

impl Function {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// One output-inclusion clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Projection {
    Var(Var),
    Function(Function),
}

impl Default for Projection {
    fn default() -> Self {
        Self::Var(Var::default())
    }
}

impl Projection {
    pub fn as_var(&self) -> Option<&Var> {
        match self {
            Self::Var(var) => Some(var),
            Self::Function(_) => None,
        }
    }

    /// Remove the slicing from the terminal segment.
    pub fn make_whole(&mut self) {
        if let Self::Var(var) = self {
            if let Some(last) = var.segments.last_mut() {
                last.slices.clear();
            }
        }
    }

    pub fn shift(&mut self) {
        if let Self::Var(var) = self {
            var.shift();
        }
    }

    /// Function projections are never whole.
    pub fn is_whole(&self) -> bool {
        self.as_var().is_some_and(Var::is_whole)
    }
}

/// A parsed constraint expression.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    pub projections: Vec<Projection>,
    pub selections: Vec<Selection>,
}

impl Constraint {
    pub fn new(projections: Vec<Projection>, selections: Vec<Selection>) -> Self {
        Self {
            projections,
            selections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty() && self.selections.is_empty()
    }

    /// True when the constraint requests whole variables only and filters nothing.
    pub fn is_whole(&self) -> bool {
        self.selections.is_empty() && self.projections.iter().all(Projection::is_whole)
    }
}
