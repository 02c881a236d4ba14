//! Structural comparison of variable paths.

use crate::ast::{Segment, Var};

/// True when both segment lists name the same variable.
///
/// Only the ordered segment names are compared; slicing is ignored.
pub fn same_path(a: &[Segment], b: &[Segment]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.name == y.name)
}

/// True when both segment lists have identical per-axis slicing, comparing
/// `first`, `count` and `stride` of every slice.
pub fn same_slicing(a: &[Segment], b: &[Segment]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            x.rank() == y.rank()
                && x.slices.iter().zip(&y.slices).all(|(s, t)| {
                    s.first == t.first && s.count == t.count && s.stride == t.stride
                })
        })
}

impl Var {
    pub fn same_path(&self, other: &Var) -> bool {
        same_path(&self.segments, &other.segments)
    }
}
