//! Folding duplicate variable projections into one.
//!
//! Two projection lists (typically from two independently parsed constraint
//! expressions) are concatenated, and every later projection of a variable
//! path is merged into the first projection of that path by composing their
//! slices with [`Slice::merge`](crate::ast::Slice::merge). Function
//! projections pass through untouched.
//!
//! [`dedupe_projections`] and [`restrict_projection`] serve a client that
//! fetches one variable at a time under a user constraint.

mod path;
mod restrict;


use tracing::debug;

use crate::ast::{Constraint, InvalidCoordinates, Projection, Var};
use crate::render::{build_projection_string, list_to_string};

pub use path::{same_path, same_slicing};
pub use restrict::{dedupe_projections, restrict_projection};

/// Merge `addition`'s slicing into `merged`, segment by segment.
///
/// Matching axes are composed pairwise; when `addition` has more axes at a
/// segment position the extra slices are copied unchanged. Either every
/// slice merge succeeds or `merged` is left untouched.
pub fn merge_vars(merged: &mut Var, addition: &Var) -> Result<(), InvalidCoordinates> {
    let mut staged = merged.clone();
    for (segment, added) in staged.segments.iter_mut().zip(&addition.segments) {
        for (axis, slice) in added.slices.iter().enumerate() {
            match segment.slices.get_mut(axis) {
                Some(current) => {
                    current.merge(slice)?;
                }
                None => segment.slices.push(*slice),
            }
        }
        segment.slices_defined |= added.slices_defined;
    }
    *merged = staged;
    Ok(())
}

/// Merge `src` into `dst`, folding projections of the same variable path.
///
/// The result holds one projection per distinct variable path plus every
/// function projection, in first-seen order (`dst` first, then `src`).
/// `src` is only read. On error `dst` is left exactly as it was.
pub fn merge_projection_lists(
    dst: &mut Vec<Projection>,
    src: &[Projection],
) -> Result<(), InvalidCoordinates> {
    debug!(
        dst = %build_projection_string(dst),
        src = %build_projection_string(src),
        "merging projection lists"
    );

    let mut out: Vec<Projection> = Vec::with_capacity(dst.len() + src.len());
    for candidate in dst.iter().chain(src) {
        let Projection::Var(var) = candidate else {
            out.push(candidate.clone());
            continue;
        };
        let target = out.iter_mut().find_map(|p| match p {
            Projection::Var(existing) if existing.same_path(var) => Some(existing),
            _ => None,
        });
        match target {
            Some(existing) => merge_vars(existing, var).inspect_err(|err| {
                debug!(projection = %var, %err, "projection merge rejected");
            })?,
            None => out.push(candidate.clone()),
        }
    }

    debug!(merged = %list_to_string(&out, ","), "merged projection lists");
    *dst = out;
    Ok(())
}

/// Merge the projections of `src` into `dst` and append `src`'s selections.
///
/// On error `dst` is left unchanged.
pub fn merge_constraints(dst: &mut Constraint, src: &Constraint) -> Result<(), InvalidCoordinates> {
    merge_projection_lists(&mut dst.projections, &src.projections)?;
    dst.selections.extend(src.selections.iter().cloned());
    Ok(())
}
