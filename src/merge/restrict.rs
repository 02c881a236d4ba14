//! Cleaning up a projection list and narrowing it to one variable.

use tracing::{debug, warn};

use super::merge_vars;
use super::path::same_slicing;
use crate::ast::{InvalidCoordinates, Projection, Var};

/// Drop every later projection of a variable path already in `projections`.
///
/// The first occurrence wins and no slices are composed. A duplicate whose
/// slicing differs from the one kept is reported as malformed, since one of
/// the two requests is silently lost. Function projections are never
/// compared. Returns how many projections were removed.
pub fn dedupe_projections(projections: &mut Vec<Projection>) -> usize {
    let before = projections.len();
    let mut kept: Vec<Projection> = Vec::with_capacity(before);
    for projection in projections.drain(..) {
        if let Projection::Var(var) = &projection {
            let first = kept.iter().find_map(|p| match p {
                Projection::Var(existing) if existing.same_path(var) => Some(existing),
                _ => None,
            });
            if let Some(existing) = first {
                if !same_slicing(&existing.segments, &var.segments) {
                    warn!(
                        kept = %existing,
                        dropped = %var,
                        "malformed projection: same variable with different slicing"
                    );
                }
                continue;
            }
        }
        kept.push(projection);
    }
    *projections = kept;
    before - projections.len()
}

/// Build the single projection to fetch `var` under `projections`.
///
/// When the list holds a projection of the same path, `var`'s slicing is
/// read as a subset of it and composed into a copy of that projection.
/// Otherwise `var` is used as given. `projections` is never modified.
pub fn restrict_projection(
    projections: &[Projection],
    var: &Var,
) -> Result<Projection, InvalidCoordinates> {
    let matching = projections.iter().find_map(|p| match p {
        Projection::Var(candidate) if candidate.same_path(var) => Some(candidate),
        _ => None,
    });
    let Some(matching) = matching else {
        return Ok(Projection::Var(var.clone()));
    };

    let mut restricted = matching.clone();
    merge_vars(&mut restricted, var)?;
    debug!(constraint = %matching, request = %var, result = %restricted, "restricted projection");
    Ok(Projection::Var(restricted))
}
