//! Merging projection lists taken from parsed constraint expressions.

#![allow(clippy::unwrap_used)]

use dapce::merge::{dedupe_projections, merge_projection_lists, restrict_projection, same_path};
use dapce::render::build_projection_string;
use dapce::{DceError, InvalidCoordinates, ToDap, merge_constraint_expressions};
use rstest::rstest;

use crate::helpers::constraint_helpers::{parse_ok, var_of};

fn merge_texts(dst: &str, src: &str) -> Result<String, InvalidCoordinates> {
    let mut dst = parse_ok(dst).projections;
    let src = parse_ok(src).projections;
    merge_projection_lists(&mut dst, &src)?;
    Ok(build_projection_string(&dst))
}

#[rstest]
#[case::nested("A[0:9]", "A[2:4]", "A[2:4]")]
#[case::strided("A[0:2:20]", "A[1:3]", "A[2:2:6]")]
#[case::single_element("A[0:9]", "A[3]", "A[3]")]
#[case::distinct_paths("A[0:9]", "B[1:2]", "A[0:9],B[1:2]")]
#[case::first_seen_order("B,A[0:9]", "A[1:1],C", "B,A[1],C")]
#[case::functions_untouched("A[0:9]", "f(A),g(1,\"x\")", "A[0:9],f(A),g(1,\"x\")")]
#[case::function_then_var("f(A)", "A[1:2]", "f(A),A[1:2]")]
#[case::extra_axes("A[0:9]", "A[1:2][0:3]", "A[1:2][0:3]")]
#[case::dotted_paths("s.a[0:9],s.b", "s.a[2:3]", "s.a[2:3],s.b")]
#[case::src_duplicates_fold("A[0:19]", "A[0:2:19],A[1:3]", "A[2:2:6]")]
fn test_merge_lists(#[case] dst: &str, #[case] src: &str, #[case] expected: &str) {
    assert_eq!(merge_texts(dst, src).unwrap(), expected);
}

#[test]
fn test_overlapping_ranges_follow_the_algebra() {
    // [5:14] read inside [0:9] runs past element 9
    let err = merge_texts("A[0:9]", "A[5:14]").unwrap_err();
    assert_eq!(err, InvalidCoordinates { first: 5, stop: 15, limit: 10 });
}

#[test]
fn test_failed_merge_leaves_dst_unchanged() {
    let mut dst = parse_ok("B[0:3],A[0:9]").projections;
    let src = parse_ok("B[1:2],A[5:14]").projections;
    let before = dst.clone();
    assert!(merge_projection_lists(&mut dst, &src).is_err());
    assert_eq!(dst, before);
}

#[test]
fn test_same_path_ignores_slices() {
    let c = parse_ok("A[0:9],A[5:14],A.b");
    let a = var_of(&c.projections[0]);
    let b = var_of(&c.projections[1]);
    let ab = var_of(&c.projections[2]);
    assert!(same_path(&a.segments, &a.segments));
    assert!(same_path(&a.segments, &b.segments));
    assert!(same_path(&b.segments, &a.segments));
    assert!(!same_path(&a.segments, &ab.segments));
}

#[test]
fn test_merge_constraint_expressions() {
    let merged = merge_constraint_expressions("temp[0:2:10]&depth>100", "temp[1:3],sal&x=\"a\"").unwrap();
    assert_eq!(merged.to_dap_string(), "temp[2:2:6],sal&depth>100&x=\"a\"");
}

#[test]
fn test_merge_constraint_expressions_errors() {
    let err = merge_constraint_expressions("A[0:9]", "A[5:14]").unwrap_err();
    assert!(matches!(err, DceError::InvalidCoordinates(_)));
    assert!(err.diagnostics().is_empty());

    let err = merge_constraint_expressions("A[0:9]", "A[5:").unwrap_err();
    assert!(matches!(err, DceError::Parse(_)));
    assert!(err.to_string().starts_with("malformed constraint expression"));
}

#[rstest]
#[case::identical("A[0:9],A[0:9]", "A[0:9]", 1)]
#[case::different_slicing("A[0:9],B,A[2:3]", "A[0:9],B", 1)]
#[case::functions_kept("f(A),A,f(A),A[1]", "f(A),A,f(A)", 1)]
#[case::distinct("s.a,s.b,a", "s.a,s.b,a", 0)]
fn test_dedupe_projections(#[case] input: &str, #[case] expected: &str, #[case] removed: usize) {
    let mut list = parse_ok(input).projections;
    assert_eq!(dedupe_projections(&mut list), removed);
    assert_eq!(build_projection_string(&list), expected);
}

#[rstest]
#[case::composed("lat,temp[0:2:20]", "temp[1:3]", "temp[2:2:6]")]
#[case::whole_constraint("temp", "temp[1:3]", "temp[1:3]")]
#[case::not_constrained("lat", "temp[1:3]", "temp[1:3]")]
#[case::nested_path("g.temp[0:9]", "g.temp[4]", "g.temp[4]")]
fn test_restrict_projection(#[case] constraint: &str, #[case] request: &str, #[case] expected: &str) {
    let projections = parse_ok(constraint).projections;
    let request = parse_ok(request);
    let restricted = restrict_projection(&projections, var_of(&request.projections[0])).unwrap();
    assert_eq!(restricted.to_dap_string(), expected);
}

#[test]
fn test_restrict_projection_outside_constraint() {
    let projections = parse_ok("temp[0:9]").projections;
    let request = parse_ok("temp[5:14]");
    let err = restrict_projection(&projections, var_of(&request.projections[0])).unwrap_err();
    assert_eq!(err, InvalidCoordinates { first: 5, stop: 15, limit: 10 });
}
