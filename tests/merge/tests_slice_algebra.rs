//! Slice composition: worked examples and boundary rejection.

#![allow(clippy::unwrap_used)]

use dapce::{InvalidCoordinates, Slice};
use rstest::rstest;

use crate::helpers::constraint_helpers::raw_slice;

#[rstest]
#[case::strided_in_strided(raw_slice(3, 1, 25, 26), raw_slice(2, 3, 5, 8), raw_slice(6, 10, 13, 23))]
#[case::unit_in_strided(raw_slice(2, 1, 9, 10), raw_slice(1, 2, 3, 5), raw_slice(2, 5, 5, 10))]
#[case::strided_in_strided_tail(raw_slice(2, 1, 17, 18), raw_slice(2, 3, 5, 8), raw_slice(4, 7, 9, 16))]
#[case::whole_of_strided(raw_slice(2, 1, 9, 10), raw_slice(1, 0, 5, 5), raw_slice(2, 1, 9, 10))]
#[case::single_of_pair(raw_slice(1, 0, 2, 2), raw_slice(1, 0, 1, 1), raw_slice(1, 0, 1, 1))]
#[case::same_extent(raw_slice(1, 0, 3, 3), raw_slice(1, 0, 3, 2), raw_slice(1, 0, 3, 3))]
fn test_worked_examples(#[case] dst: Slice, #[case] src: Slice, #[case] expected: Slice) {
    let mut merged = dst;
    let result = merged.merge(&src).unwrap();
    assert_eq!(result, expected);
    assert_eq!(merged, expected);
}

#[test]
fn test_first_worked_example_count() {
    let mut dst = raw_slice(3, 1, 25, 26);
    dst.merge(&raw_slice(2, 3, 5, 8)).unwrap();
    assert_eq!(dst.count, 3);
}

#[rstest]
#[case::start_past_stop(Slice::new(0, 1, 9), Slice::new(10, 1, 12))]
#[case::stop_past_stop(Slice::new(0, 1, 9), Slice::new(5, 1, 14))]
#[case::strided_overrun(Slice::new(0, 2, 10), Slice::new(0, 1, 8))]
fn test_out_of_range_is_rejected(#[case] dst: Slice, #[case] src: Slice) {
    let mut merged = dst;
    let err: InvalidCoordinates = merged.merge(&src).unwrap_err();
    assert_eq!(merged, dst);
    assert_eq!(err.limit, dst.stop);
    assert!(err.first >= dst.stop || err.stop > dst.stop);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(1024)]
fn test_make_whole_is_whole(#[case] declsize: usize) {
    assert!(Slice::make_whole(declsize).is_whole());
}

#[test]
fn test_parsed_slice_is_never_whole() {
    // Parsed slices have no declared size yet
    assert!(!Slice::new(0, 1, 9).is_whole());
}
