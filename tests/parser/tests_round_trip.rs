//! Rendering parsed constraints and reparsing the rendering.

use rstest::rstest;

use crate::helpers::constraint_helpers::normalize;

#[rstest]
#[case("temp[0:2:10],salinity&depth>100")]
#[case("a.b.c")]
#[case("a[1][2:3][0:5:20]")]
#[case("f(a,1,2.5,\"s\")")]
#[case("&x={1,2,3}")]
#[case("&x=~\"a\\\"b\"")]
#[case("&t>=-1.25e-7")]
#[case("&f(a)&g()")]
#[case("v[0:1:9]")]
#[case("v[4:4]")]
#[case("v[3:100:5]")]
#[case("?lat , lon&lat<=10.0")]
#[case("&s=\"tab\\there\\x01\"")]
#[case("&x=-0.0")]
#[case("&x=-0")]
fn test_render_is_idempotent(#[case] input: &str) {
    let once = normalize(input);
    let twice = normalize(&once);
    assert_eq!(once, twice, "input: {input}");
}

#[rstest]
#[case::unit_stride("v[0:1:9]", "v[0:9]")]
#[case::single_element("v[4:4]", "v[4]")]
#[case::stride_past_last("v[3:100:5]", "v[3]")]
#[case::float_trailing_zero("&x=10.0", "&x=10")]
#[case::query_marker("?a", "a")]
#[case::negative_zero("&x=-0.0", "&x=-0.0")]
#[case::spaces(" a , b & c = 1 ", "a,b&c=1")]
fn test_normalization(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}
