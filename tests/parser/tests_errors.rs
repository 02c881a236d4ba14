//! Diagnostics for malformed constraint expressions.

use dapce::parser::{ErrorCode, ParseOptions, parse_with_options};
use dapce::{DceError, parse_constraint};
use rstest::rstest;

use crate::helpers::constraint_helpers::{error_codes, parse_err};

#[rstest]
#[case::zero_stride("v[0:0:5]", ErrorCode::E0301)]
#[case::last_before_first("v[5:2]", ErrorCode::E0302)]
#[case::negative_index("v[-1]", ErrorCode::E0303)]
#[case::index_at_usize_max("v[18446744073709551615]", ErrorCode::E0303)]
#[case::last_at_usize_max("v[0:18446744073709551615]", ErrorCode::E0303)]
#[case::fractional_index("v[1.5]", ErrorCode::E0303)]
#[case::unclosed_bracket("v[0:5", ErrorCode::E0201)]
#[case::unclosed_paren("f(a,b", ErrorCode::E0202)]
#[case::unclosed_brace("&x={1,2", ErrorCode::E0203)]
#[case::trailing_input("a)", ErrorCode::E0204)]
#[case::missing_operand("&x=", ErrorCode::E0402)]
#[case::missing_operator("&x", ErrorCode::E0403)]
#[case::bang_without_eq("&x!5", ErrorCode::E0403)]
#[case::unterminated_string("&x=\"abc", ErrorCode::E0102)]
#[case::bad_hex_escape("&x=\"\\xZ1\"", ErrorCode::E0101)]
#[case::leading_comma(",a", ErrorCode::E0901)]
#[case::non_ascii_projection("temp,\u{e9}sal", ErrorCode::E0901)]
#[case::non_ascii_alone("\u{e9}", ErrorCode::E0901)]
#[case::non_ascii_suffix("temp\u{e9}", ErrorCode::E0204)]
#[case::dangling_dot("a.", ErrorCode::E0902)]
fn test_first_diagnostic(#[case] input: &str, #[case] code: ErrorCode) {
    let err = parse_err(input);
    assert_eq!(err.code, code, "diagnostics: {:?}", err.diagnostics);
    assert_eq!(err.diagnostics[0].code, code);
}

#[test]
fn test_recoverable_errors_accumulate() {
    assert_eq!(
        error_codes("a[0:0:4],b[5:2],c[x]"),
        vec![ErrorCode::E0301, ErrorCode::E0302, ErrorCode::E0303]
    );
}

#[test]
fn test_lex_error_does_not_stop_parsing() {
    // The grammar error after the bad escape is still found
    assert_eq!(
        error_codes("&x=\"\\xQQ\"&y"),
        vec![ErrorCode::E0101, ErrorCode::E0403]
    );
}

#[test]
fn test_unclosed_bracket_has_related_location() {
    let err = parse_err("temp[0:2");
    let diagnostic = &err.diagnostics[0];
    assert_eq!(diagnostic.related.len(), 1);
    assert_eq!(diagnostic.related[0].message, "'[' opened here");
    assert!(diagnostic.hint.is_some());
}

#[test]
fn test_limits_are_configurable() {
    let options = ParseOptions {
        max_list_length: 2,
        ..ParseOptions::default()
    };
    let err = parse_with_options("a,b,c", options).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0404);

    let options = ParseOptions {
        max_token_length: 3,
        ..ParseOptions::default()
    };
    let err = parse_with_options("abcd", options).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0103);
}

#[test]
fn test_client_facing_message() {
    let err = parse_constraint("v[0:0:5]").unwrap_err();
    assert!(matches!(err, DceError::Parse(_)));
    assert_eq!(
        err.to_string(),
        "malformed constraint expression: E0301: illegal index for range stride"
    );
    assert_eq!(err.diagnostics().len(), 1);
}
