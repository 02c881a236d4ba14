//! Parsing complete constraint expressions into trees.

#![allow(clippy::unwrap_used)]

use dapce::{Constant, Operator, Projection, Slice, ToDap, Value, parse_constraint};

use crate::helpers::constraint_helpers::{parse_ok, var_of};

#[test]
fn test_projections_and_selection() {
    let c = parse_constraint("temp[0:2:10],salinity&depth>100").unwrap();
    assert_eq!(c.projections.len(), 2);
    assert_eq!(c.selections.len(), 1);

    let temp = var_of(&c.projections[0]);
    assert_eq!(temp.segments.len(), 1);
    assert_eq!(temp.segments[0].name, "temp");
    let slice = temp.segments[0].slices[0];
    assert_eq!((slice.first, slice.stride, slice.last()), (0, 2, 10));
    assert_eq!(slice, Slice::new(0, 2, 10));

    let salinity = var_of(&c.projections[1]);
    assert_eq!(salinity.segments[0].name, "salinity");
    assert!(salinity.segments[0].slices.is_empty());
    assert!(!salinity.segments[0].slices_defined);

    let selection = &c.selections[0];
    assert_eq!(selection.operator, Operator::Gt);
    let Value::Var(lhs) = &selection.lhs else { panic!("expected var lhs") };
    assert_eq!(lhs.path().collect::<Vec<_>>(), vec!["depth"]);
    assert_eq!(selection.rhs, vec![Value::Constant(Constant::Int(100))]);

    let rendered = c.to_dap_string();
    let temp_at = rendered.find("temp[0:2:10]").unwrap();
    let sal_at = rendered.find("salinity").unwrap();
    let sel_at = rendered.find("&depth>100").unwrap();
    assert!(temp_at < sal_at && sal_at < sel_at);
}

#[test]
fn test_url_query_marker_and_whitespace() {
    let c = parse_ok("? lat[0:10] , lon [ 5 ] & time >= 3.5");
    assert_eq!(c.to_dap_string(), "lat[0:10],lon[5]&time>=3.5");
    assert_eq!(c.selections[0].rhs[0], Value::Constant(Constant::Float(3.5)));
}

#[test]
fn test_multidimensional_and_nested() {
    let c = parse_ok("grid.data[0:3][1:2:9],grid.lat");
    let data = var_of(&c.projections[0]);
    assert_eq!(data.segments.len(), 2);
    assert_eq!(data.segments[1].rank(), 2);
    assert_eq!(data.segments[1].slices[1], Slice::new(1, 2, 9));
}

#[test]
fn test_function_projection_and_arguments() {
    let c = parse_ok("linear_scale(sst[0:4],2.5,\"K\")");
    let Projection::Function(f) = &c.projections[0] else { panic!("expected function") };
    assert_eq!(f.name, "linear_scale");
    assert!(matches!(f.args[0], Value::Var(_)));
    assert_eq!(f.args[1], Value::Constant(Constant::Float(2.5)));
    assert_eq!(f.args[2], Value::Constant(Constant::Str("K".to_string())));
}

#[test]
fn test_selection_forms() {
    let c = parse_ok("&station=\"KDEN\"&id!={1,2,3}&name=~\"^a\"&in_region(lat,lon)");
    let ops: Vec<_> = c.selections.iter().map(|s| s.operator).collect();
    assert_eq!(ops, vec![Operator::Eq, Operator::Neq, Operator::Re, Operator::Nil]);
    assert_eq!(c.selections[1].rhs.len(), 3);
    assert!(c.projections.is_empty());
}

#[test]
fn test_escaped_string_operand() {
    let c = parse_ok(r#"&s="a\"b\\c\x41""#);
    assert_eq!(c.selections[0].rhs[0], Value::Constant(Constant::Str("a\"b\\cA".to_string())));
}

#[test]
fn test_negative_and_exponent_constants() {
    let c = parse_ok("&t>-40&p<1e5");
    assert_eq!(c.selections[0].rhs[0], Value::Constant(Constant::Int(-40)));
    assert_eq!(c.selections[1].rhs[0], Value::Constant(Constant::Float(1e5)));
}
