//! Node model operations on parsed trees.

use dapce::render::{RenderOptions, ToDap, dump_raw};
use dapce::{Node, NodeRef, Projection, Slice, Sort, collect_nodes};
use rstest::rstest;

use crate::helpers::constraint_helpers::parse_ok;

#[rstest]
#[case(Sort::Projection, 3)]
#[case(Sort::Selection, 2)]
#[case(Sort::Segment, 5)]
#[case(Sort::Function, 2)]
#[case(Sort::Constant, 2)]
fn test_collect_by_sort(#[case] sort: Sort, #[case] expected: usize) {
    let c = parse_ok("a.b[0:3],c,f(d)&e>1&g(2)");
    let nodes = collect_nodes(NodeRef::Constraint(&c), Some(sort));
    assert_eq!(nodes.len(), expected);
    assert!(nodes.iter().all(|n| n.sort() == sort));
}

#[test]
fn test_collect_visits_each_node_once() {
    let c = parse_ok("a,b&a=b");
    let all = collect_nodes(NodeRef::Constraint(&c), None);
    let mut ids: Vec<_> = all.iter().map(NodeRef::identity).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), all.len());
}

#[test]
fn test_clone_of_parsed_tree_is_independent() {
    let original = parse_ok("temp[0:2:10],salinity&depth>100");
    let mut copy = original.clone();
    if let Projection::Var(var) = &mut copy.projections[0] {
        var.segments[0].slices[0] = Slice::new(1, 1, 1);
        var.segments[0].name.clear();
    }
    copy.selections.clear();
    assert_eq!(original.to_dap_string(), "temp[0:2:10],salinity&depth>100");
    assert_eq!(copy.to_dap_string(), "<unknown>[1],salinity");
}

#[test]
fn test_node_wraps_any_sort() {
    let c = parse_ok("x[2]");
    let node = Node::from(c.projections[0].clone());
    assert_eq!(node.sort(), Sort::Projection);
    assert_eq!(node.to_string(), "x[2]");
    assert_eq!(node.as_node_ref().children().len(), 1);
}

#[test]
fn test_whole_segments_after_qualifying_sizes() {
    let mut c = parse_ok("a,b[0:4]");
    for projection in &mut c.projections {
        if let Projection::Var(var) = projection {
            for segment in &mut var.segments {
                segment.qualify_sizes(&[10]);
            }
        }
    }
    // `a` becomes whole and drops its brackets; `b` keeps its range
    assert_eq!(c.to_dap_string(), "a,b[0:4]");
    let verbose = {
        let mut buf = String::new();
        c.to_buffer(&mut buf, &RenderOptions::verbose());
        buf
    };
    assert_eq!(verbose, "a*[0:9/10],b[0:4/10]");
}

#[test]
fn test_raw_dump_of_parsed_slice() {
    let c = parse_ok("v[0:2:10]");
    let segments = collect_nodes(NodeRef::Constraint(&c), Some(Sort::Segment));
    let NodeRef::Segment(segment) = segments[0] else { unreachable!() };
    assert_eq!(
        dump_raw(NodeRef::Slice(&segment.slices[0])),
        "{SLICE [first=0 count=6 stride=2 len=11 stop=11 size=0]}"
    );
}
