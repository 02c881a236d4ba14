//! Structural debug dump showing every field of every node.

use std::fmt::Write;

use crate::ast::{Constant, NodeRef, Operator, Projection, Value};

pub fn dump_raw(node: NodeRef<'_>) -> String {
    let mut buf = String::new();
    dump_node(node, &mut buf);
    buf
}

pub fn dump_raw_list<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = NodeRef<'a>>,
{
    let mut buf = String::new();
    dump_list(nodes, &mut buf);
    buf
}

fn dump_list<'a>(nodes: impl IntoIterator<Item = NodeRef<'a>>, buf: &mut String) {
    buf.push('(');
    for (i, node) in nodes.into_iter().enumerate() {
        if i > 0 {
            buf.push(',');
        }
        dump_node(node, buf);
    }
    buf.push(')');
}

fn dump_node(node: NodeRef<'_>, buf: &mut String) {
    buf.push('{');
    buf.push_str(node.sort().name());

    match node {
        NodeRef::Slice(s) => {
            let _ = write!(
                buf,
                " [first={} count={} stride={} len={} stop={} size={}]",
                s.first, s.count, s.stride, s.length, s.stop, s.declsize
            );
        }
        NodeRef::Segment(seg) => {
            let name = if seg.name.is_empty() { "<unknown>" } else { &seg.name };
            let _ = write!(
                buf,
                " name={} rank={} defined={} declsized={}",
                name,
                seg.rank(),
                u8::from(seg.slices_defined),
                u8::from(seg.slices_declsized)
            );
            if seg.rank() > 0 {
                buf.push_str(" slices=");
                for slice in &seg.slices {
                    dump_node(NodeRef::Slice(slice), buf);
                }
            }
        }
        NodeRef::Var(var) => {
            buf.push_str(" segments=");
            dump_list(var.segments.iter().map(NodeRef::Segment), buf);
        }
        NodeRef::Function(fcn) => {
            let _ = write!(buf, " name={} args=", fcn.name);
            dump_list(fcn.args.iter().map(NodeRef::Value), buf);
        }
        NodeRef::Constant(c) => match c {
            Constant::Str(text) => {
                let _ = write!(buf, " discrim=STR value=|{text}|");
            }
            Constant::Int(v) => {
                let _ = write!(buf, " discrim=INT value={v}");
            }
            Constant::Float(v) => {
                let _ = write!(buf, " discrim=FLOAT value={v}");
            }
        },
        NodeRef::Value(value) => {
            let inner = match value {
                Value::Constant(c) => NodeRef::Constant(c),
                Value::Var(v) => NodeRef::Var(v),
                Value::Function(f) => NodeRef::Function(f),
            };
            let _ = write!(buf, " discrim={}", inner.sort().name());
            dump_node(inner, buf);
        }
        NodeRef::Projection(proj) => {
            let inner = match proj {
                Projection::Var(v) => NodeRef::Var(v),
                Projection::Function(f) => NodeRef::Function(f),
            };
            let _ = write!(buf, " discrim={}", inner.sort().name());
            dump_node(inner, buf);
        }
        NodeRef::Selection(sel) => {
            buf.push(' ');
            dump_node(NodeRef::Value(&sel.lhs), buf);
            if sel.operator != Operator::Nil {
                buf.push_str(sel.operator.as_str());
                dump_list(sel.rhs.iter().map(NodeRef::Value), buf);
            }
        }
        NodeRef::Constraint(con) => {
            if !con.projections.is_empty() {
                buf.push_str(" projections=");
                dump_list(con.projections.iter().map(NodeRef::Projection), buf);
            }
            if !con.selections.is_empty() {
                buf.push_str(" selections=");
                dump_list(con.selections.iter().map(NodeRef::Selection), buf);
            }
        }
    }
    buf.push('}');
}
