//! Rendering nodes back to DAP constraint syntax.
//!
//! Rendering normalizes: single-element slices print as `[i]`, unit-stride
//! slices as `[first:last]`, and segments whose slices are all whole drop
//! their brackets entirely.

mod literals;
mod options;
mod raw;

use std::fmt;
use std::fmt::Write;

use crate::ast::{
    Constant, Constraint, Function, Node, NodeRef, Operator, Projection, Segment, Selection,
    Slice, Value, Var,
};

pub use options::RenderOptions;
pub use raw::{dump_raw, dump_raw_list};

/// Render a node as constraint text.
pub trait ToDap {
    /// Append the rendering of `self` to `buf`.
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions);

    /// Render with default options.
    fn to_dap_string(&self) -> String {
        let mut buf = String::new();
        self.to_buffer(&mut buf, &RenderOptions::default());
        buf
    }
}

impl ToDap for Slice {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        let decl = if options.verbose {
            format!("/{}", self.declsize)
        } else {
            String::new()
        };
        let _ = if self.count == 1 {
            write!(buf, "[{}{}]", self.first, decl)
        } else if self.stride == 1 {
            write!(buf, "[{}:{}{}]", self.first, self.last(), decl)
        } else {
            write!(buf, "[{}:{}:{}{}]", self.first, self.stride, self.last(), decl)
        };
    }
}

impl ToDap for Segment {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        buf.push_str(if self.name.is_empty() { "<unknown>" } else { &self.name });
        let whole = self.is_whole();
        if options.verbose && whole {
            buf.push('*');
        }
        if options.verbose || !whole {
            for slice in &self.slices {
                slice.to_buffer(buf, options);
            }
        }
    }
}

impl ToDap for Var {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        list_to_buffer(&self.segments, buf, ".", options);
    }
}

impl ToDap for Function {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        buf.push_str(&self.name);
        buf.push('(');
        list_to_buffer(&self.args, buf, ",", options);
        buf.push(')');
    }
}

impl ToDap for Constant {
    fn to_buffer(&self, buf: &mut String, _options: &RenderOptions) {
        match self {
            Self::Str(text) => literals::quote_string(text, buf),
            Self::Int(value) => {
                let _ = write!(buf, "{value}");
            }
            Self::Float(value) => buf.push_str(&literals::format_float(*value)),
        }
    }
}

impl ToDap for Value {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        match self {
            Self::Constant(c) => c.to_buffer(buf, options),
            Self::Var(v) => v.to_buffer(buf, options),
            Self::Function(f) => f.to_buffer(buf, options),
        }
    }
}

impl ToDap for Projection {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        match self {
            Self::Var(v) => v.to_buffer(buf, options),
            Self::Function(f) => f.to_buffer(buf, options),
        }
    }
}

impl ToDap for Selection {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        self.lhs.to_buffer(buf, options);
        if self.operator == Operator::Nil {
            return;
        }
        buf.push_str(self.operator.as_str());
        let braced = self.rhs.len() > 1;
        if braced {
            buf.push('{');
        }
        list_to_buffer(&self.rhs, buf, ",", options);
        if braced {
            buf.push('}');
        }
    }
}

impl ToDap for Constraint {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        list_to_buffer(&self.projections, buf, ",", options);
        if !self.selections.is_empty() {
            // `&` prefixes every clause, including the first
            buf.push('&');
            list_to_buffer(&self.selections, buf, "&", options);
        }
    }
}

impl ToDap for NodeRef<'_> {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        match *self {
            Self::Slice(n) => n.to_buffer(buf, options),
            Self::Segment(n) => n.to_buffer(buf, options),
            Self::Var(n) => n.to_buffer(buf, options),
            Self::Function(n) => n.to_buffer(buf, options),
            Self::Constant(n) => n.to_buffer(buf, options),
            Self::Value(n) => n.to_buffer(buf, options),
            Self::Projection(n) => n.to_buffer(buf, options),
            Self::Selection(n) => n.to_buffer(buf, options),
            Self::Constraint(n) => n.to_buffer(buf, options),
        }
    }
}

impl ToDap for Node {
    fn to_buffer(&self, buf: &mut String, options: &RenderOptions) {
        self.as_node_ref().to_buffer(buf, options);
    }
}

/// Append `items` joined by `sep`.
pub fn list_to_buffer<T: ToDap>(items: &[T], buf: &mut String, sep: &str, options: &RenderOptions) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            buf.push_str(sep);
        }
        item.to_buffer(buf, options);
    }
}

pub fn list_to_string<T: ToDap>(items: &[T], sep: &str) -> String {
    let mut buf = String::new();
    list_to_buffer(items, &mut buf, sep, &RenderOptions::default());
    buf
}

/// Projection list as it appears in a request URL.
pub fn build_projection_string(projections: &[Projection]) -> String {
    list_to_string(projections, ",")
}

/// Selection clauses joined by `&`, without the leading `&`.
pub fn build_selection_string(selections: &[Selection]) -> String {
    list_to_string(selections, "&")
}

pub fn build_constraint_string(constraint: &Constraint) -> String {
    constraint.to_dap_string()
}

macro_rules! impl_display_via_dap {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.to_dap_string())
                }
            }
        )*
    };
}

impl_display_via_dap!(
    Slice, Segment, Var, Function, Constant, Value, Projection, Selection, Constraint, Node
);
