//! Constraint-expression node model.
//!
//! The closed set of node types produced by the parser:
//!
//! ```text
//! Constraint
//! ├── Projection ── Var ── Segment ── Slice
//! │             └─ Function ── Value*
//! └── Selection ── Value (lhs)
//!               └─ Value* (rhs) ── Constant | Var | Function
//! ```
//!
//! Every container owns its children by value, so cloning is a deep copy and
//! dropping a root releases the whole tree. [`Node`] and [`NodeRef`] give a
//! uniform, discriminant-tagged view for code that walks arbitrary nodes.

mod collect;
mod elements;
mod expressions;
mod segment;
pub mod slice;


pub use collect::collect_nodes;
pub use elements::{Constraint, Function, Projection, Var};
pub use expressions::{Constant, Operator, Selection, Value};
pub use segment::{Segment, SegmentIndices};
pub use slice::{InvalidCoordinates, Slice};

/// Discriminant identifying a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sort {
    Slice,
    Segment,
    Var,
    Function,
    Constant,
    Value,
    Projection,
    Selection,
    Constraint,
}

impl Sort {
    pub fn name(self) -> &'static str {
        match self {
            Self::Slice => "SLICE",
            Self::Segment => "SEGMENT",
            Self::Var => "VAR",
            Self::Function => "FCN",
            Self::Constant => "CONST",
            Self::Value => "VALUE",
            Self::Projection => "PROJECT",
            Self::Selection => "SELECT",
            Self::Constraint => "CONSTRAINT",
        }
    }
}

/// An owned node of any type.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Slice(Slice),
    Segment(Segment),
    Var(Var),
    Function(Function),
    Constant(Constant),
    Value(Value),
    Projection(Projection),
    Selection(Selection),
    Constraint(Constraint),
}

impl Node {
    /// Create a zero-initialized node of the given sort.
    pub fn create(sort: Sort) -> Self {
        match sort {
            Sort::Slice => Self::Slice(Slice::default()),
            Sort::Segment => Self::Segment(Segment::default()),
            Sort::Var => Self::Var(Var::default()),
            Sort::Function => Self::Function(Function::default()),
            Sort::Constant => Self::Constant(Constant::default()),
            Sort::Value => Self::Value(Value::default()),
            Sort::Projection => Self::Projection(Projection::default()),
            Sort::Selection => Self::Selection(Selection::default()),
            Sort::Constraint => Self::Constraint(Constraint::default()),
        }
    }

    pub fn sort(&self) -> Sort {
        self.as_node_ref().sort()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Self::Slice(n) => NodeRef::Slice(n),
            Self::Segment(n) => NodeRef::Segment(n),
            Self::Var(n) => NodeRef::Var(n),
            Self::Function(n) => NodeRef::Function(n),
            Self::Constant(n) => NodeRef::Constant(n),
            Self::Value(n) => NodeRef::Value(n),
            Self::Projection(n) => NodeRef::Projection(n),
            Self::Selection(n) => NodeRef::Selection(n),
            Self::Constraint(n) => NodeRef::Constraint(n),
        }
    }
}

/// A borrowed, non-owning view of a node of any type.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Slice(&'a Slice),
    Segment(&'a Segment),
    Var(&'a Var),
    Function(&'a Function),
    Constant(&'a Constant),
    Value(&'a Value),
    Projection(&'a Projection),
    Selection(&'a Selection),
    Constraint(&'a Constraint),
}

impl<'a> NodeRef<'a> {
    pub fn sort(&self) -> Sort {
        match self {
            Self::Slice(_) => Sort::Slice,
            Self::Segment(_) => Sort::Segment,
            Self::Var(_) => Sort::Var,
            Self::Function(_) => Sort::Function,
            Self::Constant(_) => Sort::Constant,
            Self::Value(_) => Sort::Value,
            Self::Projection(_) => Sort::Projection,
            Self::Selection(_) => Sort::Selection,
            Self::Constraint(_) => Sort::Constraint,
        }
    }

    /// Address of the referenced node.
    ///
    /// A payload may share its address with the enum wrapping it, so identity
    /// is the pair of sort and address.
    pub fn identity(&self) -> (Sort, usize) {
        let addr = match *self {
            Self::Slice(n) => std::ptr::from_ref(n).addr(),
            Self::Segment(n) => std::ptr::from_ref(n).addr(),
            Self::Var(n) => std::ptr::from_ref(n).addr(),
            Self::Function(n) => std::ptr::from_ref(n).addr(),
            Self::Constant(n) => std::ptr::from_ref(n).addr(),
            Self::Value(n) => std::ptr::from_ref(n).addr(),
            Self::Projection(n) => std::ptr::from_ref(n).addr(),
            Self::Selection(n) => std::ptr::from_ref(n).addr(),
            Self::Constraint(n) => std::ptr::from_ref(n).addr(),
        };
        (self.sort(), addr)
    }

    /// Direct children in traversal order. Segments are leaves.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            Self::Slice(_) | Self::Segment(_) | Self::Constant(_) => Vec::new(),
            Self::Var(var) => var.segments.iter().map(NodeRef::Segment).collect(),
            Self::Function(fcn) => fcn.args.iter().map(NodeRef::Value).collect(),
            Self::Value(value) => vec![match value {
                Value::Constant(c) => NodeRef::Constant(c),
                Value::Var(v) => NodeRef::Var(v),
                Value::Function(f) => NodeRef::Function(f),
            }],
            Self::Projection(proj) => vec![match proj {
                Projection::Var(v) => NodeRef::Var(v),
                Projection::Function(f) => NodeRef::Function(f),
            }],
            Self::Selection(sel) => std::iter::once(NodeRef::Value(&sel.lhs))
                .chain(sel.rhs.iter().map(NodeRef::Value))
                .collect(),
            Self::Constraint(con) => con
                .projections
                .iter()
                .map(NodeRef::Projection)
                .chain(con.selections.iter().map(NodeRef::Selection))
                .collect(),
        }
    }
}

macro_rules! impl_node_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }

            impl<'a> From<&'a $variant> for NodeRef<'a> {
                fn from(node: &'a $variant) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )*
    };
}

impl_node_conversions!(
    Slice, Segment, Var, Function, Constant, Value, Projection, Selection, Constraint
);
