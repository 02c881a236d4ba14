//! # dapce-base
//!
//! Core library for DAP constraint expressions: lexing, parsing, the
//! constraint tree, slice algebra, and merging of projection lists.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! merge     → Path comparison, projection list merging
//!   ↓
//! render    → Constraint text and raw debug dumps
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, semantic actions
//!   ↓
//! ast       → Constraint tree, Slice algebra
//!   ↓
//! base      → Primitives (limits, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use dapce::render::ToDap;
//!
//! let constraint = dapce::parse_constraint("temp[0:2:10],salinity&depth>100").unwrap();
//! assert_eq!(constraint.projections.len(), 2);
//! assert_eq!(constraint.to_dap_string(), "temp[0:2:10],salinity&depth>100");
//! ```

// ============================================================================
// MODULES (dependency order: base → ast → parser → render → merge)
// ============================================================================

/// Foundation types: limits, TextRange
pub mod base;

/// Constraint tree: nodes, slices, generic traversal
pub mod ast;

/// Parser: Logos lexer, recursive-descent parser, semantic actions
pub mod parser;

/// Rendering back to constraint text
pub mod render;

/// Projection merging
pub mod merge;

/// Crate-level error type
pub mod error;

// Re-export commonly needed items
pub use ast::{
    Constant, Constraint, Function, InvalidCoordinates, Node, NodeRef, Operator, Projection,
    Segment, Selection, Slice, Sort, Value, Var, collect_nodes,
};
pub use error::{DceError, Result};
pub use merge::{
    dedupe_projections, merge_constraints, merge_projection_lists, restrict_projection, same_path,
};
pub use parser::{ParseError, ParseOptions};
pub use render::{RenderOptions, ToDap};

// Re-export foundation types
pub use base::{TextRange, TextSize};

/// Parse constraint text into a tree.
pub fn parse_constraint(text: &str) -> Result<Constraint> {
    Ok(parser::parse(text)?)
}

/// Parse two constraint expressions and merge the second into the first.
pub fn merge_constraint_expressions(dst_text: &str, src_text: &str) -> Result<Constraint> {
    let mut dst = parser::parse(dst_text)?;
    let src = parser::parse(src_text)?;
    merge::merge_constraints(&mut dst, &src)?;
    Ok(dst)
}
