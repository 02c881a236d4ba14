//! Foundation types shared by every layer of the crate.
//!
//! - Limits inherited from the netCDF/DAP data model
//! - [`TextRange`], [`TextSize`] - byte offsets into constraint text
//!
//! This module has NO dependencies on other dapce modules.

pub mod constants;

pub use constants::{MAX_TOKEN_LENGTH, MAX_VAR_DIMS};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
