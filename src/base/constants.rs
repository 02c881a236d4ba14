//! Limits shared by the lexer, parser and node model.

/// Maximum number of dimensions a single segment may be sliced over.
///
/// Mirrors `NC_MAX_VAR_DIMS` in the netCDF C library.
pub const MAX_VAR_DIMS: usize = 1024;

/// Number of bytes of the most recent token kept for diagnostics.
pub const MAX_TOKEN_LENGTH: usize = 1024;

/// Default upper bound on the byte length of a single token.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 4096;

/// Default upper bound on the number of items in any parsed list.
pub const DEFAULT_MAX_LIST_LENGTH: usize = 8192;
