//! Shared constants for the analysis modules

/// Number of entries kept in each top-K frequency table
pub const TOP_K: usize = 10;
