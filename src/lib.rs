#![deny(missing_docs)]
//! This crate enumerates every solution to the N-Queens puzzle by backtracking search.

/// The `queens` module implements the N-Queens solver, which places one queen per row so that
/// no two queens share a column or a diagonal.
pub mod queens;
