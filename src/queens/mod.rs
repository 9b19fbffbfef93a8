#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! N-Queens search, its constraint checkers and the helpers around them.

/// Placements, solutions and their textual form.
pub mod board;
/// Constraint checking strategies used by the solver.
pub mod checker;
/// Error types.
pub mod error;
/// Reading the board size from text.
pub mod input;
/// The backtracking solver.
pub mod solver;
/// Independent validation of solutions.
pub mod verify;
