use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised around the search: reading input and checking results.
///
/// The search itself never fails. A board without solutions is an empty `Solutions`, not an error.
#[derive(Debug, Error)]
pub enum QueensError {
    /// The input contained no token to read a board size from.
    #[error("no board size found in input")]
    MissingBoardSize,

    /// The first token of the input was not an integer.
    #[error("invalid board size `{input}`: {source}")]
    InvalidBoardSize {
        /// The offending token.
        input: String,
        /// Why it failed to parse.
        #[source]
        source: ParseIntError,
    },

    /// Reading the input failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A produced solution broke the placement rules.
    #[error("solution failed verification: {0}")]
    Verification(#[from] Violation),

    /// Two checker strategies disagreed on the solution set.
    #[error("checker strategies disagree for n = {n}")]
    CheckerMismatch {
        /// Board size that was solved.
        n: i64,
    },
}

/// The first rule a candidate solution breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Not one queen per row.
    #[error("expected {expected} rows, found {found}")]
    WrongLength {
        /// Board size.
        expected: usize,
        /// Rows in the solution.
        found: usize,
    },

    /// A column outside `[1, n]`.
    #[error("row {row} has column {col} outside 1..={n}")]
    ColumnOutOfRange {
        /// 1-based row.
        row: usize,
        /// The column found there.
        col: usize,
        /// Board size.
        n: usize,
    },

    /// Two queens in the same column.
    #[error("rows {first} and {second} share column {col}")]
    SharedColumn {
        /// Upper row.
        first: usize,
        /// Lower row.
        second: usize,
        /// The shared column.
        col: usize,
    },

    /// Two queens on the same diagonal.
    #[error("rows {first} and {second} share a diagonal")]
    SharedDiagonal {
        /// Upper row.
        first: usize,
        /// Lower row.
        second: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QueensError>;
