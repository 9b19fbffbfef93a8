//! Checks solutions against the rules directly, without going through a `ConstraintChecker`.
//! Used by the command-line tool after solving and by the tests.

use crate::queens::board::{Solution, Solutions};
use crate::queens::error::Violation;
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Checks that `solution` is a complete, attack-free placement on an `n`-board.
///
/// # Errors
///
/// The first `Violation` found, checked in the order: length, range, columns, diagonals.
pub fn verify(n: usize, solution: &Solution) -> Result<(), Violation> {
    if solution.len() != n {
        return Err(Violation::WrongLength {
            expected: n,
            found: solution.len(),
        });
    }

    if let Some((row, col)) = solution.queens().find(|&(_, col)| !(1..=n).contains(&col)) {
        return Err(Violation::ColumnOutOfRange { row, col, n });
    }

    let mut seen: FxHashMap<usize, usize> = FxHashMap::default();
    for (row, col) in solution.queens() {
        if let Some(&first) = seen.get(&col) {
            return Err(Violation::SharedColumn {
                first,
                second: row,
                col,
            });
        }
        seen.insert(col, row);
    }

    if let Some(((first, _), (second, _))) = solution
        .queens()
        .tuple_combinations()
        .find(|&((r1, c1), (r2, c2))| r1.abs_diff(r2) == c1.abs_diff(c2))
    {
        return Err(Violation::SharedDiagonal { first, second });
    }

    Ok(())
}

impl Solutions {
    /// Verifies every solution for board size `n`.
    ///
    /// # Errors
    ///
    /// The violation of the first invalid solution.
    pub fn verify(&self, n: usize) -> Result<(), Violation> {
        self.iter().try_for_each(|solution| verify(n, solution))
    }
}
