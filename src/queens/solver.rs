//! Defines the backtracking N-Queens solver.
//!
//! The solver fills the board one row at a time. For the next empty row it tries every column
//! from `1` to `n` in ascending order and asks its `ConstraintChecker` whether the square is
//! attacked. A safe square is pushed onto the placement, the next row is explored recursively,
//! and the queen is popped again once that call returns, whether or not it found anything.
//! A placement that reaches `n` rows is copied into the solution set.
//!
//! Because rows are filled top to bottom and columns are tried in ascending order, solutions come
//! out in lexicographic order of their column sequence, and repeated runs produce the exact same
//! `Solutions`.

use crate::queens::board::{Placement, Solutions};
use crate::queens::checker::{ConstraintChecker, Occupancy};
use log::{debug, trace};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct SolutionStats {
    /// Candidate squares handed to the checker.
    pub checks: usize,
    /// Elementary probes the checker spent on those candidates.
    pub probes: usize,
    /// Queens placed. Every placement is later taken back, so this is also the backtrack count.
    pub placements: usize,
    /// Complete placements recorded.
    pub solutions: usize,
}

/// Depth-first N-Queens solver, generic over its constraint checking strategy.
#[derive(Debug, Clone)]
pub struct Solver<C: ConstraintChecker = Occupancy> {
    /// Board size.
    n: usize,
    /// Queens of the current branch, one per filled row.
    placement: Placement,
    /// Decides which squares are attacked.
    checker: C,
    /// Solutions found so far in the running search.
    solutions: Solutions,
    stats: SolutionStats,
}

impl<C: ConstraintChecker> Solver<C> {
    /// Creates a solver for an `n`-board with a fresh `C` checker.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self::with_checker(n, C::new(n))
    }

    /// Creates a solver around an existing checker, e.g. a `CheckerImpls` picked at runtime.
    ///
    /// The checker must have been created for the same `n`.
    #[must_use]
    pub fn with_checker(n: usize, checker: C) -> Self {
        Self {
            n,
            placement: Placement::with_capacity(n),
            checker,
            solutions: Solutions::new(),
            stats: SolutionStats::default(),
        }
    }

    /// Board size.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Runs the search to completion and returns every solution in discovery order.
    ///
    /// All state is reset first, so calling this again returns the same solutions and leaves the
    /// same `stats()`. A zero-size board has no solutions.
    pub fn solve(&mut self) -> Solutions {
        self.reset();
        debug!("solving n = {} with {:?}", self.n, self.checker);

        if self.n > 0 {
            self.place_row(1);
        }

        self.stats.probes = self.checker.probes();
        self.stats.solutions = self.solutions.len();
        debug!("n = {} finished: {:?}", self.n, self.stats);

        debug_assert!(self.placement.is_empty());
        std::mem::take(&mut self.solutions)
    }

    /// Statistics of the last `solve` call.
    #[must_use]
    pub const fn stats(&self) -> SolutionStats {
        self.stats
    }

    /// The checker in use.
    #[must_use]
    pub const fn checker(&self) -> &C {
        &self.checker
    }

    fn reset(&mut self) {
        self.placement = Placement::with_capacity(self.n);
        self.checker.reset();
        self.solutions = Solutions::new();
        self.stats = SolutionStats::default();
    }

    /// Explores every extension of the current placement starting at `row`.
    fn place_row(&mut self, row: usize) {
        if self.placement.len() == self.n {
            let solution = self.placement.to_solution();
            trace!("solution {solution}");
            self.solutions.push(solution);
            return;
        }

        for col in 1..=self.n {
            self.stats.checks += 1;
            if !self.checker.is_safe(&self.placement, row, col) {
                continue;
            }

            self.placement.push(col);
            self.checker.place(row, col);
            self.stats.placements += 1;

            self.place_row(row + 1);

            self.placement.pop();
            self.checker.remove(row, col);
        }
    }
}

/// Converts a board size from the API boundary. Non-positive sizes have no board.
#[must_use]
pub fn board_size(n: i64) -> Option<usize> {
    usize::try_from(n).ok().filter(|&n| n > 0)
}

/// Finds every solution for an `n`-board using the occupancy checker.
///
/// Returns an empty set when `n <= 0` or when the board has no solution.
#[must_use]
pub fn solve(n: i64) -> Solutions {
    solve_with::<Occupancy>(n)
}

/// Finds every solution for an `n`-board using checker `C`.
#[must_use]
pub fn solve_with<C: ConstraintChecker>(n: i64) -> Solutions {
    board_size(n).map_or_else(Solutions::new, |n| Solver::<C>::new(n).solve())
}
