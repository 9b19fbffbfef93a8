//! Defines constraint checking strategies for the N-Queens solver.
//!
//! A constraint checker decides whether a queen can be placed at a given `(row, col)` without
//! attacking any queen already on the board. The solver asks the checker once per candidate
//! column, and notifies it whenever a queen is placed or removed so strategies that keep side
//! tables can stay in sync with the placement.
//!
//! This module provides:
//! - The `ConstraintChecker` trait, the interface the solver is generic over.
//! - `BruteForce`: rescans every placed queen for each candidate. O(row) per check.
//! - `Occupancy`: tracks occupied columns and both diagonal directions in bitmaps. O(1) per check.
//! - `CheckerImpls` and `CheckerType` for selecting a strategy at runtime.
//!
//! Rows and columns are 1-based. Passing a row or column outside `[1, n]` is a caller bug and
//! is only caught by debug assertions.

use crate::queens::board::Placement;
use bit_vec::BitVec;
use clap::ValueEnum;
use std::fmt::{Debug, Display};

/// Trait defining the interface for constraint checking strategies.
pub trait ConstraintChecker: Debug + Clone {
    /// Creates a checker for a board of size `n` with no queens placed.
    fn new(n: usize) -> Self;

    /// Returns `true` if a queen at `(row, col)` attacks none of the queens in `placement`.
    ///
    /// `row` is always `placement.next_row()` when called from the solver.
    /// Takes `&mut self` only to update the probe counter.
    fn is_safe(&mut self, placement: &Placement, row: usize, col: usize) -> bool;

    /// Records that a queen now stands at `(row, col)`.
    fn place(&mut self, row: usize, col: usize);

    /// Records that the queen at `(row, col)` has been taken back.
    fn remove(&mut self, row: usize, col: usize);

    /// Total number of elementary probes performed by `is_safe` so far.
    fn probes(&self) -> usize;

    /// Returns the checker to its freshly created state, keeping the board size.
    fn reset(&mut self);
}

/// Checks a candidate against every queen already placed.
///
/// Keeps no side tables, so `place` and `remove` do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BruteForce {
    /// Board size, used for the range assertions.
    n: usize,
    /// Number of placed queens compared against.
    probes: usize,
}

impl ConstraintChecker for BruteForce {
    fn new(n: usize) -> Self {
        Self { n, probes: 0 }
    }

    fn is_safe(&mut self, placement: &Placement, row: usize, col: usize) -> bool {
        debug_assert!((1..=self.n).contains(&row), "row {row} out of range");
        debug_assert!((1..=self.n).contains(&col), "column {col} out of range");

        for (placed_row, placed_col) in placement.queens() {
            self.probes = self.probes.wrapping_add(1);

            if placed_row == row
                || placed_col == col
                || placed_row.abs_diff(row) == placed_col.abs_diff(col)
            {
                return false;
            }
        }
        true
    }

    fn place(&mut self, _: usize, _: usize) {}

    fn remove(&mut self, _: usize, _: usize) {}

    fn probes(&self) -> usize {
        self.probes
    }

    fn reset(&mut self) {
        self.probes = 0;
    }
}

/// Tracks which columns and diagonals are taken.
///
/// - `cols` is indexed by column, size `n + 1`.
/// - `back_diagonals` (`\`) is indexed by `row - col + n`, size `2n + 1`.
/// - `forward_diagonals` (`/`) is indexed by `row + col`, size `2n + 1`.
///
/// All three entries for a queen are set together in `place` and cleared together in `remove`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Occupancy {
    n: usize,
    cols: BitVec,
    back_diagonals: BitVec,
    forward_diagonals: BitVec,
    probes: usize,
}

impl Occupancy {
    /// Index into `back_diagonals`. Never underflows since `col <= n`.
    const fn back_diagonal(&self, row: usize, col: usize) -> usize {
        row + self.n - col
    }

    /// Index into `forward_diagonals`.
    const fn forward_diagonal(row: usize, col: usize) -> usize {
        row + col
    }

    fn mark(&mut self, row: usize, col: usize, value: bool) {
        debug_assert!((1..=self.n).contains(&row), "row {row} out of range");
        debug_assert!((1..=self.n).contains(&col), "column {col} out of range");

        let back = self.back_diagonal(row, col);
        let forward = Self::forward_diagonal(row, col);
        self.cols.set(col, value);
        self.back_diagonals.set(back, value);
        self.forward_diagonals.set(forward, value);
    }

    /// `true` if nothing is marked, i.e. the board is empty.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.cols.none() && self.back_diagonals.none() && self.forward_diagonals.none()
    }
}

impl ConstraintChecker for Occupancy {
    fn new(n: usize) -> Self {
        Self {
            n,
            cols: BitVec::from_elem(n + 1, false),
            back_diagonals: BitVec::from_elem(2 * n + 1, false),
            forward_diagonals: BitVec::from_elem(2 * n + 1, false),
            probes: 0,
        }
    }

    fn is_safe(&mut self, _: &Placement, row: usize, col: usize) -> bool {
        debug_assert!((1..=self.n).contains(&row), "row {row} out of range");
        debug_assert!((1..=self.n).contains(&col), "column {col} out of range");

        self.probes = self.probes.wrapping_add(1);
        if self.cols[col] {
            return false;
        }

        self.probes = self.probes.wrapping_add(1);
        if self.back_diagonals[self.back_diagonal(row, col)] {
            return false;
        }

        self.probes = self.probes.wrapping_add(1);
        !self.forward_diagonals[Self::forward_diagonal(row, col)]
    }

    fn place(&mut self, row: usize, col: usize) {
        self.mark(row, col, true);
    }

    fn remove(&mut self, row: usize, col: usize) {
        self.mark(row, col, false);
    }

    fn probes(&self) -> usize {
        self.probes
    }

    fn reset(&mut self) {
        self.cols.clear();
        self.back_diagonals.clear();
        self.forward_diagonals.clear();
        self.probes = 0;
    }
}

/// Possible constraint checker implementations, chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerImpls {
    /// Brute force rescan variant
    BruteForce(BruteForce),
    /// Occupancy bitmap variant
    Occupancy(Occupancy),
}

impl Default for CheckerImpls {
    fn default() -> Self {
        Self::Occupancy(Occupancy::default())
    }
}

impl ConstraintChecker for CheckerImpls {
    fn new(n: usize) -> Self {
        Self::Occupancy(Occupancy::new(n))
    }

    fn is_safe(&mut self, placement: &Placement, row: usize, col: usize) -> bool {
        match self {
            Self::BruteForce(c) => c.is_safe(placement, row, col),
            Self::Occupancy(c) => c.is_safe(placement, row, col),
        }
    }

    fn place(&mut self, row: usize, col: usize) {
        match self {
            Self::BruteForce(c) => c.place(row, col),
            Self::Occupancy(c) => c.place(row, col),
        }
    }

    fn remove(&mut self, row: usize, col: usize) {
        match self {
            Self::BruteForce(c) => c.remove(row, col),
            Self::Occupancy(c) => c.remove(row, col),
        }
    }

    fn probes(&self) -> usize {
        match self {
            Self::BruteForce(c) => c.probes(),
            Self::Occupancy(c) => c.probes(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::BruteForce(c) => c.reset(),
            Self::Occupancy(c) => c.reset(),
        }
    }
}

/// Enum representing the constraint checking strategy to use.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub enum CheckerType {
    /// Rescan all placed queens for every candidate
    BruteForce,
    /// Column and diagonal occupancy bitmaps
    #[default]
    Occupancy,
}

impl Display for CheckerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BruteForce => write!(f, "brute-force"),
            Self::Occupancy => write!(f, "occupancy"),
        }
    }
}

impl CheckerType {
    /// Converts the `CheckerType` to a concrete `CheckerImpls` for a board of size `n`.
    #[must_use]
    pub fn to_impl(self, n: usize) -> CheckerImpls {
        match self {
            Self::BruteForce => CheckerImpls::BruteForce(BruteForce::new(n)),
            Self::Occupancy => CheckerImpls::Occupancy(Occupancy::new(n)),
        }
    }
}
