//! Board state for the N-Queens search.
//!
//! A board is described row by row: the `i`-th entry of a placement is the 1-based column of the
//! queen standing in row `i + 1`. Rows are therefore implicit, and one queen per row holds by
//! construction.
//!
//! - `Placement` is the partial placement the solver mutates while searching.
//! - `Solution` is a complete placement, copied out of the search once every row is filled.
//! - `Solutions` is the ordered collection the solver returns, in discovery order.

use core::ops::Index;
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::Display;

/// Inline capacity of a placement before it spills to the heap.
const INLINE_ROWS: usize = 16;

/// A partial placement: the columns of the queens placed in rows `1..=len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Placement(SmallVec<[usize; INLINE_ROWS]>);

impl Placement {
    /// Creates an empty placement with room for `n` rows.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self(SmallVec::with_capacity(n))
    }

    /// Places a queen in the next free row.
    pub fn push(&mut self, col: usize) {
        self.0.push(col);
    }

    /// Removes the queen from the last filled row and returns its column.
    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    /// Number of rows filled so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no queen has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The 1-based row the next queen would go into.
    #[must_use]
    pub fn next_row(&self) -> usize {
        self.0.len() + 1
    }

    /// Iterates over `(row, col)` pairs, both 1-based.
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + Clone + '_ {
        self.0.iter().enumerate().map(|(i, &col)| (i + 1, col))
    }

    /// Column values in row order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Copies the current placement into a standalone `Solution`.
    #[must_use]
    pub fn to_solution(&self) -> Solution {
        Solution(self.0.to_vec())
    }
}

/// A complete, attack-free placement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution(Vec<usize>);

impl Solution {
    /// Wraps a column sequence. No validation is done here, see `verify`.
    #[must_use]
    pub const fn new(columns: Vec<usize>) -> Self {
        Self(columns)
    }

    /// The column of each row, in row order.
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.0
    }

    /// Board size this solution covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the zero-row placement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(row, col)` pairs, both 1-based.
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + Clone + '_ {
        self.0.iter().enumerate().map(|(i, &col)| (i + 1, col))
    }
}

impl Index<usize> for Solution {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<usize>> for Solution {
    fn from(columns: Vec<usize>) -> Self {
        Self::new(columns)
    }
}

impl From<Solution> for Vec<usize> {
    fn from(solution: Solution) -> Self {
        solution.0
    }
}

impl<const N: usize> From<[usize; N]> for Solution {
    fn from(columns: [usize; N]) -> Self {
        Self::new(columns.to_vec())
    }
}

impl Display for Solution {
    /// Formats as `[2 4 1 3 ]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} ]", self.0.iter().join(" "))
    }
}

/// The solutions of one search, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Solutions(Vec<Solution>);

impl Solutions {
    /// An empty solution set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a solution at the end of the discovery order.
    pub fn push(&mut self, solution: Solution) {
        self.0.push(solution);
    }

    /// Number of solutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the board has no solution.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first solution found, which is also the lexicographically smallest.
    #[must_use]
    pub fn first(&self) -> Option<&Solution> {
        self.0.first()
    }

    /// Iterates in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.0.iter()
    }

    /// Borrows the solutions as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Solution] {
        &self.0
    }
}

impl Index<usize> for Solutions {
    type Output = Solution;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Solutions {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Solution> for Solutions {
    fn from_iter<T: IntoIterator<Item = Solution>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Vec<usize>>> for Solutions {
    fn from(solutions: Vec<Vec<usize>>) -> Self {
        solutions.into_iter().map(Solution::from).collect()
    }
}

impl Display for Solutions {
    /// Every solution followed by a single space, or `-1` when there are none.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-1");
        }

        for solution in &self.0 {
            write!(f, "{solution} ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_push_pop() {
        let mut placement = Placement::with_capacity(4);
        assert!(placement.is_empty());
        assert_eq!(placement.next_row(), 1);

        placement.push(2);
        placement.push(4);
        assert_eq!(placement.len(), 2);
        assert_eq!(placement.next_row(), 3);
        assert_eq!(placement.queens().collect::<Vec<_>>(), vec![(1, 2), (2, 4)]);

        assert_eq!(placement.pop(), Some(4));
        assert_eq!(placement.as_slice(), &[2]);
    }

    #[test]
    fn test_solution_is_a_copy() {
        let mut placement = Placement::default();
        placement.push(1);
        let solution = placement.to_solution();

        placement.pop();
        placement.push(3);

        assert_eq!(solution.columns(), &[1]);
    }

    #[test]
    fn test_placement_spills_past_inline_capacity() {
        let mut placement = Placement::default();
        for col in 1..=20 {
            placement.push(col);
        }
        assert_eq!(placement.len(), 20);
        assert_eq!(placement.to_solution().columns(), (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_display_solution() {
        assert_eq!(Solution::from([2, 4, 1, 3]).to_string(), "[2 4 1 3 ]");
        assert_eq!(Solution::from([1]).to_string(), "[1 ]");
    }

    #[test]
    fn test_display_solutions() {
        let solutions = Solutions::from(vec![vec![2, 4, 1, 3], vec![3, 1, 4, 2]]);
        assert_eq!(solutions.to_string(), "[2 4 1 3 ] [3 1 4 2 ] ");
    }

    #[test]
    fn test_display_no_solutions() {
        assert_eq!(Solutions::new().to_string(), "-1");
    }

    #[test]
    fn test_solutions_indexing() {
        let solutions = Solutions::from(vec![vec![2, 4, 1, 3], vec![3, 1, 4, 2]]);
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[1][0], 3);
        assert_eq!(solutions.first(), Some(&Solution::from([2, 4, 1, 3])));
    }
}
