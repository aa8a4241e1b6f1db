//! Minimum-cost perfect assignment with on-demand enumeration of the
//! next best row-0 choices.
//!
//! The solver is the shortest-augmenting-path form of the Hungarian method
//! with row and column potentials. After the first solve, [`HungarianSolver::next_best`]
//! forbids the column currently assigned to row 0, frees row 0 and runs a
//! single augmentation from it. Raising a cost never breaks dual
//! feasibility, so the remaining matching and potentials are reused as is.

use contracts::*;

/// Cost standing in for "never pick this cell".
///
/// Kept finite so potential arithmetic stays exact; every realistic lower
/// bound total is many orders of magnitude below it.
pub const INFEASIBLE_COST: f64 = i32::MAX as f64;

/// Square, row-major cost matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl CostMatrix {
    /// Zero-filled `size x size` matrix.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// # Panics
    ///
    /// Panics if the rows do not form a square matrix.
    #[must_use]
    #[requires(rows.iter().all(|r| r.len() == rows.len()), "cost matrix must be square")]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let size = rows.len();
        Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.cells[row * self.size + column]
    }

    pub fn set(&mut self, row: usize, column: usize, cost: f64) {
        self.cells[row * self.size + column] = cost;
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Sum of the cells picked by `assignment` (row `i` takes column `assignment[i]`).
    #[must_use]
    #[requires(assignment.len() == self.size, "assignment length must match the matrix size")]
    pub fn total(&self, assignment: &[usize]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .map(|(row, &column)| self.get(row, column))
            .sum()
    }

    /// True if no picked cell is at the sentinel cost.
    #[must_use]
    pub fn is_feasible(&self, assignment: &[usize]) -> bool {
        assignment
            .iter()
            .enumerate()
            .all(|(row, &column)| self.get(row, column) < INFEASIBLE_COST)
    }
}

/// Hungarian solver that keeps its dual state for k-best enumeration.
///
/// Internally rows and columns are 1-based; index 0 is the virtual column
/// the augmentation starts from.
#[derive(Clone, Debug)]
pub struct HungarianSolver {
    /// Working copy, row 0 cells are raised to the sentinel as they are used
    costs: CostMatrix,
    row_potential: Vec<f64>,
    col_potential: Vec<f64>,
    /// Row matched to each column, 0 when the column is free
    row_of_column: Vec<usize>,
    // Scratch buffers for one augmentation
    way: Vec<usize>,
    min_slack: Vec<f64>,
    visited: Vec<bool>,
    solved: bool,
}

impl HungarianSolver {
    #[must_use]
    pub fn new(costs: CostMatrix) -> Self {
        let n = costs.size();
        Self {
            costs,
            row_potential: vec![0.0; n + 1],
            col_potential: vec![0.0; n + 1],
            row_of_column: vec![0; n + 1],
            way: vec![0; n + 1],
            min_slack: vec![f64::INFINITY; n + 1],
            visited: vec![false; n + 1],
            solved: false,
        }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.costs.size()
    }

    /// Current working costs, including cells forbidden by enumeration.
    #[must_use]
    pub const fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Solves the assignment problem from scratch.
    #[ensures(ret.len() == self.size())]
    pub fn solve(&mut self) -> Vec<usize> {
        let n = self.size();
        self.row_potential.fill(0.0);
        self.col_potential.fill(0.0);
        self.row_of_column.fill(0);
        for row in 1..=n {
            self.augment(row);
        }
        self.solved = true;
        self.assignment()
    }

    /// Next ranked assignment, with the column row 0 currently holds
    /// excluded from now on.
    ///
    /// Returns `None` once row 0 has only sentinel-cost cells left.
    ///
    /// # Panics
    ///
    /// Panics if called before [`HungarianSolver::solve`].
    #[requires(self.solved, "next_best requires a solved assignment")]
    pub fn next_best(&mut self) -> Option<Vec<usize>> {
        let column = self.column_of_row(1)?;
        self.costs.set(0, column - 1, INFEASIBLE_COST);
        self.row_of_column[column] = 0;
        if self.costs.row(0).iter().all(|&c| c >= INFEASIBLE_COST) {
            return None;
        }
        self.augment(1);
        let assignment = self.assignment();
        if self.costs.get(0, assignment[0]) >= INFEASIBLE_COST {
            return None;
        }
        Some(assignment)
    }

    fn column_of_row(&self, row: usize) -> Option<usize> {
        (1..=self.size()).find(|&j| self.row_of_column[j] == row)
    }

    fn assignment(&self) -> Vec<usize> {
        let mut assignment = vec![0; self.size()];
        for j in 1..=self.size() {
            let row = self.row_of_column[j];
            if row != 0 {
                assignment[row - 1] = j - 1;
            }
        }
        assignment
    }

    /// Finds a shortest augmenting path from the free `row` and flips it.
    fn augment(&mut self, row: usize) {
        let n = self.size();
        self.row_of_column[0] = row;
        self.min_slack.fill(f64::INFINITY);
        self.visited.fill(false);
        let mut j0 = 0;
        loop {
            self.visited[j0] = true;
            let i0 = self.row_of_column[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0;
            for j in 1..=n {
                if self.visited[j] {
                    continue;
                }
                let reduced =
                    self.costs.get(i0 - 1, j - 1) - self.row_potential[i0] - self.col_potential[j];
                if reduced < self.min_slack[j] {
                    self.min_slack[j] = reduced;
                    self.way[j] = j0;
                }
                if self.min_slack[j] < delta {
                    delta = self.min_slack[j];
                    j1 = j;
                }
            }
            for j in 0..=n {
                if self.visited[j] {
                    self.row_potential[self.row_of_column[j]] += delta;
                    self.col_potential[j] -= delta;
                } else {
                    self.min_slack[j] -= delta;
                }
            }
            j0 = j1;
            if self.row_of_column[j0] == 0 {
                break;
            }
        }
        // Flip the alternating path back to the virtual column.
        while j0 != 0 {
            let j1 = self.way[j0];
            self.row_of_column[j0] = self.row_of_column[j1];
            j0 = j1;
        }
    }
}
