//! The validity rules of the puzzle.
//!
//! A line (a row or a column, the rules do not distinguish) is valid when
//! it has no empty cells, holds as many ones as zeros, and never repeats
//! the same value three times in a row. The grid is complete when every
//! row and every column is valid.

use crate::errors::Error;
use crate::grid::{Cell, Grid};

/// Decides whether an ordered line of cells is rule-compliant.
///
/// The three rules are checked in order, stopping at the first failure:
/// no gaps, then balance, then no triples. A line of odd length can never
/// be valid since the counts cannot match.
pub fn line_is_valid(line: &[Cell]) -> bool {
    no_gaps(line) && balanced(line) && no_triples(line)
}

fn no_gaps(line: &[Cell]) -> bool {
    !line.contains(&Cell::Empty)
}

fn balanced(line: &[Cell]) -> bool {
    let ones = line.iter().filter(|&&cell| cell == Cell::One).count();
    let zeros = line.iter().filter(|&&cell| cell == Cell::Zero).count();
    ones == zeros
}

fn no_triples(line: &[Cell]) -> bool {
    !line
        .windows(3)
        .any(|w| w[0] != Cell::Empty && w[0] == w[1] && w[1] == w[2])
}

/// whether the row at `index` is valid, in column order
pub fn row_is_valid(grid: &Grid, index: usize) -> Result<bool, Error> {
    Ok(line_is_valid(grid.row(index)?))
}

/// whether the column at `index` is valid, in row order
pub fn column_is_valid(grid: &Grid, index: usize) -> Result<bool, Error> {
    Ok(line_is_valid(&grid.column(index)?))
}

/// Decides whether the grid is solved: every row and every column valid.
///
/// Rows are checked first, then columns, stopping at the first invalid
/// line. The answer is a bare boolean; a caller that wants to know *which*
/// line is wrong re-runs the per-line checks.
pub fn is_complete(grid: &Grid) -> bool {
    grid.rows().all(line_is_valid) && grid.columns().all(|column| line_is_valid(&column))
}
