mod cell;

pub use cell::Cell;

use crate::errors::Error;
use std::fmt;

/// A rectangular unruly grid
///
/// cells are addressed by `(col, row)` with 0-based indices; the column
/// index ranges over the width, the row index over the height. Width and
/// height are fixed at construction. Rectangularity is enforced when the
/// grid is built, so every row always has exactly `width` cells.
///
/// The puzzle domain assumes even width and height (an odd line can never
/// balance), but the grid itself does not require it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a grid from a textual layout, one string per row, one
    /// character per cell (`' '` empty, `'0'` zero, `'1'` one).
    ///
    /// Height is the number of rows and width the length of the first row.
    /// Empty layouts, rows of unequal length, and unrecognized characters
    /// are all rejected here so nothing else has to worry about them.
    pub fn build<S: AsRef<str>>(layout: &[S]) -> Result<Self, Error> {
        let width = match layout.first() {
            Some(first) => first.as_ref().chars().count(),
            None => Err(Error::EmptyLayout)?,
        };
        let mut rows = Vec::with_capacity(layout.len());
        for (y, line) in layout.iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for (x, ch) in line.as_ref().chars().enumerate() {
                match Cell::from_char(ch) {
                    Some(cell) => row.push(cell),
                    None => Err(Error::UnknownCell {
                        found: ch,
                        col: x,
                        row: y,
                    })?,
                }
            }
            if row.len() != width {
                Err(Error::UnevenRow {
                    row: y,
                    found: row.len(),
                    expected: width,
                })?
            }
            rows.push(row);
        }
        Ok(Grid { width, rows })
    }

    /// `(width, height)` of the grid
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.rows.len())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// the cell at `(col, row)`, or `OutOfRange`
    pub fn cell(&self, col: usize, row: usize) -> Result<Cell, Error> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(self.out_of_range(col, row))
    }

    pub fn is_empty(&self, col: usize, row: usize) -> Result<bool, Error> {
        Ok(self.cell(col, row)? == Cell::Empty)
    }

    pub fn is_one(&self, col: usize, row: usize) -> Result<bool, Error> {
        Ok(self.cell(col, row)? == Cell::One)
    }

    pub fn is_zero(&self, col: usize, row: usize) -> Result<bool, Error> {
        Ok(self.cell(col, row)? == Cell::Zero)
    }

    /// Overwrites the cell at `(col, row)` unconditionally.
    ///
    /// The previous value does not matter; this is the only mutation the
    /// grid supports.
    pub fn set(&mut self, col: usize, row: usize, value: Cell) -> Result<(), Error> {
        let out_of_range = self.out_of_range(col, row);
        let slot = self
            .rows
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(out_of_range)?;
        *slot = value;
        Ok(())
    }

    pub fn set_one(&mut self, col: usize, row: usize) -> Result<(), Error> {
        self.set(col, row, Cell::One)
    }

    pub fn set_zero(&mut self, col: usize, row: usize) -> Result<(), Error> {
        self.set(col, row, Cell::Zero)
    }

    pub fn set_empty(&mut self, col: usize, row: usize) -> Result<(), Error> {
        self.set(col, row, Cell::Empty)
    }

    /// the row at `index`, in column order
    pub fn row(&self, index: usize) -> Result<&[Cell], Error> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::RowOutOfRange {
                row: index,
                height: self.rows.len(),
            })
    }

    /// the column at `index`, in row order
    pub fn column(&self, index: usize) -> Result<Vec<Cell>, Error> {
        if index >= self.width {
            Err(Error::ColumnOutOfRange {
                col: index,
                width: self.width,
            })?
        }
        Ok(self.rows.iter().map(|cells| cells[index]).collect())
    }

    /// all rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// all columns, left to right
    pub fn columns(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.width).map(|col| self.rows.iter().map(|cells| cells[col]).collect())
    }

    fn out_of_range(&self, col: usize, row: usize) -> Error {
        Error::OutOfRange {
            col,
            row,
            width: self.width,
            height: self.rows.len(),
        }
    }
}

/// one row per line, one character per cell, no decoration
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.rows {
            for cell in cells {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Cell, Grid};
    use crate::errors::Error;

    fn grid(layout: &[&str]) -> Grid {
        Grid::build(layout).unwrap()
    }

    /// checks every cell of `grid` against `expected`, including the
    /// three-way classification being exclusive
    fn assert_state(grid: &Grid, expected: &[&str]) {
        assert_eq!(
            grid.dimensions(),
            (expected[0].len(), expected.len()),
            "dimensions do not match the layout"
        );
        for (y, line) in expected.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).unwrap();
                assert_eq!(grid.cell(x, y), Ok(cell), "wrong cell at ({x}, {y})");
                assert_eq!(grid.is_empty(x, y), Ok(cell == Cell::Empty));
                assert_eq!(grid.is_zero(x, y), Ok(cell == Cell::Zero));
                assert_eq!(grid.is_one(x, y), Ok(cell == Cell::One));
            }
        }
    }

    #[test]
    fn build_reads_a_small_layout() {
        let desc = ["  01", "101 ", "  0 ", " 10 "];
        assert_state(&grid(&desc), &desc);
    }

    #[test]
    fn build_reads_a_larger_layout() {
        let desc = [
            "  01  01", "101 101 ", "  0   0 ", " 10  10 ", "  01  01", "101 101 ", "  0   0 ",
            " 10  10 ",
        ];
        assert_state(&grid(&desc), &desc);
    }

    #[test]
    fn build_reads_a_rectangular_layout() {
        let desc = ["  01  01", "101 101 ", "  0   0 ", " 10  10 "];
        let g = grid(&desc);
        assert_eq!(g.dimensions(), (8, 4));
        assert_state(&g, &desc);
    }

    #[test]
    fn build_rejects_an_empty_layout() {
        assert_eq!(Grid::build::<&str>(&[]), Err(Error::EmptyLayout));
    }

    #[test]
    fn build_rejects_uneven_rows() {
        assert_eq!(
            Grid::build(&["10", "0", "01"]),
            Err(Error::UnevenRow {
                row: 1,
                found: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn build_rejects_unknown_characters() {
        assert_eq!(
            Grid::build(&["10", "0x"]),
            Err(Error::UnknownCell {
                found: 'x',
                col: 1,
                row: 1
            })
        );
    }

    #[test]
    fn set_empty_overwrites_any_previous_value() {
        let mut g = grid(&["  01", "101 ", "  0 ", " 10 "]);
        g.set_empty(1, 0).unwrap();
        g.set_empty(2, 3).unwrap();
        g.set_empty(2, 1).unwrap();
        assert_state(&g, &["  01", "10  ", "  0 ", " 1  "]);
    }

    #[test]
    fn set_one_overwrites_any_previous_value() {
        let mut g = grid(&["  01", "101 ", "  0 ", " 10 "]);
        g.set_one(1, 0).unwrap();
        g.set_one(2, 3).unwrap();
        g.set_one(2, 1).unwrap();
        assert_state(&g, &[" 101", "101 ", "  0 ", " 11 "]);
    }

    #[test]
    fn set_zero_overwrites_any_previous_value() {
        let mut g = grid(&["  01", "101 ", "  0 ", " 10 "]);
        g.set_zero(1, 0).unwrap();
        g.set_zero(2, 3).unwrap();
        g.set_zero(2, 1).unwrap();
        assert_state(&g, &[" 001", "100 ", "  0 ", " 10 "]);
    }

    #[test]
    fn setters_are_idempotent() {
        let mut g = grid(&["  ", "  "]);
        g.set_one(0, 1).unwrap();
        g.set_one(0, 1).unwrap();
        assert_eq!(g.is_one(0, 1), Ok(true));
        g.set_zero(0, 1).unwrap();
        assert_eq!(g.is_one(0, 1), Ok(false));
        assert_eq!(g.is_zero(0, 1), Ok(true));
    }

    #[test]
    fn cell_access_fails_out_of_range() {
        let g = grid(&["  01", "101 ", "  0 ", " 10 "]);
        let err = Error::OutOfRange {
            col: 4,
            row: 0,
            width: 4,
            height: 4,
        };
        assert_eq!(g.cell(4, 0), Err(err));
        assert_eq!(g.is_empty(4, 0), Err(err));
        assert_eq!(g.clone().set_one(4, 0), Err(err));
    }

    #[test]
    fn set_fails_out_of_range_without_corrupting_anything() {
        let desc = ["10", "01"];
        let mut g = grid(&desc);
        assert_eq!(
            g.set_one(0, 2),
            Err(Error::OutOfRange {
                col: 0,
                row: 2,
                width: 2,
                height: 2
            })
        );
        assert_state(&g, &desc);
    }

    #[test]
    fn row_and_column_extract_in_order() {
        let g = grid(&["  01", "101 "]);
        assert_eq!(
            g.row(1).unwrap(),
            [Cell::One, Cell::Zero, Cell::One, Cell::Empty]
        );
        assert_eq!(g.column(2).unwrap(), [Cell::Zero, Cell::One]);
    }

    #[test]
    fn row_and_column_fail_out_of_range() {
        let g = grid(&["  01", "101 "]);
        assert_eq!(g.row(2), Err(Error::RowOutOfRange { row: 2, height: 2 }));
        assert_eq!(
            g.column(4),
            Err(Error::ColumnOutOfRange { col: 4, width: 4 })
        );
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let g = grid(&["  01", "101 "]);
        assert_eq!(g.to_string(), "  01\n101 \n");
    }
}
