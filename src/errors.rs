use thiserror::Error;

/// Everything that can go wrong while building or addressing a [`Grid`].
///
/// The first three variants are raised at the construction boundary for a
/// malformed layout; the rest are raised by any accessor or mutator handed
/// coordinates outside the grid.
///
/// [`Grid`]: crate::Grid
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Error {
    #[error("layout has no rows")]
    EmptyLayout,
    #[error("row {row} has {found} cells, expected {expected}")]
    UnevenRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unrecognized cell {found:?} at ({col}, {row}), expected ' ', '0' or '1'")]
    UnknownCell { found: char, col: usize, row: usize },
    #[error("({col}, {row}) is outside the {width}x{height} grid")]
    OutOfRange {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },
    #[error("row {row} is outside the grid of height {height}")]
    RowOutOfRange { row: usize, height: usize },
    #[error("column {col} is outside the grid of width {width}")]
    ColumnOutOfRange { col: usize, width: usize },
}
