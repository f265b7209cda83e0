use std::fmt;

/// The contents of a single grid position
///
/// a closed three-way classification: for any cell exactly one of
/// empty/zero/one holds. Conversion to and from the single-character
/// layout format happens only at the construction and rendering
/// boundaries.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Zero,
    One,
}

impl Cell {
    /// attempts to read a layout character as a cell value
    ///
    /// `' '`, `'0'` and `'1'` are the only recognized characters; the
    /// caller decides how to report anything else
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Cell::Empty),
            '0' => Some(Cell::Zero),
            '1' => Some(Cell::One),
            _ => None,
        }
    }

    /// the character this cell renders as, inverse of [`Cell::from_char`]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Zero => '0',
            Cell::One => '1',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
