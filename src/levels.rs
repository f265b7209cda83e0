//! The built-in puzzle catalog.
//!
//! Each level is a rectangular layout with even width and height,
//! partially filled. They are all cut from known solved grids, so every
//! one of them can be finished. The driving loop picks one at random; the
//! catalog itself has no opinion on selection.

/// starting layouts, one `&[&str]` per level
pub const LEVELS: &[&[&str]] = &[
    &[
        "1 1 ", //
        " 10 ", //
        "1  1", //
        " 11 ",
    ],
    &[
        "1 1 0 ", //
        "0  01 ", //
        " 00  1", //
        "0 0 1 ", //
        " 0 0 0", //
        "01  0 ",
    ],
    &[
        "1  1 10 ", //
        " 10 0  1", //
        "0 1  10 ", //
        " 0 10 1 ", //
        "0  0 01 ", //
        "  0 01 1",
    ],
    &[
        "1  1 1 1", //
        "  0 1 10", //
        "0 11 1 1", //
        " 1 0 0 1", //
        "1 0 0 1 ", //
        "11 0   1", //
        " 01 0 1 ", //
        "0 1 1 10",
    ],
];

#[cfg(test)]
mod test {
    use super::LEVELS;
    use crate::{is_complete, Grid};

    #[test]
    fn every_level_builds() {
        for (i, level) in LEVELS.iter().enumerate() {
            Grid::build(level).unwrap_or_else(|why| panic!("level {i}: {why}"));
        }
    }

    #[test]
    fn every_level_has_even_dimensions() {
        for level in LEVELS {
            let (width, height) = Grid::build(level).unwrap().dimensions();
            assert_eq!(width % 2, 0);
            assert_eq!(height % 2, 0);
        }
    }

    #[test]
    fn no_level_starts_out_complete() {
        for level in LEVELS {
            assert!(!is_complete(&Grid::build(level).unwrap()));
        }
    }
}
