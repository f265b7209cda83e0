//! Core rules of the unruly binary puzzle (also known as tohu wa vohu or
//! takuzu): a rectangular grid of empty/zero/one cells that the player
//! fills in until every row and column has no gaps, equal counts of ones
//! and zeros, and no three consecutive identical values.
//!
//! The [`Grid`] holds the cell state, the functions in [`rules`] decide
//! validity and completion, and [`levels`] carries the built-in catalog of
//! starting layouts. Input collection and rendering live in the binary.

mod errors;
mod grid;
pub mod levels;
pub mod rules;

pub use errors::Error;
pub use grid::{Cell, Grid};
pub use rules::{column_is_valid, is_complete, line_is_valid, row_is_valid};
