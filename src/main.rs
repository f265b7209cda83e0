use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use std::io::{self, BufRead, Write};
use std::process;
use unruly::{is_complete, levels::LEVELS, Cell, Grid};

fn main() {
    match play() {
        Ok(()) => {}
        Err(why) => {
            eprintln!("error: {why:?}");
            process::exit(1)
        }
    }
}

/// The interaction loop: pick a level, then mutate one cell per turn until
/// the grid completes or the player quits with "stop" (or end of input).
fn play() -> Result<()> {
    let level = LEVELS
        .choose(&mut rand::thread_rng())
        .context("the level catalog is empty")?;
    let mut grid = Grid::build(level)?;

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    println!("{}", framed(&grid));
    while !is_complete(&grid) {
        let Some((col, row, value)) = read_move(&mut input, &grid)? else {
            return Ok(());
        };
        grid.set(col, row, value)?;
        println!("{}", framed(&grid));
    }
    println!("Congratulations, you won :)");
    Ok(())
}

/// Collects one well-formed `(col, row, value)` triple, re-prompting until
/// the coordinates are in range and the value is one of `0`, `1` or blank.
/// `None` means the player quit.
fn read_move(
    input: &mut impl Iterator<Item = io::Result<String>>,
    grid: &Grid,
) -> Result<Option<(usize, usize, Cell)>> {
    let (width, height) = grid.dimensions();
    loop {
        let Some(entry) = prompt(input, "column (or stop): ")? else {
            return Ok(None);
        };
        if entry.trim().eq_ignore_ascii_case("stop") {
            return Ok(None);
        }
        let Ok(col) = entry.trim().parse::<usize>() else {
            continue;
        };
        if col >= width {
            continue;
        }

        let Some(entry) = prompt(input, "row: ")? else {
            return Ok(None);
        };
        let Ok(row) = entry.trim().parse::<usize>() else {
            continue;
        };
        if row >= height {
            continue;
        }

        let Some(entry) = prompt(input, "value (0, 1 or blank): ")? else {
            return Ok(None);
        };
        let Some(value) = parse_value(&entry) else {
            continue;
        };
        return Ok(Some((col, row, value)));
    }
}

fn parse_value(entry: &str) -> Option<Cell> {
    match entry.trim() {
        "" => Some(Cell::Empty),
        "0" => Some(Cell::Zero),
        "1" => Some(Cell::One),
        _ => None,
    }
}

fn prompt(
    input: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match input.next() {
        Some(entry) => Ok(Some(entry?)),
        None => Ok(None),
    }
}

/// the grid with a `|` on each side of every row, purely cosmetic
fn framed(grid: &Grid) -> String {
    grid.to_string()
        .lines()
        .map(|row| format!("|{row}|"))
        .collect::<Vec<_>>()
        .join("\n")
}
