//! `chroma sudoku`: solve a puzzle as a 9-coloring of its constraint graph.
//!
//! The givens become a partial coloring; backtracking extends it with the
//! digits 1-9. A puzzle without a solution is reported as not enough colors.

use std::io::{self, Write};

use chroma_core::coloring::{Coloring, Palette, coloring, verify};
use chroma_core::graph::generate::SudokuGraph;
use chroma_core::ErrorCode;
use clap::Args;
use petgraph::graph::NodeIndex;
use tracing::{info, instrument};

use crate::output::{CliError, OutputMode, pretty_rule, render};

/// Arguments for `chroma sudoku`.
#[derive(Args, Debug)]
pub struct SudokuArgs {
    /// 81 cells row by row: `1`-`9` for givens, `.` or `0` for blanks.
    /// Whitespace is ignored.
    pub puzzle: String,
}

type Grid = [[Option<u8>; 9]; 9];

/// Parse a puzzle string into a grid of givens.
fn parse_puzzle(raw: &str) -> Result<Grid, CliError> {
    let cells: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cells.len() != 81 {
        return Err(CliError::with_code(
            ErrorCode::ProblemParseError,
            format!("a puzzle has 81 cells, found {}", cells.len()),
        ));
    }

    let mut grid: Grid = [[None; 9]; 9];
    for (i, ch) in cells.into_iter().enumerate() {
        grid[i / 9][i % 9] = match ch {
            '.' | '0' => None,
            '1'..='9' => ch.to_digit(10).and_then(|d| u8::try_from(d).ok()),
            other => {
                return Err(CliError::with_code(
                    ErrorCode::ProblemParseError,
                    format!("unexpected character {other:?} at cell {}", i + 1),
                ));
            }
        };
    }
    Ok(grid)
}

/// Execute `chroma sudoku`.
#[instrument(skip_all)]
pub fn run_sudoku(args: &SudokuArgs, output: OutputMode) -> anyhow::Result<()> {
    let givens = parse_puzzle(&args.puzzle)?;
    let sudoku = SudokuGraph::new();

    let partial: Coloring<NodeIndex, u8> = givens
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter_map(move |(col, digit)| digit.map(|d| ((row, col), d)))
        })
        .map(|((row, col), digit)| (sudoku.cell(row, col), digit))
        .collect();
    info!(givens = partial.len(), "solving sudoku");

    let digits: Palette<u8> = (1..=9).collect();
    let solved = coloring(&sudoku.graph)
        .map_err(|err| CliError::with_code(err.code(), &err))?
        .with_colors(digits)
        .backtracking_from(partial)
        .map_err(|err| {
            if err.is_not_enough_colors() {
                CliError::with_code(ErrorCode::NotEnoughColors, "the puzzle has no solution")
            } else {
                CliError::with_code(err.code(), &err)
            }
        })?;
    verify(&sudoku.graph, &solved)?;

    let mut grid: [[u8; 9]; 9] = [[0; 9]; 9];
    for (row, line) in grid.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            *cell = solved.color(&sudoku.cell(row, col)).copied().unwrap_or(0);
        }
    }

    render(output, |w| render_grid_text(&grid, w), |w| render_grid_pretty(&grid, w))
}

fn render_grid_text(grid: &[[u8; 9]; 9], w: &mut dyn Write) -> io::Result<()> {
    for line in grid {
        let row: String = line.iter().map(u8::to_string).collect();
        writeln!(w, "{row}")?;
    }
    Ok(())
}

fn render_grid_pretty(grid: &[[u8; 9]; 9], w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Sudoku")?;
    pretty_rule(w)?;
    for (r, line) in grid.iter().enumerate() {
        if r > 0 && r % 3 == 0 {
            writeln!(w, "------+-------+------")?;
        }
        let boxes: Vec<String> = line
            .chunks(3)
            .map(|chunk| chunk.iter().map(u8::to_string).collect::<Vec<_>>().join(" "))
            .collect();
        writeln!(w, "{}", boxes.join(" | "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blanks_and_givens() {
        let mut raw = String::from("1.");
        raw.push_str(&"0".repeat(79));
        let grid = parse_puzzle(&raw).expect("81 cells");
        assert_eq!(grid[0][0], Some(1));
        assert_eq!(grid[0][1], None);
        assert_eq!(grid[8][8], None);
    }

    #[test]
    fn whitespace_is_ignored() {
        let raw = format!("{}\n", ". . . . . . . . .\n".repeat(9));
        assert!(parse_puzzle(&raw).is_ok());
    }

    #[test]
    fn rejects_bad_puzzles() {
        let short = parse_puzzle("123").expect_err("too short");
        assert_eq!(short.code, Some(ErrorCode::ProblemParseError));
        assert!(short.message.contains("found 3"));

        let bad = parse_puzzle(&format!("x{}", ".".repeat(80))).expect_err("bad char");
        assert!(bad.message.contains("'x'"), "{}", bad.message);
    }

    #[test]
    fn text_grid_is_nine_digit_rows() {
        let mut grid = [[0_u8; 9]; 9];
        grid[0] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut out = Vec::new();
        render_grid_text(&grid, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.starts_with("123456789\n000000000\n"));
        assert_eq!(rendered.lines().count(), 9);
    }
}
