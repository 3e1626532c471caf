/*!
Sudoku puzzles as formulas.

# Encoding

The cell at (zero-based) `row` and `col` holding the (one-based) digit `value` is the atom `100·(row+1) + 10·(col+1) + value`.

```rust
# use sudoku_dpll::sudoku::{decode, encode};
assert_eq!(encode(0, 0, 1), 111);
assert_eq!(encode(8, 8, 9), 999);
assert_eq!(decode(347), Some((2, 3, 7)));
```

Each coordinate takes a single decimal digit, and so the encoding is unambiguous only for grids with at most nine rows.
A grid of sixteen rows is [detected](detect_grid_size) from the length of a puzzle, though rejected when building clauses.

# Clauses

A puzzle is the conjunction of:
- The [rules](rule_clauses) of sudoku for the size of the grid, either generated or read from a DIMACS file.
- A unit clause for each [given digit](puzzle_clauses) of the puzzle.

```rust
# use sudoku_dpll::config::Config;
# use sudoku_dpll::context::Context;
# use sudoku_dpll::reports::Report;
# use sudoku_dpll::sudoku::{self, grid_from_valuation, validate_grid};
let puzzle = "1.3..4.22..3.3.1";
let rules = sudoku::rule_clauses(4).unwrap();
let formula = sudoku::puzzle_formula(puzzle, &rules).unwrap();

let mut the_context = Context::from_formula(Config::default(), formula);
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

let grid = grid_from_valuation(the_context.formula.valuation(), 4);
assert!(validate_grid(&grid));
assert_eq!(grid[0], vec![1, 2, 3, 4]);
```
*/

mod render;
pub use render::{grid_from_valuation, render_grid, validate_grid, Grid};

use crate::{
    formula::Formula,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The atom for `value` at (`row`, `col`).
pub fn encode(row: usize, col: usize, value: usize) -> Atom {
    (100 * (row + 1) + 10 * (col + 1) + value) as Atom
}

/// The (`row`, `col`, `value`) of an atom, if the atom is some encoding.
pub fn decode(atom: Atom) -> Option<(usize, usize, usize)> {
    let atom = atom as usize;
    let (row, col, value) = (atom / 100, (atom / 10) % 10, atom % 10);
    match row == 0 || row > 9 || col == 0 || value == 0 {
        true => None,
        false => Some((row - 1, col - 1, value)),
    }
}

/// The size of the grid of a puzzle with `length` cells.
pub fn detect_grid_size(length: usize) -> Result<usize, ErrorKind> {
    match length {
        16 => Ok(4),
        81 => Ok(9),
        256 => Ok(16),
        _ => Err(err::SudokuError::PuzzleLength(length).into()),
    }
}

/// The size of a box of a grid, if clauses may be built for the grid.
fn box_size(size: usize) -> Result<usize, ErrorKind> {
    match size {
        4 => Ok(2),
        9 => Ok(3),
        _ => Err(err::SudokuError::UnsupportedGridSize(size).into()),
    }
}

/// The largest atom of the encoding of a grid.
pub fn atom_bound(size: usize) -> Atom {
    encode(size - 1, size - 1, size)
}

/// A unit clause for each given digit of a puzzle.
///
/// Empty cells are either `.` or `0`.
pub fn puzzle_clauses(puzzle: &str, size: usize) -> Result<Vec<CClause>, ErrorKind> {
    box_size(size)?;

    let cells = puzzle.chars().collect::<Vec<_>>();
    if cells.len() != size * size {
        return Err(err::SudokuError::PuzzleLength(cells.len()).into());
    }

    let mut clauses = Vec::default();
    for (index, cell) in cells.into_iter().enumerate() {
        match cell {
            '.' | '0' => {}
            _ => match cell.to_digit(10) {
                Some(value) if (value as usize) <= size => {
                    let atom = encode(index / size, index % size, value as usize);
                    clauses.push(vec![CLiteral::new(atom, true)]);
                }
                _ => return Err(err::SudokuError::Cell(index, cell).into()),
            },
        }
    }

    log::debug!(target: targets::SUDOKU, "Puzzle with {} givens", clauses.len());
    Ok(clauses)
}

/// The rules of sudoku, for a grid of the given size.
///
/// - Each cell holds at least one value, and at most one value.
/// - Each row, column, and box holds each value at least once, and at most once.
pub fn rule_clauses(size: usize) -> Result<Vec<CClause>, ErrorKind> {
    let box_size = box_size(size)?;

    let mut clauses = Vec::default();

    for row in 0..size {
        for col in 0..size {
            let cell = (1..=size).map(|value| (row, col, value)).collect::<Vec<_>>();
            exactly_one(&mut clauses, &cell);
        }
    }

    for value in 1..=size {
        for row in 0..size {
            let unit = (0..size).map(|col| (row, col, value)).collect::<Vec<_>>();
            exactly_one(&mut clauses, &unit);
        }

        for col in 0..size {
            let unit = (0..size).map(|row| (row, col, value)).collect::<Vec<_>>();
            exactly_one(&mut clauses, &unit);
        }

        for box_row in (0..size).step_by(box_size) {
            for box_col in (0..size).step_by(box_size) {
                let unit = (0..size)
                    .map(|index| {
                        let (row, col) = (box_row + index / box_size, box_col + index % box_size);
                        (row, col, value)
                    })
                    .collect::<Vec<_>>();
                exactly_one(&mut clauses, &unit);
            }
        }
    }

    log::debug!(target: targets::SUDOKU, "{} rule clauses for a grid of size {size}", clauses.len());
    Ok(clauses)
}

/// Extends `clauses` with clauses requiring exactly one of `cells` be true.
fn exactly_one(clauses: &mut Vec<CClause>, cells: &[(usize, usize, usize)]) {
    let atoms = cells
        .iter()
        .map(|(row, col, value)| encode(*row, *col, *value))
        .collect::<Vec<_>>();

    clauses.push(atoms.iter().map(|atom| CLiteral::new(*atom, true)).collect());

    for (index, a) in atoms.iter().enumerate() {
        for b in &atoms[index + 1..] {
            clauses.push(vec![CLiteral::new(*a, false), CLiteral::new(*b, false)]);
        }
    }
}

/// A formula of the given rules together with the givens of a puzzle.
///
/// The size of the grid is detected from the length of the puzzle.
pub fn puzzle_formula(puzzle: &str, rules: &[CClause]) -> Result<Formula, ErrorKind> {
    let puzzle = puzzle.trim();
    let size = detect_grid_size(puzzle.chars().count())?;

    let mut clauses = rules.to_vec();
    clauses.extend(puzzle_clauses(puzzle, size)?);

    Formula::new(clauses, atom_bound(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_round_trip() {
        for (row, col, value) in [(0, 0, 1), (3, 2, 4), (8, 0, 9)] {
            assert_eq!(decode(encode(row, col, value)), Some((row, col, value)));
        }
        assert_eq!(decode(110), None);
        assert_eq!(decode(7), None);
        assert_eq!(atom_bound(4), 444);
        assert_eq!(atom_bound(9), 999);
    }

    #[test]
    fn grid_sizes() {
        assert_eq!(detect_grid_size(16), Ok(4));
        assert_eq!(detect_grid_size(81), Ok(9));
        assert_eq!(detect_grid_size(256), Ok(16));
        assert_eq!(
            detect_grid_size(80),
            Err(ErrorKind::Sudoku(err::SudokuError::PuzzleLength(80)))
        );
        assert_eq!(
            rule_clauses(16),
            Err(ErrorKind::Sudoku(err::SudokuError::UnsupportedGridSize(16)))
        );
    }

    #[test]
    fn givens() {
        let clauses = puzzle_clauses("1..4.0.3........", 4).unwrap();
        assert_eq!(clauses, vec![vec![111], vec![144], vec![243]]);

        assert_eq!(
            puzzle_clauses("1..5............", 4),
            Err(ErrorKind::Sudoku(err::SudokuError::Cell(3, '5')))
        );
        assert_eq!(
            puzzle_clauses("1..x............", 4),
            Err(ErrorKind::Sudoku(err::SudokuError::Cell(3, 'x')))
        );
        assert_eq!(
            puzzle_clauses("1..", 4),
            Err(ErrorKind::Sudoku(err::SudokuError::PuzzleLength(3)))
        );
    }

    #[test]
    fn rule_counts() {
        // Per unit: one at-least clause and n(n-1)/2 at-most clauses, over 4n units.
        let clauses = rule_clauses(4).unwrap();
        assert_eq!(clauses.len(), 4 * 16 * (1 + 6));

        let clauses = rule_clauses(9).unwrap();
        assert_eq!(clauses.len(), 4 * 81 * (1 + 36));
        assert!(clauses
            .iter()
            .flatten()
            .all(|literal| literal.atom() <= atom_bound(9)));
    }
}
