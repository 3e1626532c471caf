use std::{fs::File, io::BufReader};

use sudoku_dpll::{
    builder::read_dimacs,
    config::{Config, Heuristic},
    context::Context,
    reports::Report,
    structures::clause::CClause,
    sudoku::{self, grid_from_valuation, validate_grid, Grid},
};

const HEURISTICS: [Heuristic; 3] = [Heuristic::Random, Heuristic::Mom, Heuristic::Vsids];

fn rules_from_file() -> Vec<CClause> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sudoku-rules-4x4.txt");
    let file = File::open(path).unwrap();
    read_dimacs(BufReader::new(file)).unwrap().clauses
}

/// Clauses as a sorted list of sorted clauses.
fn normalised(mut clauses: Vec<CClause>) -> Vec<CClause> {
    for clause in &mut clauses {
        clause.sort();
    }
    clauses.sort();
    clauses
}

fn solve(heuristic: Heuristic, puzzle: &str, rules: &[CClause]) -> (Context, Grid) {
    let mut config = Config::default();
    config.heuristic.value = heuristic;
    let formula = sudoku::puzzle_formula(puzzle, rules).unwrap();
    let mut the_context = Context::from_formula(config, formula);
    assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

    let size = sudoku::detect_grid_size(puzzle.len()).unwrap();
    let grid = grid_from_valuation(the_context.formula.valuation(), size);
    (the_context, grid)
}

/// Whether every given digit of the puzzle is in the grid.
fn respects_givens(puzzle: &str, grid: &Grid) -> bool {
    let size = grid.len();
    puzzle.chars().enumerate().all(|(index, cell)| match cell.to_digit(10) {
        Some(0) | None => true,
        Some(digit) => grid[index / size][index % size] == digit as usize,
    })
}

#[test]
fn rule_file_matches_generated_rules() {
    let generated = sudoku::rule_clauses(4).unwrap();
    assert_eq!(normalised(rules_from_file()), normalised(generated));
}

#[test]
fn filled_grid_needs_no_splits() {
    let puzzle = "1234341221434321";

    for rules in [rules_from_file(), sudoku::rule_clauses(4).unwrap()] {
        for heuristic in HEURISTICS {
            let (the_context, grid) = solve(heuristic, puzzle, &rules);
            assert_eq!(the_context.counters.splits, 0);
            assert!(validate_grid(&grid));
            assert!(respects_givens(puzzle, &grid));
        }
    }
}

#[test]
fn partial_grids() {
    let rules = sudoku::rule_clauses(4).unwrap();

    for puzzle in ["1.3..4.22..3.3.1", "....2..3........", "0000000000000000"] {
        for heuristic in HEURISTICS {
            let (_, grid) = solve(heuristic, puzzle, &rules);
            assert!(validate_grid(&grid), "{puzzle} with {heuristic}");
            assert!(respects_givens(puzzle, &grid));
        }
    }
}

#[test]
fn unsolvable_grids() {
    let rules = sudoku::rule_clauses(4).unwrap();

    for puzzle in ["11..............", "..3.4.......2..1"] {
        for heuristic in HEURISTICS {
            let mut config = Config::default();
            config.heuristic.value = heuristic;
            let formula = sudoku::puzzle_formula(puzzle, &rules).unwrap();
            let mut the_context = Context::from_formula(config, formula);
            assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable), "{puzzle}");
        }
    }
}

#[test]
fn nine_by_nine() {
    let rules = sudoku::rule_clauses(9).unwrap();

    let puzzles = [
        (
            "802096000005018030106700024078902105000105603001000098984031700250049080600000000",
            "832496517745218936196753824378962145429185673561374298984531762257649381613827459",
        ),
        (
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
        ),
    ];

    for (puzzle, solution) in puzzles {
        for heuristic in HEURISTICS {
            let (_, grid) = solve(heuristic, puzzle, &rules);
            assert!(validate_grid(&grid));

            let digits = grid
                .iter()
                .flatten()
                .map(|digit| digit.to_string())
                .collect::<String>();
            assert_eq!(digits, solution);
        }
    }
}

#[test]
fn sixteen_by_sixteen_is_detected_but_unsupported() {
    let puzzle = ".".repeat(256);
    assert_eq!(sudoku::detect_grid_size(puzzle.len()), Ok(16));
    assert!(sudoku::puzzle_formula(&puzzle, &[]).is_err());
}
