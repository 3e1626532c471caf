#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use clap::Parser;
use sudoku_dpll::{
    builder::read_dimacs,
    config::Config,
    context::Context,
    reports::{solution_dimacs, Report, StatsRecord},
    structures::clause::CClause,
    sudoku::{self},
    types::err::ErrorKind,
};

mod args;
mod records;

use args::Args;
use records::Summary;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    std::process::exit(run(args))
}

fn run(args: Args) -> i32 {
    let config = match args.config() {
        Ok(config) => config,
        Err(name) => {
            println!("c The value of {name} is out of bounds");
            return 1;
        }
    };

    let rules = match &args.rules {
        None => None,
        Some(path) => match load_rules(path) {
            Ok(rules) => Some(rules),
            Err(e) => {
                println!("c Error loading {}: {e}", path.display());
                return 1;
            }
        },
    };

    match (&args.puzzles, rules) {
        (Some(puzzles), rules) => solve_puzzles(&args, config, puzzles, rules),

        (None, Some(rules)) => solve_formula(config, rules),

        (None, None) => {
            println!("c Either rules or puzzles are required, see --help");
            1
        }
    }
}

fn load_rules(path: &Path) -> Result<Vec<CClause>, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let dimacs = read_dimacs(BufReader::new(file)).map_err(|e| e.to_string())?;
    Ok(dimacs.clauses)
}

/// Solves the rules as a formula, without any puzzle.
fn solve_formula(config: Config, clauses: Vec<CClause>) -> i32 {
    let formula = match sudoku_dpll::formula::Formula::from_clauses(clauses) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c Error building the formula: {e}");
            return 1;
        }
    };

    let mut the_context = Context::from_formula(config, formula);
    match the_context.solve() {
        Ok(Report::Satisfiable) => {
            if let Some(model) = the_context.model() {
                let literals = model.iter().map(|l| l.to_string()).collect::<Vec<_>>();
                println!("v {} 0", literals.join(" "));
            }
            println!("s SATISFIABLE");
            10
        }
        Ok(Report::Unsatisfiable) => {
            println!("s UNSATISFIABLE");
            20
        }
        Ok(Report::Unknown) => {
            println!("s UNKNOWN");
            30
        }
        Err(e) => {
            println!("c Context error: {e}");
            1
        }
    }
}

fn solve_puzzles(args: &Args, config: Config, path: &Path, rules: Option<Vec<CClause>>) -> i32 {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            println!("c Error opening {}: {e}", path.display());
            return 1;
        }
    };

    let results = args
        .results_dir
        .as_ref()
        .map(|dir| records::results_path(dir, path, args.strategy));

    let mut generated_rules: Option<(usize, Vec<CClause>)> = None;
    let mut summary = Summary::default();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let puzzle = match line {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => line.trim().to_string(),
            Err(e) => {
                println!("c Error reading {}: {e}", path.display());
                return 1;
            }
        };

        let size = match sudoku::detect_grid_size(puzzle.chars().count()) {
            Ok(size) => size,
            Err(e) => {
                println!("c Puzzle {index}: {e}");
                continue;
            }
        };

        let formula = match &rules {
            Some(rules) => sudoku::puzzle_formula(&puzzle, rules),
            None => {
                if generated_rules.as_ref().map(|(s, _)| *s) != Some(size) {
                    match sudoku::rule_clauses(size) {
                        Ok(clauses) => generated_rules = Some((size, clauses)),
                        Err(e) => {
                            println!("c Puzzle {index}: {e}");
                            continue;
                        }
                    }
                }
                match &generated_rules {
                    Some((_, clauses)) => sudoku::puzzle_formula(&puzzle, clauses),
                    None => continue,
                }
            }
        };

        let formula = match formula {
            Ok(formula) => formula,
            Err(e) => {
                println!("c Puzzle {index}: {e}");
                continue;
            }
        };

        let mut the_context = Context::from_formula(config.clone(), formula);
        let report = match the_context.solve() {
            Ok(report) => report,
            Err(ErrorKind::Search(e)) => {
                println!("c Puzzle {index}: search abandoned, {e:?}");
                Report::Unknown
            }
            Err(e) => {
                println!("c Puzzle {index}: {e}");
                return 1;
            }
        };

        println!("c Puzzle {index}");
        println!("s {report}");

        if report == Report::Satisfiable {
            if args.grid {
                let grid = sudoku::grid_from_valuation(the_context.formula.valuation(), size);
                print!("{}", sudoku::render_grid(&grid));
            }

            if args.solution {
                let solution_path = records::solution_path(path, index);
                if let Err(e) = std::fs::write(&solution_path, solution_dimacs(&the_context.formula)) {
                    println!("c Error writing {}: {e}", solution_path.display());
                }
            }
        }

        let record = StatsRecord::from_counters(index, &the_context.counters);
        if let Some(results) = &results {
            if let Err(e) = records::append_record(results, &record) {
                println!("c Error writing {}: {e}", results.display());
            }
        }
        summary.push(record);
    }

    if args.summary {
        summary.print(args.strategy);
    }

    0
}
