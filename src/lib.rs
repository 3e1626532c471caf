//! A library for determining the satisfiability of boolean formulas in conjunctive normal form by the Davis–Putnam–Logemann–Loveland procedure, with sudoku puzzles as the motivating source of formulas.
//!
//! # Orientation
//!
//! The library is designed around a [context], which owns:
//! - A [formula](crate::formula::Formula): a fixed arena of clauses, a valuation, and a trail of undo entries.
//! - A [configuration](crate::config::Config), most notably the choice of [heuristic](crate::config::Heuristic).
//! - [Counters](crate::context::Counters) of splits, backtracks, conflicts, and unit propagations.
//! - A seedable source of randomness.
//!
//! A solve is split into a handful of [procedures]:
//! - [Simplification](crate::procedures::simplify): removal of tautologies and unit propagation to a fixpoint.
//! - [Search](crate::procedures::search): the split/backtrack procedure.
//! - [Drivers](crate::procedures::solve): thin wrappers which pair the search with a [variable selector](crate::heuristics::VariableSelector).
//!
//! Branching never copies the formula.
//! Instead, each mutation made while exploring a branch is recorded on a trail and undone on backtrack, so the second branch of a split starts from exactly the state the first began from.
//!
//! Sudoku puzzles are translated to clauses by the [sudoku] module, and formulas may also be read in the DIMACS format through the [builder].
//!
//! # Example
//!
//! ```rust
//! # use sudoku_dpll::config::{Config, Heuristic};
//! # use sudoku_dpll::context::Context;
//! # use sudoku_dpll::formula::Formula;
//! # use sudoku_dpll::reports::Report;
//! let clauses = vec![vec![1, 2], vec![-1, 2], vec![1, -2]];
//! let formula = Formula::new(clauses, 2).unwrap();
//!
//! let mut config = Config::default();
//! config.heuristic.value = Heuristic::Vsids;
//!
//! let mut the_context = Context::from_formula(config, formula);
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.value_of(1), Some(true));
//! assert_eq!(the_context.value_of(2), Some(true));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with targets listed in [misc::log].
//! No logger is installed by the library.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), decisions and backtracks can be found with `RUST_LOG=search=trace …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod formula;
pub mod generic;
pub mod heuristics;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod sudoku;
pub mod types;
