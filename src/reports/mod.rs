/*!
Reports for the context.

- A high-level [Report] on the outcome of a solve.
- The [solution](solution_dimacs) of a satisfiable formula, in DIMACS form.
- A [record](StatsRecord) of the counters of a solve, as a single line.
*/

use crate::{
    context::{ContextState, Counters},
    formula::Formula,
    structures::literal::{CLiteral, Literal},
};

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The valuation of a formula as a DIMACS formula of unit clauses, one for each atom of the language with a value.
///
/// ```rust
/// # use sudoku_dpll::formula::Formula;
/// # use sudoku_dpll::reports::solution_dimacs;
/// let mut formula = Formula::new(vec![vec![1, -3]], 3).unwrap();
/// formula.assign(-1).unwrap();
/// formula.assign(-3).unwrap();
///
/// assert_eq!(solution_dimacs(&formula), "p cnf 2 2\n-1 0\n-3 0\n");
/// ```
pub fn solution_dimacs(formula: &Formula) -> String {
    let units = formula
        .language()
        .iter()
        .filter_map(|atom| {
            formula
                .value_of(*atom)
                .map(|value| CLiteral::new(*atom, value))
        })
        .collect::<Vec<_>>();

    let mut the_string = format!("p cnf {} {}\n", units.len(), units.len());
    for unit in units {
        the_string.push_str(format!("{unit} 0\n").as_str());
    }
    the_string
}

/// The counters of a solve, in the order they are recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsRecord {
    /// Some index of the solve, e.g. the line of a puzzle in a file of puzzles.
    pub index: usize,

    /// Elapsed wall-clock time, in seconds.
    pub seconds: f64,

    pub backtracks: usize,
    pub splits: usize,
    pub conflicts: usize,
    pub unit_propagations: usize,
}

impl StatsRecord {
    pub fn from_counters(index: usize, counters: &Counters) -> Self {
        StatsRecord {
            index,
            seconds: counters.time.as_secs_f64(),
            backtracks: counters.backtracks,
            splits: counters.splits,
            conflicts: counters.conflicts,
            unit_propagations: counters.unit_propagations,
        }
    }
}

/// A single line of space-separated values, without a trailing newline.
impl std::fmt::Display for StatsRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:.6} {} {} {} {}",
            self.index,
            self.seconds,
            self.backtracks,
            self.splits,
            self.conflicts,
            self.unit_propagations
        )
    }
}
