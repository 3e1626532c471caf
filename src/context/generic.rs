use crate::{
    config::Config,
    formula::Formula,
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

use super::{ContextState, Counters};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used by the [random driver](GenericContext::basic_dpll), which takes the rng from the context for the duration of a solve to appease the borrow checker.
///
/// # Example
///
/// ```rust
/// # use sudoku_dpll::context::GenericContext;
/// # use sudoku_dpll::generic::random::MinimalPCG32;
/// # use sudoku_dpll::config::Config;
/// # use sudoku_dpll::formula::Formula;
/// # use rand::SeedableRng;
/// let formula = Formula::new(vec![vec![1, -2]], 2).unwrap();
/// let rng = MinimalPCG32::seed_from_u64(7);
/// let context = GenericContext::from_parts(Config::default(), formula, rng);
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The formula, valuation, and associated bookkeeping.
    pub formula: Formula,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The time by which a solve should end, if any.
    pub(crate) deadline: Option<std::time::Instant>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context from a configuration, formula, and source of rng.
    pub fn from_parts(config: Config, formula: Formula, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            formula,
            state: ContextState::Input,
            rng,
            deadline: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The value of an atom on the valuation of the formula.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.formula.value_of(atom)
    }

    /// The satisfying valuation found by a solve as literals, one per atom of the language, in ascending atom order.
    ///
    /// None, unless the formula is known to be satisfiable.
    pub fn model(&self) -> Option<Vec<CLiteral>> {
        if self.state != ContextState::Satisfiable {
            return None;
        }
        let model = self
            .formula
            .language()
            .iter()
            .filter_map(|atom| {
                self.formula
                    .value_of(*atom)
                    .map(|value| CLiteral::new(*atom, value))
            })
            .collect();
        Some(model)
    }
}
