/*!
Drivers for a solve.

Each driver pairs the [search](crate::procedures::search) with a [variable selector](crate::heuristics::VariableSelector):
- [basic_dpll](GenericContext::basic_dpll) with a [RandomSelector], using the rng of the context.
- [mom_dpll](GenericContext::mom_dpll) with a [MomSelector].
- [vsids_dpll](GenericContext::vsids_dpll) with a [VsidsSelector].

And [solve](GenericContext::solve) dispatches to a driver by the [heuristic](crate::config::Config::heuristic) of the configuration.

A driver:
1. Removes tautologies and propagates units, once.
2. Searches.
3. On success, values every atom of the language without a value as false, and verifies the valuation against every clause of the formula as built.

The time taken and counts of splits, backtracks, conflicts, and unit propagations are recorded on the [counters](crate::context::Counters) of the context.

```rust
# use sudoku_dpll::config::Config;
# use sudoku_dpll::context::Context;
# use sudoku_dpll::formula::Formula;
# use sudoku_dpll::reports::Report;
let formula = Formula::new(vec![vec![1], vec![-1]], 1).unwrap();
let mut the_context = Context::from_formula(Config::default(), formula);

assert_eq!(the_context.mom_dpll(), Ok(Report::Unsatisfiable));
assert_eq!(the_context.counters.splits, 0);
assert_eq!(the_context.model(), None);
```
*/

use crate::{
    config::Heuristic,
    context::{ContextState, GenericContext},
    heuristics::{MomSelector, RandomSelector, VariableSelector, VsidsSelector},
    misc::log::targets::{self},
    reports::Report,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Solves the formula of the context, with the heuristic of the configuration.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        match self.config.heuristic.value {
            Heuristic::Random => self.basic_dpll(),
            Heuristic::Mom => self.mom_dpll(),
            Heuristic::Vsids => self.vsids_dpll(),
        }
    }

    /// Solves the formula of the context, choosing atoms at random.
    pub fn basic_dpll(&mut self) -> Result<Report, ErrorKind> {
        let mut selector = RandomSelector::new(std::mem::take(&mut self.rng));
        let result = self.dpll(&mut selector);
        self.rng = selector.into_rng();
        result
    }

    /// Solves the formula of the context, choosing atoms by occurrences in active clauses.
    pub fn mom_dpll(&mut self) -> Result<Report, ErrorKind> {
        self.dpll(&mut MomSelector::new())
    }

    /// Solves the formula of the context, choosing atoms by conflict score.
    pub fn vsids_dpll(&mut self) -> Result<Report, ErrorKind> {
        self.dpll(&mut VsidsSelector::new())
    }

    /// Solves the formula of the context, choosing atoms with `selector`.
    ///
    /// A context which has been solved returns the same report.
    /// A context whose solve was interrupted, e.g. by the time limit, may not be solved again.
    pub fn dpll<S: VariableSelector + ?Sized>(&mut self, selector: &mut S) -> Result<Report, ErrorKind> {
        match self.state {
            ContextState::Input => {}
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),
            ContextState::Solving => return Err(ErrorKind::InvalidState),
        }

        self.state = ContextState::Solving;
        let start = std::time::Instant::now();
        self.deadline = self
            .config
            .time_limit
            .value
            .and_then(|limit| start.checked_add(limit));

        let valued = self.formula.init_simplify()?;
        self.counters.unit_propagations += valued;
        self.counters.conflicts += self.formula.conflicts.len();
        self.formula.conflicts.clear();

        let result = self.splitting(selector, 0);
        self.counters.time = start.elapsed();

        match result {
            Ok(true) => {
                self.formula.complete_valuation();
                self.formula.verify()?;
                self.state = ContextState::Satisfiable;
            }

            Ok(false) => self.state = ContextState::Unsatisfiable,

            Err(ErrorKind::Search(err::SearchError::TimeUp)) => {
                log::info!(target: targets::SEARCH, "Time limit reached after {} splits", self.counters.splits);
                return Ok(Report::Unknown);
            }

            Err(e) => return Err(e),
        }

        log::info!(
            target: targets::SEARCH,
            "{} in {:.3}s with {} splits and {} backtracks",
            self.state,
            self.counters.time.as_secs_f64(),
            self.counters.splits,
            self.counters.backtracks
        );

        Ok(self.report())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{Config, Heuristic},
        context::{Context, ContextState},
        formula::Formula,
        reports::Report,
        types::err::ErrorKind,
    };

    fn solve_with(heuristic: Heuristic, clauses: Vec<Vec<i32>>, bound: u32) -> Context {
        let mut config = Config::default();
        config.heuristic.value = heuristic;
        let mut the_context = Context::from_formula(config, Formula::new(clauses, bound).unwrap());
        assert!(the_context.solve().is_ok());
        the_context
    }

    #[test]
    fn complete_model() {
        for heuristic in [Heuristic::Random, Heuristic::Mom, Heuristic::Vsids] {
            let the_context = solve_with(heuristic, vec![vec![1, 2], vec![-2, 5], vec![7, -7]], 7);
            let model = the_context.model().unwrap();
            assert_eq!(model.len(), 4);
            assert!(the_context.formula.verify().is_ok());
        }
    }

    #[test]
    fn tautologies_only() {
        let the_context = solve_with(Heuristic::Mom, vec![vec![1, -1], vec![2, -2, 3]], 3);
        assert_eq!(the_context.report(), Report::Satisfiable);
        assert_eq!(the_context.counters.splits, 0);
        assert_eq!(the_context.model(), Some(vec![-1, -2, -3]));
    }

    #[test]
    fn solved_context_is_stable() {
        let mut the_context = solve_with(Heuristic::Vsids, vec![vec![1, 2], vec![-1, 2], vec![1, -2]], 2);
        let splits = the_context.counters.splits;
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.counters.splits, splits);

        the_context.state = ContextState::Solving;
        assert_eq!(the_context.solve(), Err(ErrorKind::InvalidState));
    }

    #[test]
    fn time_limit_is_unknown() {
        let mut config = Config::default();
        config.time_limit.value = Some(std::time::Duration::ZERO);
        let clauses = vec![vec![1, 2, 3], vec![-1, -2], vec![-2, -3], vec![-1, -3]];
        let mut the_context = Context::from_formula(config, Formula::new(clauses, 3).unwrap());

        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.report(), Report::Unknown);
    }
}
