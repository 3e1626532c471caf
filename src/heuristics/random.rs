use rand::{seq::SliceRandom, Rng};

use crate::{
    formula::Formula,
    heuristics::VariableSelector,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// Chooses uniformly among candidates.
///
/// The selector owns its source of randomness, so a search may be reproduced by seeding the source.
///
/// ```rust
/// # use sudoku_dpll::formula::Formula;
/// # use sudoku_dpll::generic::random::MinimalPCG32;
/// # use sudoku_dpll::heuristics::{RandomSelector, VariableSelector};
/// # use rand::SeedableRng;
/// let formula = Formula::new(vec![vec![1, 2, 3]], 3).unwrap();
///
/// let mut a = RandomSelector::new(MinimalPCG32::seed_from_u64(9));
/// let mut b = RandomSelector::new(MinimalPCG32::seed_from_u64(9));
/// assert_eq!(a.select(&formula, &[1, 2, 3]), b.select(&formula, &[1, 2, 3]));
/// ```
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        RandomSelector { rng }
    }

    /// Returns the source of randomness, for reuse.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> VariableSelector for RandomSelector<R> {
    fn select(&mut self, _formula: &Formula, candidates: &[Atom]) -> Option<Atom> {
        let choice = candidates.choose(&mut self.rng).copied();
        log::trace!(target: targets::HEURISTIC, "Random choice {choice:?} of {}", candidates.len());
        choice
    }
}
