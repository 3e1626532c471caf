use crate::{
    formula::Formula,
    heuristics::{first_maximal, VariableSelector},
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal},
};

/// Chooses the candidate with Maximum Occurrences in reMaining clauses.
///
/// Occurrences are counted over the remaining literals of every active clause, regardless of polarity.
#[derive(Default)]
pub struct MomSelector {
    /// Counts indexed by atom, kept between calls to avoid reallocation.
    counts: Vec<usize>,
}

impl MomSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VariableSelector for MomSelector {
    fn select(&mut self, formula: &Formula, candidates: &[Atom]) -> Option<Atom> {
        self.counts.clear();
        self.counts.resize(formula.atom_bound() as usize + 1, 0);

        for clause in formula.active_clauses() {
            for literal in clause {
                self.counts[literal.atom() as usize] += 1;
            }
        }

        let counts = &self.counts;
        let count_of = |atom: Atom| counts.get(atom as usize).copied().unwrap_or(0);
        let choice = first_maximal(candidates, count_of);

        log::trace!(target: targets::HEURISTIC, "MOM choice {choice:?} with {:?} occurrences", choice.map(count_of));
        choice
    }
}
