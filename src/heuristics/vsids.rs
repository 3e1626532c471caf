use crate::{
    formula::Formula,
    heuristics::{first_maximal, VariableSelector},
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// Chooses the candidate with the highest conflict score.
///
/// Scores are only read here.
/// Scores are updated by a search on backtrack, through the [scorer](crate::heuristics::ConflictScorer) of the formula.
#[derive(Default)]
pub struct VsidsSelector {}

impl VsidsSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VariableSelector for VsidsSelector {
    fn select(&mut self, formula: &Formula, candidates: &[Atom]) -> Option<Atom> {
        let choice = first_maximal(candidates, |atom| formula.scores.score_of(atom));
        log::trace!(target: targets::HEURISTIC, "VSIDS choice {choice:?}");
        choice
    }

    fn learns_from_conflicts(&self) -> bool {
        true
    }
}
