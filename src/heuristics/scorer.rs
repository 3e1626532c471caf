/*!
Conflict scores, for use by the [VSIDS](crate::heuristics::VsidsSelector) heuristic.

Scores encode which atoms recur in conflicts.
On each backtrack from a node where conflicts were found:
- The score of each atom in each conflicting clause is [bumped](ConflictScorer::bump).
- Every score is [decayed](ConflictScorer::decay), so recent conflicts count for more than past conflicts.

```rust
# use sudoku_dpll::heuristics::ConflictScorer;
let mut scorer = ConflictScorer::new(3);
let conflict = vec![1, -3];

scorer.bump([conflict.as_slice()].into_iter(), 1.0);
scorer.decay(0.5);

assert_eq!(scorer.score_of(1), 0.5);
assert_eq!(scorer.score_of(2), 0.0);
assert_eq!(scorer.score_of(3), 0.5);
```
*/

use crate::{
    config::Score,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Scores of atoms, indexed by atom.
#[derive(Clone, Debug)]
pub struct ConflictScorer {
    scores: Vec<Score>,
}

impl ConflictScorer {
    /// Scores for each atom up to `atom_bound`, each initialised to zero.
    pub fn new(atom_bound: Atom) -> Self {
        ConflictScorer {
            scores: vec![0.0; atom_bound as usize + 1],
        }
    }

    /// The score of an atom, or zero for an atom without a score.
    pub fn score_of(&self, atom: Atom) -> Score {
        self.scores.get(atom as usize).copied().unwrap_or(0.0)
    }

    /// Every score, indexed by atom.
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// Increments the score of the atom of each literal of each clause by `amount`.
    ///
    /// An atom is incremented once for each occurrence.
    pub fn bump<'c>(&mut self, clauses: impl Iterator<Item = &'c [CLiteral]>, amount: Score) {
        for clause in clauses {
            for literal in clause {
                if let Some(score) = self.scores.get_mut(literal.atom() as usize) {
                    *score += amount;
                }
            }
        }
    }

    /// Multiplies every score by `factor`.
    pub fn decay(&mut self, factor: Score) {
        log::trace!(target: targets::SCORER, "Decay by {factor}");
        for score in &mut self.scores {
            *score *= factor;
        }
    }
}
