/*!
A formula, together with a valuation and the bookkeeping required to search for a satisfying valuation.

# Overview

A formula is built once, from a collection of clauses, and is then mutated destructively as a search descends:
- Clauses known to be satisfied are *deactivated*.
- Literals known to be false are *dropped* from the clauses which contain them.
- Atoms are *valued*, either by [unit propagation](crate::procedures::simplify) or by a decision made during [search](crate::procedures::search).

Every mutation is recorded on a trail, and [backtracking](Formula::backtrack_to) to some mark undoes each mutation recorded after the mark, in reverse order.
As a consequence, the state of the formula after backtracking to a mark is *exactly* the state of the formula when the mark was taken, including the order of literals in each clause.
And so, when exploring the two values of an atom in turn, the exploration of the second value observes nothing of the exploration of the first.

Clauses are stored in an arena, and are never removed from the arena.
A clause is identified by its [key](ClauseKey), i.e. its index in the arena, which is stable for the lifetime of the formula.

# Example

```rust
# use sudoku_dpll::formula::Formula;
let mut formula = Formula::new(vec![vec![1, 2], vec![-1, 3]], 3).unwrap();

let mark = formula.trail_mark();
assert!(formula.decide(1, true).is_ok());
assert_eq!(formula.value_of(1), Some(true));

formula.backtrack_to(mark);
assert_eq!(formula.value_of(1), None);
```

# Scores

The formula also stores the [conflict scores](crate::heuristics::ConflictScorer) of each atom.
Scores are *not* recorded on the trail, and so persist across backtracks for the lifetime of the formula.
*/

mod stored;
mod trail;

pub use stored::StoredClause;
pub use trail::Undo;

use crate::{
    config::Score,
    heuristics::ConflictScorer,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{self, ErrorKind},
};

/// The key of a clause, i.e. the index of the clause in the arena of a formula.
pub type ClauseKey = usize;

/// A formula, valuation, trail, and associated bookkeeping.
pub struct Formula {
    /// The arena of clauses.
    clauses: Vec<StoredClause>,

    /// The valuation, indexed by atom.
    valuation: CValuation,

    /// The atoms occurring in some clause, in ascending order.
    language: Vec<Atom>,

    /// Every mutation made to clauses or the valuation, in order.
    trail: Vec<Undo>,

    /// A count of active clauses.
    active_count: usize,

    /// A count of active clauses without any literal.
    empty_count: usize,

    /// Clauses which became empty during propagation, and which are yet to be consumed by a search.
    pub conflicts: Vec<ClauseKey>,

    /// Conflict scores of each atom.
    pub scores: ConflictScorer,
}

impl Formula {
    /// A formula from the given clauses, where each atom is at most `atom_bound`.
    ///
    /// Fails if some clause is empty, contains a zero literal, or contains a literal whose atom exceeds the bound.
    /// Duplicate literals within a clause are collapsed to the first occurrence.
    ///
    /// Storage for atoms is sized by the largest atom occurring in some clause, and not by the bound.
    pub fn new(clauses: Vec<CClause>, atom_bound: Atom) -> Result<Self, ErrorKind> {
        let atom_bound = std::cmp::min(atom_bound, ATOM_MAX);
        let mut largest_atom: Atom = 0;
        let mut stored_clauses = Vec::with_capacity(clauses.len());

        for clause in clauses {
            if clause.is_empty() {
                return Err(err::BuildError::EmptyClause.into());
            }

            let mut literals: CClause = Vec::with_capacity(clause.len());
            for literal in clause {
                if literal == 0 {
                    return Err(err::BuildError::ZeroLiteral.into());
                }
                if literal.atom() > atom_bound {
                    return Err(err::BuildError::AtomOutOfBounds(literal.atom()).into());
                }
                if !literals.contains(&literal) {
                    literals.push(literal);
                }
                largest_atom = std::cmp::max(largest_atom, literal.atom());
            }

            stored_clauses.push(StoredClause::new(literals));
        }

        let mut occurs = vec![false; largest_atom as usize + 1];
        for clause in &stored_clauses {
            for literal in clause.literals() {
                occurs[literal.atom() as usize] = true;
            }
        }

        let language = occurs
            .iter()
            .enumerate()
            .filter_map(|(atom, present)| match present {
                true => Some(atom as Atom),
                false => None,
            })
            .collect::<Vec<_>>();

        log::info!(target: targets::BUILDER, "Formula with {} clauses over {} atoms", stored_clauses.len(), language.len());

        Ok(Formula {
            active_count: stored_clauses.len(),
            empty_count: 0,
            clauses: stored_clauses,
            valuation: vec![None; largest_atom as usize + 1],
            language,
            trail: Vec::default(),
            conflicts: Vec::default(),
            scores: ConflictScorer::new(largest_atom),
        })
    }

    /// The largest atom of the formula, and so the largest atom which may be valued.
    pub fn atom_bound(&self) -> Atom {
        (self.valuation.len() - 1) as Atom
    }

    /// The atoms occurring in some clause of the formula, in ascending order.
    pub fn language(&self) -> &[Atom] {
        &self.language
    }

    /// A count of all clauses, active or otherwise.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of active clauses, i.e. clauses not known to be satisfied.
    pub fn active_clause_count(&self) -> usize {
        self.active_count
    }

    /// The stored clause with the given key, if it exists.
    pub fn clause(&self, key: ClauseKey) -> Option<&StoredClause> {
        self.clauses.get(key)
    }

    /// An iterator over the keys of all active clauses, in ascending order.
    pub fn active_keys(&self) -> impl Iterator<Item = ClauseKey> + '_ {
        self.clauses
            .iter()
            .enumerate()
            .filter_map(|(key, clause)| match clause.is_active() {
                true => Some(key),
                false => None,
            })
    }

    /// An iterator over the (remaining) literals of all active clauses.
    pub fn active_clauses(&self) -> impl Iterator<Item = &[CLiteral]> {
        self.clauses
            .iter()
            .filter(|clause| clause.is_active())
            .map(|clause| clause.literals())
    }

    /// An iterator over all clauses of the formula, as given when the formula was built.
    pub fn original_clauses(&self) -> impl Iterator<Item = &[CLiteral]> {
        self.clauses.iter().map(|clause| clause.original_literals())
    }

    /// The value of an atom on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The current valuation.
    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// An iterator over atoms of the language without a value, in ascending order.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.language
            .iter()
            .copied()
            .filter(|atom| self.valuation[*atom as usize].is_none())
    }

    /// Whether every active clause is satisfied on the current valuation.
    /// Vacuously true if no clause is active.
    pub fn is_satisfied(&self) -> bool {
        match self.active_count {
            0 => true,
            _ => self
                .active_clauses()
                .all(|clause| clause.satisfied_on(&self.valuation)),
        }
    }

    /// Whether no active clause is empty.
    pub fn is_consistent(&self) -> bool {
        self.empty_count == 0
    }

    /// Values the atom of `literal` with the polarity of `literal`.
    ///
    /// Valuing an atom with the value it already has does nothing.
    /// Valuing an atom with the opposite of the value it has is an error, and the valuation is unchanged.
    pub fn assign(&mut self, literal: CLiteral) -> Result<(), ErrorKind> {
        let atom = literal.atom();
        if atom == 0 {
            return Err(err::ValuationError::UnknownAtom(atom).into());
        }
        match self.valuation.get(atom as usize).copied() {
            None => Err(err::ValuationError::UnknownAtom(atom).into()),
            Some(None) => {
                log::trace!(target: targets::PROPAGATION, "Value {literal}");
                self.valuation[atom as usize] = Some(literal.polarity());
                self.trail.push(Undo::Value(atom));
                Ok(())
            }
            Some(Some(value)) if value == literal.polarity() => Ok(()),
            Some(Some(_)) => Err(err::ValuationError::Conflict(atom).into()),
        }
    }

    /// Values `atom` with `polarity`, as a decision.
    pub fn decide(&mut self, atom: Atom, polarity: bool) -> Result<(), ErrorKind> {
        self.assign(CLiteral::new(atom, polarity))
    }

    /// Values each atom of the language without a value as false.
    ///
    /// Intended for use once every clause is satisfied, in order to obtain a complete valuation.
    pub fn complete_valuation(&mut self) {
        let unvalued = self.unvalued_atoms().collect::<Vec<_>>();
        for atom in unvalued {
            self.valuation[atom as usize] = Some(false);
            self.trail.push(Undo::Value(atom));
        }
    }

    /// Bumps the score of each atom in each of the given clauses, as given when built, and then decays every score.
    ///
    /// The full clause is used, as a conflicting clause has no remaining literals.
    pub fn score_conflicts(&mut self, keys: &[ClauseKey], bump: Score, decay: Score) {
        log::debug!(target: targets::SCORER, "Scoring {} conflicts", keys.len());
        let clauses = &self.clauses;
        self.scores.bump(
            keys.iter()
                .filter_map(|key| clauses.get(*key))
                .map(|clause| clause.original_literals()),
            bump,
        );
        self.scores.decay(decay);
    }

    /// Checks every clause of the formula, as given when built, is satisfied on the current valuation.
    pub fn verify(&self) -> Result<(), ErrorKind> {
        match self
            .original_clauses()
            .all(|clause| clause.satisfied_on(&self.valuation))
        {
            true => Ok(()),
            false => Err(ErrorKind::InvalidSolution),
        }
    }
}
