/*!
Simplification of a formula: removal of tautologies and unit propagation.

# Tautologies

A clause containing some literal and the negation of that literal is always true, and so may be [removed](Formula::remove_tautologies).
Whether a clause is a tautology does not depend on any other clause, and so removal first marks every tautology and then deactivates each marked clause.

# Unit propagation

[Unit propagation](Formula::propagate_units) is a fixpoint loop over passes.
Each pass:
1. Values the atom of each unit clause, and deactivates the unit clause.
2. For every remaining clause:
   + Deactivates the clause, if some literal of the clause is true.
   + Otherwise, drops every false literal from the clause.
     If the clause is then empty, the clause is noted as a conflict, and the pass continues.
3. Repeats, if some clause is a unit clause.

A single pass is insufficient, as dropping false literals may leave new unit clauses.

Two unit clauses on the same atom with opposite polarities do not overwrite one another.
The first values the atom, and the literal of the second is then false, so the second becomes an (empty) conflict.

```rust
# use sudoku_dpll::formula::Formula;
let mut formula = Formula::new(vec![vec![1], vec![-1, 2], vec![3, 4, -2]], 4).unwrap();
assert_eq!(formula.propagate_units(), Ok(2));

assert_eq!(formula.value_of(1), Some(true));
assert_eq!(formula.value_of(2), Some(true));
assert_eq!(formula.active_clauses().collect::<Vec<_>>(), vec![&[3, 4]]);

let mut formula = Formula::new(vec![vec![1], vec![-1]], 1).unwrap();
assert!(formula.propagate_units().is_ok());
assert!(!formula.is_consistent());
assert_eq!(formula.conflicts, vec![1]);
```

Conflicts are noted on the formula, and detection of a conflict is not an error.
*/

use crate::{
    formula::{ClauseKey, Formula},
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err::ErrorKind,
};

impl Formula {
    /// Deactivates every active clause which is a tautology.
    ///
    /// Returns a count of the clauses deactivated.
    pub fn remove_tautologies(&mut self) -> usize {
        let tautologies = self
            .active_keys()
            .filter(|key| {
                self.clause(*key)
                    .is_some_and(|clause| clause.literals().is_tautology())
            })
            .collect::<Vec<_>>();

        for key in &tautologies {
            self.deactivate(*key);
        }

        log::debug!(target: targets::PROPAGATION, "Removed {} tautologies", tautologies.len());
        tautologies.len()
    }

    /// Propagates unit clauses, to a fixpoint.
    ///
    /// Returns a count of the atoms valued by a unit clause.
    /// Any clause emptied is noted in [conflicts](Formula::conflicts).
    pub fn propagate_units(&mut self) -> Result<usize, ErrorKind> {
        let mut valued = 0;

        loop {
            valued += self.resolve_units()?;

            let mut fresh_unit = false;

            for key in 0..self.clause_count() {
                let satisfied = match self.clause(key) {
                    Some(clause) if clause.is_active() => clause
                        .literals()
                        .iter()
                        .any(|literal| self.value_of(literal.atom()) == Some(literal.polarity())),
                    _ => continue,
                };

                if satisfied {
                    self.deactivate(key);
                    continue;
                }

                match self.drop_false_literals(key) {
                    Some(0) => self.note_conflict(key),
                    Some(1) => fresh_unit = true,
                    _ => {}
                }
            }

            if !fresh_unit {
                break;
            }
        }

        Ok(valued)
    }

    /// Removes tautologies, and then propagates unit clauses.
    ///
    /// Returns a count of the atoms valued by a unit clause.
    pub fn init_simplify(&mut self) -> Result<usize, ErrorKind> {
        self.remove_tautologies();
        self.propagate_units()
    }

    /// Values the atom of each active unit clause and deactivates the clause, or notes a conflict if the literal of the unit clause is false.
    fn resolve_units(&mut self) -> Result<usize, ErrorKind> {
        let mut valued = 0;

        for key in 0..self.clause_count() {
            let literal = match self.clause(key) {
                Some(clause) if clause.is_active() && clause.len() == 1 => clause.literals()[0],
                _ => continue,
            };

            match self.value_of(literal.atom()) {
                None => {
                    self.assign(literal)?;
                    self.deactivate(key);
                    valued += 1;
                }

                Some(value) if value == literal.polarity() => self.deactivate(key),

                Some(_) => {
                    log::trace!(target: targets::PROPAGATION, "Unit {literal} is false");
                    self.drop_literal(key, 0);
                    self.note_conflict(key);
                }
            }
        }

        Ok(valued)
    }

    /// Drops every false literal from an active clause.
    ///
    /// Returns the count of literals remaining if some literal was dropped, and None otherwise.
    fn drop_false_literals(&mut self, key: ClauseKey) -> Option<usize> {
        let mut position = 0;
        let mut dropped = false;

        loop {
            let literal = match self.clause(key) {
                Some(clause) if position < clause.len() => clause.literals()[position],
                _ => break,
            };

            // The clause is not satisfied, so any valued literal is false.
            match self.value_of(literal.atom()) {
                Some(_) => {
                    self.drop_literal(key, position);
                    dropped = true;
                }
                None => position += 1,
            }
        }

        match dropped {
            true => self.clause(key).map(|clause| clause.len()),
            false => None,
        }
    }

    fn note_conflict(&mut self, key: ClauseKey) {
        log::debug!(target: targets::PROPAGATION, "Conflict on clause {key}");
        self.conflicts.push(key);
    }
}
