/*!
The trail of a formula, and methods to mutate a formula through the trail.

Each mutation of a formula is recorded as an [Undo] entry.
Entries are undone strictly in reverse order, so each entry only needs to store enough to invert a single mutation on the state left by later entries being undone.
*/

use crate::{
    formula::{ClauseKey, Formula},
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// An entry on the trail, recording a single mutation of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Undo {
    /// The atom was valued.
    Value(Atom),

    /// The clause was deactivated.
    Deactivate(ClauseKey),

    /// The literal at `position` of the clause was dropped.
    Drop { key: ClauseKey, position: usize },
}

impl Formula {
    /// A mark of the current point of the trail, to [backtrack](Formula::backtrack_to) to.
    pub fn trail_mark(&self) -> usize {
        self.trail.len()
    }

    /// Undoes every mutation made since `mark` was taken, in reverse order.
    ///
    /// Backtracking to a mark at or beyond the current point of the trail does nothing.
    pub fn backtrack_to(&mut self, mark: usize) {
        log::trace!(target: targets::SEARCH, "Backtrack over {} entries", self.trail.len().saturating_sub(mark));

        while self.trail.len() > mark {
            let Some(entry) = self.trail.pop() else {
                break;
            };

            match entry {
                Undo::Value(atom) => self.valuation[atom as usize] = None,

                Undo::Deactivate(key) => {
                    let clause = &mut self.clauses[key];
                    clause.set_active(true);
                    self.active_count += 1;
                    if clause.is_empty() {
                        self.empty_count += 1;
                    }
                }

                Undo::Drop { key, position } => {
                    let clause = &mut self.clauses[key];
                    if clause.is_empty() {
                        self.empty_count -= 1;
                    }
                    clause.restore_at(position);
                }
            }
        }
    }

    /// Deactivates an active clause, as the clause is known to be satisfied.
    pub(crate) fn deactivate(&mut self, key: ClauseKey) {
        let clause = &mut self.clauses[key];
        if !clause.is_active() {
            return;
        }
        clause.set_active(false);
        self.active_count -= 1;
        if clause.is_empty() {
            self.empty_count -= 1;
        }
        self.trail.push(Undo::Deactivate(key));
    }

    /// Drops the literal at `position` from an active clause, as the literal is known to be false.
    ///
    /// Returns true if the clause is empty after the literal is dropped.
    pub(crate) fn drop_literal(&mut self, key: ClauseKey, position: usize) -> bool {
        let clause = &mut self.clauses[key];
        clause.drop_at(position);
        self.trail.push(Undo::Drop { key, position });
        match clause.is_empty() {
            true => {
                self.empty_count += 1;
                true
            }
            false => false,
        }
    }

    /// The trail, from first mutation to last.
    pub fn trail(&self) -> &[Undo] {
        &self.trail
    }
}
