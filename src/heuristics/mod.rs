/*!
Methods for choosing the atom to split on.

# Overview

A search asks a [VariableSelector] for an atom at each node where no further simplification is possible.
The selector is given the formula and the *candidates*, i.e. the atoms of the language without a value, in ascending order.

```rust,ignore
let candidates = formula.unvalued_atoms().collect::<Vec<_>>();
match selector.select(&formula, &candidates) {
    Some(atom) => { /* split on atom */ }
    None => { /* fail, and backtrack */ }
}
```

A selector returns `None` only if there are no candidates, and a search treats this as a failed node rather than as a satisfied formula.

# Variants

- [RandomSelector] chooses uniformly among candidates, using an injected source of randomness.
- [MomSelector] chooses the candidate with the most occurrences among the literals of active clauses.
- [VsidsSelector] chooses the candidate with the highest [conflict score](ConflictScorer).

# Ties

Where several candidates share the maximal count or score, the candidate with the lowest atom is chosen.
As candidates are given in ascending order, this amounts to keeping the first maximal candidate found.
*/

mod mom;
mod random;
mod scorer;
mod vsids;

pub use mom::MomSelector;
pub use random::RandomSelector;
pub use scorer::ConflictScorer;
pub use vsids::VsidsSelector;

use crate::{formula::Formula, structures::atom::Atom};

/// Something which chooses an atom to split on.
pub trait VariableSelector {
    /// Some candidate to split on, or `None` if there are no candidates.
    fn select(&mut self, formula: &Formula, candidates: &[Atom]) -> Option<Atom>;

    /// Whether the selector is steered by conflict scores.
    ///
    /// If so, a search updates the scores of the formula on each backtrack.
    fn learns_from_conflicts(&self) -> bool {
        false
    }
}

impl<S: VariableSelector + ?Sized> VariableSelector for &mut S {
    fn select(&mut self, formula: &Formula, candidates: &[Atom]) -> Option<Atom> {
        (**self).select(formula, candidates)
    }

    fn learns_from_conflicts(&self) -> bool {
        (**self).learns_from_conflicts()
    }
}

/// The first candidate with a maximal value on `key`.
fn first_maximal<K: PartialOrd>(candidates: &[Atom], key: impl Fn(Atom) -> K) -> Option<Atom> {
    let mut best: Option<(Atom, K)> = None;
    for candidate in candidates {
        let value = key(*candidate);
        match &best {
            Some((_, best_value)) if value <= *best_value => {}
            _ => best = Some((*candidate, value)),
        }
    }
    best.map(|(atom, _)| atom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_maximal_keeps_earliest() {
        let values = [0, 3, 5, 5, 1];
        let candidates = [1, 2, 3, 4];
        assert_eq!(first_maximal(&candidates, |a| values[a as usize]), Some(2));
        assert_eq!(first_maximal(&[], |a: Atom| a), None);
    }
}
