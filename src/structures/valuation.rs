/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is a vector of optional booleans, where each index of the vector is interpreted as an atom and the zero index is unused.

 -  *v*\[a\] = Some(true) *if any only if* the value of a is true.
 -  *v*\[a\] = Some(false) *if any only if* the value of a is false.
 -  *v*\[a\] = None *if any only if* a has no value.

An atom outside the bounds of the vector has no value.

```rust
# use sudoku_dpll::structures::valuation::Valuation;
let valuation = vec![None, None, Some(true), None, Some(false)];

assert_eq!(valuation.value_of(2), Some(true));
assert_eq!(valuation.value_of(9), None);
assert_eq!(valuation.valued_atoms().collect::<Vec<_>>(), vec![2, 4]);
```
*/

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// The value of an atom on the valuation, if any.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through all (Atom, Value) pairs for such that the atom has some value.
    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;

    /// An iterator through atoms which have some value.
    fn valued_atoms(&self) -> impl Iterator<Item = Atom>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }

    fn valued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.atom_valued_pairs().map(|(atom, _)| atom)
    }
}
