/*!
An atom (aka. a 'variable').

Each atom is a positive u32, and the magnitude of an [integer literal](crate::structures::literal) is the atom of the literal.

Atoms are used as the indicies of structures (a valuation, conflict scores, etc.) and so each structure of this kind has a bound on the atoms it supports.
The zero index of such structures is unused.

```rust
# use sudoku_dpll::structures::atom::Atom;
# use sudoku_dpll::structures::literal::{IntLiteral, Literal};
let atom: Atom = 213;
assert_eq!((-213 as IntLiteral).atom(), atom);
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom, so that every atom may be negated as an [IntLiteral](crate::structures::literal::IntLiteral).
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
