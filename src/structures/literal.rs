//! A literal asserts some value of an atom.
//!
//! Literals are signed integers throughout: the magnitude is the atom, and a positive literal asserts the atom is true while a negative literal asserts the atom is false.
//! Sudoku cells follow the same convention, so `-213` reads "row 2, column 1 does not hold 3".
//!
//! ```rust
//! # use sudoku_dpll::structures::literal::{IntLiteral, Literal};
//! let literal = IntLiteral::new(79, false);
//!
//! assert_eq!(literal, -79);
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.polarity());
//! assert!(literal.negate().polarity());
//! ```

use crate::structures::atom::Atom;

/// Access to the atom and polarity of a literal.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// The literal asserting `atom` has value `polarity`.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The literal asserting the opposite value of the same atom.
    fn negate(&self) -> Self;

    fn atom(&self) -> Atom;

    /// True for a positive literal, false for a negative literal.
    fn polarity(&self) -> bool;
}

/// A literal as a signed integer, as in DIMACS.
pub type IntLiteral = i32;

/// The literal used throughout the library.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        let magnitude = atom as IntLiteral;
        if polarity {
            magnitude
        } else {
            -magnitude
        }
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        *self > 0
    }
}
