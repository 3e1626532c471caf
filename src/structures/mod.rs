//! Atoms, literals, clauses, and valuations.
//!
//! Each is a trait over the operations a search needs, with a single concrete type used by the rest of the library (e.g. [CLiteral](literal::CLiteral) for literals).
//!
//! ## Formulas
//!
//! A formula is a collection of [clauses](clause), interpreted as the conjunction of those clauses.
//! Formulas are stored, together with a valuation and supporting bookkeeping, in the [Formula](crate::formula::Formula) structure.
//!
//! ## Languages
//!
//! The *language* of a formula is the set of [atoms](atom) occurring in some clause of the formula.
//! Atoms need not be contiguous: sudoku cells are encoded as three digit integers, and so the language of a 4×4 puzzle is a sparse subset of 111..=444.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
