//! A clause is a disjunction of literals, represented as a vector of literals.
//!
//! ```rust
//! # use sudoku_dpll::structures::clause::Clause;
//! let clause = vec![23, -41, 3];
//!
//! let mut valuation = vec![None; 42];
//! valuation[23] = Some(false);
//! valuation[3] = Some(false);
//! assert!(!clause.satisfied_on(&valuation));
//!
//! valuation[41] = Some(false);
//! assert!(clause.satisfied_on(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause containing a literal and its negation is a tautology, and is always true.

use crate::structures::{
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// Operations on a clause, for anything which dereferences to a slice of literals.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// Whether the clause contains some literal and the negation of that literal.
    fn is_tautology(&self) -> bool;

    /// Whether some literal of the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// A clause, as built and as read from DIMACS.
pub type CClause = Vec<CLiteral>;

impl<T: std::ops::Deref<Target = [CLiteral]>> Clause for T {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self.iter() {
            the_string.push_str(format!("{literal} ").as_str());
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn is_tautology(&self) -> bool {
        self.iter()
            .any(|literal| self.iter().any(|other| *other == literal.negate()))
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tautology() {
        assert!(vec![1, 2, -1].is_tautology());
        assert!(!vec![1, 2, 1].is_tautology());
        assert!(!Vec::<CLiteral>::new().is_tautology());
    }

    #[test]
    fn dimacs() {
        assert_eq!(vec![1, -2, 3].as_dimacs(true), "1 -2 3 0");
        assert_eq!(vec![-7].as_dimacs(false), "-7");
    }
}
