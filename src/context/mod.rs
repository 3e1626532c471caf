/*!
The context, which owns a formula and within which a solve takes place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, while a [Context] fixes the source to [MinimalPCG32](crate::generic::random::MinimalPCG32), seeded from the [configuration](crate::config::Config::seed).

# Example
```rust
# use sudoku_dpll::context::Context;
# use sudoku_dpll::config::Config;
# use sudoku_dpll::formula::Formula;
# use sudoku_dpll::reports::Report;
let formula = Formula::new(vec![vec![1, 2], vec![-1]], 2).unwrap();
let mut the_context = Context::from_formula(Config::default(), formula);

assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.value_of(1), Some(false));
assert_eq!(the_context.value_of(2), Some(true));
assert_eq!(the_context.counters.splits, 0);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The state of a context.
pub enum ContextState {
    /// The context has a formula, and no solve has been made.
    Input,

    /// A complete valuation satisfying the formula has been found.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,

    /// A solve is in progress, or was interrupted.
    Solving,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Solving => write!(f, "Solving"),
        }
    }
}
