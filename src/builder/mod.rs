/*!
Tools for building a formula, and a context, from external input.

Formulas may be read in the [DIMACS](https://jix.github.io/varisat/manual/0.2.0/formats/dimacs.html) format through [read_dimacs].

```rust
# use sudoku_dpll::builder::read_dimacs;
# use sudoku_dpll::config::Config;
# use sudoku_dpll::context::Context;
# use sudoku_dpll::reports::Report;
let dimacs = b"
c a small example
p cnf 4 7
 1  2       0
 1 -2       0
-1  2       0
 1  2  3    0
-1  2 -3    0
       3 -4 0
-3     4
            0
";

let mut the_context = Context::from_dimacs(Config::default(), dimacs.as_slice()).unwrap();
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
assert_eq!(the_context.value_of(1), Some(true));
```

Building a formula from clauses given directly, e.g. by the [sudoku](crate::sudoku) module, is through [Formula::new](crate::formula::Formula::new).
*/

mod dimacs;
pub use dimacs::{read_dimacs, Dimacs};

use std::io::BufRead;

use crate::{config::Config, context::Context, formula::Formula, types::err::ErrorKind};

impl Context {
    /// A context from a configuration and a formula in DIMACS form.
    pub fn from_dimacs(config: Config, reader: impl BufRead) -> Result<Self, ErrorKind> {
        let formula = read_dimacs(reader)?.into_formula()?;
        Ok(Self::from_formula(config, formula))
    }
}

impl Formula {
    /// A formula from the given clauses, with the largest atom of the clauses as the bound.
    pub fn from_clauses(clauses: Vec<Vec<i32>>) -> Result<Self, ErrorKind> {
        let bound = clauses
            .iter()
            .flatten()
            .map(|literal| literal.unsigned_abs())
            .max()
            .unwrap_or(0);
        Formula::new(clauses, bound)
    }
}
