/*!
Heuristics for choosing the atom to split on.

- [Random](Heuristic::Random) chooses uniformly among unvalued atoms, using the (seedable) source of randomness of a context.
- [MOM](Heuristic::Mom) chooses the atom with the most occurrences in the clauses which remain.
- [VSIDS](Heuristic::Vsids) chooses the atom with the highest conflict score.
  See [Understanding VSIDS branching heuristics in conflict-driven clause-learning sat solvers](https://arxiv.org/abs/1506.08905) for an overview of VSIDS.

Each heuristic has a corresponding [variable selector](crate::heuristics::VariableSelector).
*/

/// Supported heuristics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum Heuristic {
    /// Choose an unvalued atom at random
    Random,

    /// Choose the atom with maximum occurrences in the remaining clauses
    #[default]
    Mom,

    /// Choose the atom with the highest (decaying) conflict score
    Vsids,
}

impl Heuristic {
    pub const MIN: Heuristic = Heuristic::Random;
    pub const MAX: Heuristic = Heuristic::Vsids;
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Mom => write!(f, "mom"),
            Self::Vsids => write!(f, "vsids"),
        }
    }
}
