use crate::{config::Config, formula::Formula, generic::random::MinimalPCG32};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration and formula, with rng seeded by the configuration.
    pub fn from_formula(config: Config, formula: Formula) -> Self {
        let rng = MinimalPCG32::seed_from_u64(config.seed.value);
        Self::from_parts(config, formula, rng)
    }
}
