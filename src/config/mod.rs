/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each option is a [ConfigOption], which pairs a value with a name and bounds, so that front ends may validate requests before a solve.

```rust
# use sudoku_dpll::config::{Config, Heuristic};
let mut config = Config::default();
config.heuristic.value = Heuristic::Random;
config.seed.value = 73;

let (min, max) = config.vsids_decay.min_max();
assert!(min < config.vsids_decay.value && config.vsids_decay.value <= max);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod heuristic;
pub use heuristic::Heuristic;

/// Representation of a conflict score.
pub type Score = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which heuristic to use when choosing an atom to split on.
    pub heuristic: ConfigOption<Heuristic>,

    /// The amount added to the score of an atom for each occurrence in a conflict.
    pub vsids_bump: ConfigOption<Score>,

    /// The factor every score is multiplied by after conflicts have been bumped.
    pub vsids_decay: ConfigOption<Score>,

    /// The seed of the source of randomness.
    pub seed: ConfigOption<u64>,

    /// The maximum depth of a search, i.e. the number of open splits.
    pub depth_limit: ConfigOption<usize>,

    /// The time limit for a solve, if any.
    pub time_limit: ConfigOption<Option<std::time::Duration>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heuristic: ConfigOption {
                name: "heuristic",
                min: Heuristic::MIN,
                max: Heuristic::MAX,
                value: Heuristic::Mom,
            },

            vsids_bump: ConfigOption {
                name: "vsids_bump",
                min: Score::MIN_POSITIVE,
                max: (2.0 as Score).powi(64),
                value: 1.0,
            },

            vsids_decay: ConfigOption {
                name: "vsids_decay",
                min: Score::MIN_POSITIVE,
                max: 1.0,
                value: 0.95,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            depth_limit: ConfigOption {
                name: "depth_limit",
                min: 1,
                max: usize::MAX,
                value: 1 << 14,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: None,
                max: Some(std::time::Duration::MAX),
                value: None,
            },
        }
    }
}
