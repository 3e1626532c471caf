use clap::Parser;
use sudoku_dpll::config::{Config, Heuristic, Score};

/// Solves sudoku puzzles, or a formula in DIMACS form, by DPLL search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A DIMACS file of the rules of sudoku, or of any formula when no puzzles are given
    #[arg(short, long)]
    pub rules: Option<std::path::PathBuf>,

    /// A file of puzzles, one per line, with '.' or '0' for an empty cell
    #[arg(short, long)]
    pub puzzles: Option<std::path::PathBuf>,

    /// The heuristic used to choose an atom to split on
    #[arg(short, long, default_value_t, value_enum)]
    pub strategy: Heuristic,

    /// The seed of the random heuristic
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// The factor conflict scores are decayed by on each backtrack
    #[arg(long, default_value_t = 0.95)]
    pub decay: Score,

    /// Time limit for each solve, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(std::time::Duration::from_secs))]
    pub time_limit: Option<std::time::Duration>,

    /// A directory to append a line of stats for each puzzle to
    #[arg(long)]
    pub results_dir: Option<std::path::PathBuf>,

    /// Write the solution of each puzzle as DIMACS, alongside the file of puzzles
    #[arg(long, default_value_t = false)]
    pub solution: bool,

    /// Display the grid of each solved puzzle
    #[arg(short, long, default_value_t = false)]
    pub grid: bool,

    /// Display the mean and standard deviation of stats once every puzzle has been solved
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

impl Args {
    /// A configuration from the arguments, or the name of the first option out of bounds.
    pub fn config(&self) -> Result<Config, &'static str> {
        let mut config = Config::default();

        config.heuristic.value = self.strategy;
        config.seed.value = self.seed;
        config.time_limit.value = self.time_limit;
        config.vsids_decay.set(self.decay).map_err(|option| option.name)?;

        Ok(config)
    }
}
