use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use sudoku_dpll::{config::Heuristic, reports::StatsRecord};

/// The file stats of puzzles from `puzzles` solved with `heuristic` are appended to.
pub fn results_path(dir: &Path, puzzles: &Path, heuristic: Heuristic) -> PathBuf {
    dir.join(format!("{}_{heuristic}.txt", file_stem(puzzles)))
}

/// The file the solution of the puzzle at `index` of `puzzles` is written to.
pub fn solution_path(puzzles: &Path, index: usize) -> PathBuf {
    puzzles.with_file_name(format!("{}_{index}.out", file_stem(puzzles)))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "puzzles".to_string())
}

/// Appends a record as a line to the file at `path`, creating the file if needed.
pub fn append_record(path: &Path, record: &StatsRecord) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{record}")
}

/// Mean and (population) standard deviation of each column of stats.
#[derive(Default)]
pub struct Summary {
    records: Vec<StatsRecord>,
}

impl Summary {
    pub fn push(&mut self, record: StatsRecord) {
        self.records.push(record);
    }

    fn column(&self, f: impl Fn(&StatsRecord) -> f64) -> (f64, f64) {
        let count = self.records.len() as f64;
        if count == 0.0 {
            return (0.0, 0.0);
        }
        let mean = self.records.iter().map(&f).sum::<f64>() / count;
        let variance = self
            .records
            .iter()
            .map(|record| (f(record) - mean).powi(2))
            .sum::<f64>()
            / count;
        (mean, variance.sqrt())
    }

    pub fn print(&self, heuristic: Heuristic) {
        println!("c Stats for {heuristic} over {} puzzles:", self.records.len());

        let columns: [(&str, Box<dyn Fn(&StatsRecord) -> f64>); 5] = [
            ("Runtime", Box::new(|r: &StatsRecord| r.seconds)),
            ("Backtracks", Box::new(|r: &StatsRecord| r.backtracks as f64)),
            ("Splits", Box::new(|r: &StatsRecord| r.splits as f64)),
            ("Conflicts", Box::new(|r: &StatsRecord| r.conflicts as f64)),
            ("Unit propagations", Box::new(|r: &StatsRecord| r.unit_propagations as f64)),
        ];

        for (name, f) in columns {
            let (mean, std) = self.column(f);
            println!("c   {name}: Mean = {mean:.2}, Std = {std:.2}");
        }
    }
}
