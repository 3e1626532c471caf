/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, and no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [simplification](crate::procedures::simplify), and unit propagation in particular.
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [the search](crate::procedures::search): decisions, backtracks, and limits.
    pub const SEARCH: &str = "search";

    /// Logs related to [variable selection](crate::heuristics).
    pub const HEURISTIC: &str = "heuristic";

    /// Logs related to [conflict scores](crate::heuristics::ConflictScorer).
    pub const SCORER: &str = "scorer";

    /// Logs related to [building](crate::builder) a formula.
    pub const BUILDER: &str = "builder";

    /// Logs related to [sudoku](crate::sudoku) encoding.
    pub const SUDOKU: &str = "sudoku";
}
