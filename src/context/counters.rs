use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of every atom chosen to split on.
    pub splits: usize,

    /// A count of every node of the search where both values of the split atom failed.
    pub backtracks: usize,

    /// A count of every clause emptied during unit propagation.
    pub conflicts: usize,

    /// A count of every atom valued by a unit clause.
    pub unit_propagations: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
