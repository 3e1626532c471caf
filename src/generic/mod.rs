//! Generic structures, not tied to a formula or a solve.

pub mod random;
