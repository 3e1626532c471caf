//! Various procedures for mutating a formula or a context.
//!
//! For the most part these are methods accessed via a formula or a context, and are placed here for documentation.

pub mod search;
pub mod simplify;
pub mod solve;
