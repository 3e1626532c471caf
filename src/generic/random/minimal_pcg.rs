//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal PCG32 (XSH RR) generator from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.
//!
//! Each [context](crate::context) owns a source of rng, which is used by the [random](crate::heuristics::RandomSelector) heuristic.
//! Seeding the source from the [configuration](crate::config::Config::seed) makes a search with the random heuristic reproducible.
//!
//! ```rust
//! # use sudoku_dpll::generic::random::MinimalPCG32;
//! # use rand::{Rng, SeedableRng};
//! let mut a = MinimalPCG32::seed_from_u64(73);
//! let mut b = MinimalPCG32::seed_from_u64(73);
//! assert_eq!(a.gen::<u32>(), b.gen::<u32>());
//! ```

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

const MULTIPLIER: u64 = 6364136223846793005;

/// Odd, and otherwise arbitrary.
const INCREMENT: u64 = 1442695040888963407;

/// The state of the generator.
#[derive(Clone, Debug)]
pub struct MinimalPCG32 {
    state: u64,
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut the_rng = Self { state: 0 };
        the_rng.next_u32();
        the_rng.state = the_rng.state.wrapping_add(u64::from_le_bytes(seed));
        the_rng.next_u32();
        the_rng
    }
}
