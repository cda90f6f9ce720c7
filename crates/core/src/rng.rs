//! RNG module - reproducible seeding
//!
//! Boards are seeded from a [`StdRng`] built from an explicit `u64` seed. When
//! no seed is configured a fresh one is drawn from the OS so the run can still
//! be reported (and replayed) later.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build the seeding RNG, returning it together with the seed actually used.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (StdRng::seed_from_u64(seed), seed)
}
