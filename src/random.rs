//! Module providing the random entries used by the randomized shapes

use std::ops::Range;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Capability handing out uniformly distributed matrix entries.
///
/// The shape builders only ever talk to this trait, so tests can substitute a fixed seed or a
/// scripted sequence of values.
pub trait EntrySource {
    /// Draws one value uniformly from the half-open `range`. The range is never empty.
    fn draw(&mut self, range: Range<i64>) -> i64;
}

/// [`EntrySource`] backed by the standard seedable PRNG of `rand`.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Deterministic source: equal seeds produce equal fixtures.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl EntrySource for SeededSource {
    fn draw(&mut self, range: Range<i64>) -> i64 {
        self.rng.random_range(range)
    }
}
