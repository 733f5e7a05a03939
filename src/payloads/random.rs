//! Random source injection and sampling helpers.
//!
//! Each request gets its own generator from a [`RandomSource`], so no RNG
//! state is shared between concurrent requests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

/// Hands out a generator per request.
pub trait RandomSource: Send + Sync {
    fn rng(&self) -> Box<dyn RngCore + Send>;
}

/// OS-seeded generators; every request sees different values.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyRandom;

impl RandomSource for EntropyRandom {
    fn rng(&self) -> Box<dyn RngCore + Send> {
        Box::new(StdRng::from_entropy())
    }
}

/// Generators seeded from a fixed value; every request sees the same
/// sequence. Used by tests.
#[derive(Debug, Clone, Copy)]
pub struct SeededRandom(pub u64);

impl RandomSource for SeededRandom {
    fn rng(&self) -> Box<dyn RngCore + Send> {
        Box::new(StdRng::seed_from_u64(self.0))
    }
}

/// Uniform integer in `[low, high]`.
pub fn int_in(rng: &mut dyn RngCore, low: u32, high: u32) -> u32 {
    rng.gen_range(low..=high)
}

/// Uniform decimal in `[low, high)` formatted with one decimal place.
/// Rounding can produce `high` itself (`9.96` → `"10.0"`).
pub fn decimal_in(rng: &mut dyn RngCore, low: f64, high: f64) -> String {
    format!("{:.1}", rng.gen_range(low..high))
}

/// One element of the slice, `None` when it is empty.
pub fn pick<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}
