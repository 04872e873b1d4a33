//! Injectable randomness for square placement and direction.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform random numbers.
pub trait RandomSource {
    /// Uniform in `[0, 1)`.
    fn next_float(&mut self) -> f64;
    /// Uniform in `[0, bound)`. `bound` must be non-zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

/// Seeded PCG32 generator used by the browser build.
pub struct PcgSource {
    rng: Pcg32,
}

impl PcgSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PcgSource {
    fn next_float(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_int(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}

/// Seed from browser entropy. Falls back to the frame clock when the
/// crypto source is unavailable.
#[cfg(feature = "rng")]
pub fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            log::warn!("getrandom failed ({e}); seeding from clock");
            clock_seed()
        }
    }
}

#[cfg(not(feature = "rng"))]
pub fn entropy_seed() -> u64 {
    clock_seed()
}

fn clock_seed() -> u64 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    // sub-millisecond bits carry most of the variation
    (now * 1000.0) as u64
}
