//! Keyed pseudo-randomness.
//!
//! Every value is a pure function of `(seed, channel, index)`: there is no
//! generator state shared between calls, so a particle looks the same no matter
//! which frame (or thread) asks for it.

use crate::foundation::math::Fnv1a64;

/// SplitMix64 generator.
///
/// Cheap to construct, so callers build one per key with [`Rng64::keyed`] instead
/// of threading a generator through a frame.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Generator starting from raw state `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generator for one `(seed, channel, index)` key.
    pub fn keyed(seed: u64, channel: &str, index: u64) -> Self {
        Self::new(key(seed, channel, index, 0))
    }

    /// Next 64 uniformly distributed bits.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform in `[lo, hi)`.
    pub fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }

    /// Uniform index in `0..n`; `n` must be non-zero.
    pub fn next_index(&mut self, n: usize) -> usize {
        ((self.next_f64_01() * n as f64) as usize).min(n.saturating_sub(1))
    }
}

pub(crate) fn key(seed: u64, channel: &str, index: u64, salt: u64) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(seed);
    h.write_str(channel);
    h.write_u64(index);
    h.write_u64(salt);
    h.finish()
}

/// Keyed value in `[0, 1)`; identical keys always give identical values.
pub fn random(seed: u64, channel: &str, index: u64) -> f64 {
    Rng64::keyed(seed, channel, index).next_f64_01()
}

/// Keyed value in `[lo, hi)`.
pub fn random_range(seed: u64, channel: &str, index: u64, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * random(seed, channel, index)
}

pub(crate) fn random_salted(seed: u64, channel: &str, index: u64, salt: u64) -> f64 {
    Rng64::new(key(seed, channel, index, salt)).next_f64_01()
}

#[cfg(test)]
#[path = "../../tests/unit/fx/random.rs"]
mod tests;
