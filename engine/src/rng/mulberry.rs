//! mulberry32 random number generator
//!
//! This is a small, fast PRNG with a single 32-bit state word, deterministic
//! and suitable for reproducible grid layouts.
//!
//! # Algorithm
//!
//! mulberry32 advances its accumulator by a fixed odd constant each step and
//! tempers the output with XOR-shift and wrapping multiplies. All arithmetic
//! is fixed-width 32-bit with wraparound, so the sequence is bit-identical
//! on every platform.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Reproducing a grid from a shared link
//! - Testing (golden sequences)

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using mulberry32
///
/// # Example
/// ```
/// use squares_grid_core_rs::SeededRng;
///
/// let mut rng = SeededRng::new(12345);
/// let value = rng.next_u32();
/// let unit = rng.next_f64(); // [0.0, 1.0)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRng {
    /// Internal accumulator (32-bit)
    state: u32,
}

impl SeededRng {
    /// Create a new RNG from a signed 32-bit seed
    ///
    /// Any seed is accepted; negative seeds map into the unsigned state
    /// space via two's-complement cast. Zero needs no special handling
    /// because the accumulator is incremented before every output.
    ///
    /// # Example
    /// ```
    /// use squares_grid_core_rs::SeededRng;
    ///
    /// let rng = SeededRng::new(-7);
    /// ```
    pub fn new(seed: i32) -> Self {
        Self { state: seed as u32 }
    }

    /// Generate the next random u32 value
    ///
    /// Advances the internal accumulator and returns a tempered output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a random f64 in range [0.0, 1.0)
    ///
    /// Divides the 32-bit output by 2^32. Exact (power of two divisor),
    /// so cross-implementation comparisons of the float sequence hold
    /// bit-for-bit.
    ///
    /// # Example
    /// ```
    /// use squares_grid_core_rs::SeededRng;
    ///
    /// let mut rng = SeededRng::new(12345);
    /// let v = rng.next_f64();
    /// assert!(v >= 0.0 && v < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Get the current accumulator value (for replay/golden tests)
    pub fn state(&self) -> u32 {
        self.state
    }
}
