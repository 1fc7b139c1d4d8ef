//! Deterministic random number generation
//!
//! Uses the mulberry32 algorithm for fast, deterministic random number
//! generation. CRITICAL: All randomness in the grid generator MUST go
//! through this module.

mod mulberry;

pub use mulberry::SeededRng;
