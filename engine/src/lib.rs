//! Squares Grid Core - Rust Engine
//!
//! Deterministic "Super Bowl squares" grid generator with reproducible
//! execution: the same seed and name list always produce the same 10x10
//! layout.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation
//! - **models**: Domain types (Roster, Board)
//! - **assign**: Shuffle + cyclic fill (the core algorithm)
//! - **generator**: Request validation and board construction
//! - **link**: Shareable query-string encoding/decoding
//! - **render**: Plain-text table rendering
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG, 32-bit wrapping arithmetic)
//! 2. A board always holds exactly 100 slots
//! 3. Every roster name appears floor(100/n) or ceil(100/n) times

// Module declarations
pub mod assign;
pub mod generator;
pub mod link;
pub mod models;
pub mod render;
pub mod rng;

// Re-exports for convenience
pub use assign::{assign, shuffle};
pub use generator::{generate, GridRequest};
pub use link::LinkError;
pub use models::{
    board::{Board, COLS, ROWS, SLOT_COUNT},
    roster::{Roster, RosterError},
};
pub use rng::SeededRng;
