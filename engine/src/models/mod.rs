//! Domain models
//!
//! - **roster**: Validated, order-preserving name list (1-100 entries)
//! - **board**: The generated 10x10 grid of name slots

pub mod board;
pub mod roster;

pub use board::{Board, COLS, ROWS, SLOT_COUNT};
pub use roster::{Roster, RosterError};
