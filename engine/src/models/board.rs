//! Board model
//!
//! The generated 10x10 grid. Each of the 100 slots holds one name; the slot
//! at flat index `k` sits at `row = k / 10`, `col = k % 10`. Optional team
//! labels annotate the column and row axes for rendering and sharing.
//!
//! CRITICAL: A board always holds exactly 100 slots. This is enforced at
//! construction; only the assignment step produces slot sequences.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of rows in the grid
pub const ROWS: usize = 10;

/// Number of columns in the grid
pub const COLS: usize = 10;

/// Total number of slots (rows x cols)
pub const SLOT_COUNT: usize = 100;

/// A fully populated 10x10 squares grid
///
/// # Example
/// ```
/// use squares_grid_core_rs::{generate, GridRequest};
///
/// let request = GridRequest {
///     names: vec!["A".to_string(), "B".to_string()],
///     seed: 1,
///     col_label: Some("Chiefs".to_string()),
///     row_label: None,
/// };
/// let board = generate(&request).unwrap();
/// assert_eq!(board.slots().len(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Slot contents in row-major order (always exactly 100 entries)
    slots: Vec<String>,

    /// Label for the column axis (e.g. the away team)
    col_label: Option<String>,

    /// Label for the row axis (e.g. the home team)
    row_label: Option<String>,
}

impl Board {
    /// Wrap an assigned slot sequence into a board
    ///
    /// # Panics
    /// Panics unless `slots.len() == 100`. Slot sequences come only from
    /// the assignment step, which always produces exactly 100 entries.
    pub fn new(slots: Vec<String>, col_label: Option<String>, row_label: Option<String>) -> Self {
        assert_eq!(
            slots.len(),
            SLOT_COUNT,
            "board requires exactly {} slots",
            SLOT_COUNT
        );
        Self {
            slots,
            col_label,
            row_label,
        }
    }

    /// The name at position `(row, col)`
    ///
    /// # Panics
    /// Panics if `row >= 10` or `col >= 10`.
    pub fn slot(&self, row: usize, col: usize) -> &str {
        assert!(row < ROWS && col < COLS, "slot index out of bounds");
        &self.slots[row * COLS + col]
    }

    /// All slots as a flat slice in row-major order
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Convert a flat slot index to its `(row, col)` position
    pub fn position(index: usize) -> (usize, usize) {
        (index / COLS, index % COLS)
    }

    /// Label for the column axis, if set
    pub fn col_label(&self) -> Option<&str> {
        self.col_label.as_deref()
    }

    /// Label for the row axis, if set
    pub fn row_label(&self) -> Option<&str> {
        self.row_label.as_deref()
    }

    /// SHA-256 fingerprint of the slot layout
    ///
    /// Hashes each slot name followed by a newline, in row-major order.
    /// Two boards have the same fingerprint iff every slot matches, which
    /// gives tests and share flows a compact equality check. Labels are
    /// not part of the fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for name in &self.slots {
            hasher.update(name.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots_of(names: &[&str]) -> Vec<String> {
        (0..SLOT_COUNT)
            .map(|k| names[k % names.len()].to_string())
            .collect()
    }

    #[test]
    #[should_panic(expected = "board requires exactly 100 slots")]
    fn test_wrong_slot_count_panics() {
        Board::new(vec!["A".to_string(); 99], None, None);
    }

    #[test]
    fn test_slot_addressing_row_major() {
        let board = Board::new(slots_of(&["A", "B", "C"]), None, None);
        // Flat index 13 is row 1, col 3
        assert_eq!(Board::position(13), (1, 3));
        assert_eq!(board.slot(1, 3), board.slots()[13]);
    }

    #[test]
    fn test_fingerprint_matches_layout() {
        let a = Board::new(slots_of(&["A", "B"]), None, None);
        let b = Board::new(slots_of(&["A", "B"]), Some("X".to_string()), None);
        let c = Board::new(slots_of(&["B", "A"]), None, None);

        assert_eq!(a.fingerprint(), b.fingerprint(), "labels must not affect fingerprint");
        assert_ne!(a.fingerprint(), c.fingerprint(), "layout change must change fingerprint");
    }
}
