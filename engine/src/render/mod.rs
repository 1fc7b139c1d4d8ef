//! Plain-text board rendering
//!
//! Presentation glue: lays the 100 slots out as an ASCII table with digit
//! headers 0-9 on both axes. Column digits belong to the column team and
//! row digits to the row team, matching the usual squares-pool convention.
//! No logic here affects the layout itself.

use crate::models::board::{Board, COLS, ROWS};

/// Render a board as an ASCII table
///
/// # Example
/// ```
/// use squares_grid_core_rs::{generate, render, GridRequest};
///
/// let request = GridRequest {
///     names: vec!["A".to_string(), "B".to_string()],
///     seed: 1,
///     col_label: None,
///     row_label: None,
/// };
/// let board = generate(&request).unwrap();
/// let text = render::render_text(&board);
/// assert!(text.lines().count() > 10);
/// ```
pub fn render_text(board: &Board) -> String {
    let width = board
        .slots()
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut out = String::new();

    if let Some(col) = board.col_label() {
        out.push_str(&format!("Columns: {}\n", col));
    }
    if let Some(row) = board.row_label() {
        out.push_str(&format!("Rows:    {}\n", row));
    }

    // Column digit header
    out.push_str("    ");
    for col in 0..COLS {
        out.push_str(&format!(" {:^width$} ", col, width = width));
        out.push(' ');
    }
    out.push('\n');

    let separator = {
        let mut line = String::from("   +");
        for _ in 0..COLS {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line.push('\n');
        line
    };

    out.push_str(&separator);
    for row in 0..ROWS {
        out.push_str(&format!(" {} |", row));
        for col in 0..COLS {
            out.push_str(&format!(" {:^width$} ", board.slot(row, col), width = width));
            out.push('|');
        }
        out.push('\n');
        out.push_str(&separator);
    }

    out
}
