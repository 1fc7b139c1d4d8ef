//! Generator - request validation and board construction
//!
//! Ties the pipeline together: validate the raw request into a roster,
//! seed a fresh RNG, run the assignment, and wrap the result in a board.
//!
//! Every request gets its own RNG instance. Nothing is retained across
//! requests, so repeated generation from equal requests yields equal
//! boards.

use serde::{Deserialize, Serialize};

use crate::assign::assign;
use crate::models::board::Board;
use crate::models::roster::{Roster, RosterError};
use crate::rng::SeededRng;

/// A complete grid-generation request
///
/// Carries exactly the four inputs that determine a grid: the names (in
/// their original order), the seed, and the optional axis labels. This is
/// also the payload the link serializer round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRequest {
    /// Participant names, order-significant
    pub names: Vec<String>,

    /// RNG seed; fully determines the layout for a given name order
    pub seed: i32,

    /// Label for the column axis (e.g. away team)
    pub col_label: Option<String>,

    /// Label for the row axis (e.g. home team)
    pub row_label: Option<String>,
}

/// Generate a board from a request
///
/// # Errors
/// Returns [`RosterError`] if the name list is empty, has more than 100
/// entries, or contains a blank entry. The downstream steps are total.
///
/// # Example
/// ```
/// use squares_grid_core_rs::{generate, GridRequest};
///
/// let request = GridRequest {
///     names: vec!["A".to_string(), "B".to_string(), "C".to_string()],
///     seed: 1,
///     col_label: None,
///     row_label: None,
/// };
///
/// let board = generate(&request).unwrap();
/// let again = generate(&request).unwrap();
/// assert_eq!(board, again);
/// ```
pub fn generate(request: &GridRequest) -> Result<Board, RosterError> {
    let roster = Roster::new(request.names.clone())?;
    let mut rng = SeededRng::new(request.seed);
    let slots = assign(&roster, &mut rng);

    Ok(Board::new(
        slots,
        request.col_label.clone(),
        request.row_label.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_names_rejected() {
        let request = GridRequest {
            names: vec![],
            seed: 1,
            col_label: None,
            row_label: None,
        };
        assert_eq!(generate(&request), Err(RosterError::Empty));
    }

    #[test]
    fn test_labels_carried_onto_board() {
        let request = GridRequest {
            names: vec!["A".to_string()],
            seed: 5,
            col_label: Some("Chiefs".to_string()),
            row_label: Some("Eagles".to_string()),
        };
        let board = generate(&request).unwrap();
        assert_eq!(board.col_label(), Some("Chiefs"));
        assert_eq!(board.row_label(), Some("Eagles"));
    }
}
