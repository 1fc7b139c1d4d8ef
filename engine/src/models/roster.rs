//! Roster model
//!
//! An ordered list of participant names, validated for grid generation:
//! - Every name is non-empty after trimming
//! - Length is between 1 and 100
//! - Duplicates are allowed (a name may buy multiple squares)
//!
//! CRITICAL: Name order is preserved exactly as supplied. The shuffle is a
//! function of both the seed and the input order, so reordering the roster
//! changes the resulting grid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::board::SLOT_COUNT;

/// Errors that can occur during roster validation
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("Roster is empty: at least one name is required")]
    Empty,

    #[error("Roster has {count} names, maximum is 100")]
    TooMany { count: usize },

    #[error("Roster entry {index} is blank")]
    Blank { index: usize },
}

/// A validated list of participant names
///
/// # Example
/// ```
/// use squares_grid_core_rs::Roster;
///
/// let roster = Roster::parse("Alice, Bob\nCarol").unwrap();
/// assert_eq!(roster.names(), &["Alice", "Bob", "Carol"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Validate a list of names into a roster
    ///
    /// Each entry is trimmed. Blank entries are rejected rather than
    /// dropped, so callers that build the list programmatically hear
    /// about mistakes.
    ///
    /// # Errors
    /// - [`RosterError::Empty`] if the list has no entries
    /// - [`RosterError::TooMany`] if the list has more than 100 entries
    /// - [`RosterError::Blank`] if any entry trims to the empty string
    pub fn new(names: Vec<String>) -> Result<Self, RosterError> {
        if names.is_empty() {
            return Err(RosterError::Empty);
        }
        if names.len() > SLOT_COUNT {
            return Err(RosterError::TooMany { count: names.len() });
        }

        let mut trimmed = Vec::with_capacity(names.len());
        for (index, name) in names.into_iter().enumerate() {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(RosterError::Blank { index });
            }
            trimmed.push(name);
        }

        Ok(Self { names: trimmed })
    }

    /// Parse raw text into a roster
    ///
    /// Splits on newlines and commas, trims each fragment, and drops empty
    /// fragments (trailing newlines, double commas). The surviving names
    /// are validated as in [`Roster::new`].
    ///
    /// # Example
    /// ```
    /// use squares_grid_core_rs::Roster;
    ///
    /// let roster = Roster::parse("Alice\nBob\n\nCarol,Dave,").unwrap();
    /// assert_eq!(roster.len(), 4);
    /// ```
    pub fn parse(raw: &str) -> Result<Self, RosterError> {
        let names: Vec<String> = raw
            .split(['\n', ','])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self::new(names)
    }

    /// The validated names, in original order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names in the roster
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the roster is empty (never true for a validated roster)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(Roster::new(vec![]), Err(RosterError::Empty));
    }

    #[test]
    fn test_blank_entry_rejected() {
        let result = Roster::new(vec!["Alice".to_string(), "   ".to_string()]);
        assert_eq!(result, Err(RosterError::Blank { index: 1 }));
    }

    #[test]
    fn test_over_one_hundred_rejected() {
        let names: Vec<String> = (0..101).map(|i| format!("N{}", i)).collect();
        assert_eq!(Roster::new(names), Err(RosterError::TooMany { count: 101 }));
    }

    #[test]
    fn test_exactly_one_hundred_accepted() {
        let names: Vec<String> = (0..100).map(|i| format!("N{}", i)).collect();
        let roster = Roster::new(names).unwrap();
        assert_eq!(roster.len(), 100);
    }

    #[test]
    fn test_parse_drops_empty_fragments() {
        let roster = Roster::parse("Alice,\n,Bob\n\n").unwrap();
        assert_eq!(roster.names(), &["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_all_blank_is_empty() {
        assert_eq!(Roster::parse(" \n , \n"), Err(RosterError::Empty));
    }

    #[test]
    fn test_order_preserved() {
        let roster = Roster::parse("Zoe,Amy,Mia").unwrap();
        assert_eq!(roster.names(), &["Zoe", "Amy", "Mia"]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let roster = Roster::parse("Bob,Bob,Bob").unwrap();
        assert_eq!(roster.len(), 3);
    }
}
