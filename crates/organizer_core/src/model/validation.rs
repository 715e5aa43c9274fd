//! Validation error shared by every store.
//!
//! # Invariants
//! - A failed validation never mutates store state.
//! - Error messages never echo full user-entered text for required fields.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The single error kind raised by organizer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty or whitespace-only.
    EmptyField(&'static str),
    /// Required calendar date is unset.
    MissingDate,
    /// Time text is not an `HH:MM` value on the 30-minute grid.
    InvalidTime(String),
    /// Status text is not one of `todo|doing|done`.
    InvalidStatus(String),
    /// Date text is not an ISO `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::MissingDate => write!(f, "date must be selected"),
            Self::InvalidTime(value) => write!(
                f,
                "invalid time `{value}`; expected HH:MM on a 30-minute grid"
            ),
            Self::InvalidStatus(value) => write!(
                f,
                "invalid note status `{value}`; expected todo|doing|done"
            ),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for ValidationError {}

/// Rejects empty or whitespace-only text for the named field.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}
