//! Calendar event record.
//!
//! # Invariants
//! - `title` is non-blank at creation and never mutated afterwards.
//! - `date` is a calendar day; the time-of-day lives only in `time`.

use crate::model::time_slot::TimeSlot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for calendar events.
pub type EventId = Uuid;

/// One scheduled calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Serialized as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Serialized as `HH:MM`.
    pub time: TimeSlot,
}

impl Event {
    /// Creates an event with a caller-provided ID.
    ///
    /// Does not validate `title`; stores do that before insertion.
    pub fn with_id(
        id: EventId,
        title: impl Into<String>,
        date: NaiveDate,
        time: TimeSlot,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            time,
        }
    }

    /// Returns whether this event falls on the given calendar day.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
