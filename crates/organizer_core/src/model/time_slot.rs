//! Half-hour time slots used by calendar events.
//!
//! # Responsibility
//! - Provide the fixed 48-value `HH:MM` lookup set for event times.
//! - Parse UI-provided time text into a typed slot.
//!
//! # Invariants
//! - Hours are `0..=23`, minutes are `0` or `30`.
//! - The lookup set is built once per process and never mutated.

use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of slots in one day on the 30-minute grid.
pub const SLOTS_PER_DAY: usize = 48;

static TIME_SLOT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):(00|30)$").expect("valid time slot regex"));

static TIME_SLOTS: Lazy<Vec<TimeSlot>> = Lazy::new(|| {
    (0..SLOTS_PER_DAY)
        .map(|index| TimeSlot {
            hour: (index / 2) as u8,
            minute: ((index % 2) * 30) as u8,
        })
        .collect()
});

/// One `HH:MM` value on the 30-minute grid.
///
/// Ordering is chronological. Serialized as its `HH:MM` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Builds a slot from numeric parts.
    ///
    /// # Errors
    /// - Returns `ValidationError::InvalidTime` when the parts fall off the grid.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 || (minute != 0 && minute != 30) {
            return Err(ValidationError::InvalidTime(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parses `HH:MM` text, trimming surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        let caps = TIME_SLOT_RE
            .captures(trimmed)
            .ok_or_else(|| ValidationError::InvalidTime(trimmed.to_string()))?;
        let hour = caps[1]
            .parse::<u8>()
            .map_err(|_| ValidationError::InvalidTime(trimmed.to_string()))?;
        let minute = caps[2]
            .parse::<u8>()
            .map_err(|_| ValidationError::InvalidTime(trimmed.to_string()))?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.to_string()
    }
}

/// Returns every slot of the day in chronological order.
pub fn time_slots() -> &'static [TimeSlot] {
    TIME_SLOTS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::{time_slots, TimeSlot, SLOTS_PER_DAY};
    use crate::model::validation::ValidationError;

    #[test]
    fn lookup_set_covers_the_whole_day() {
        let slots = time_slots();
        assert_eq!(slots.len(), SLOTS_PER_DAY);
        assert_eq!(slots[0].to_string(), "00:00");
        assert_eq!(slots[1].to_string(), "00:30");
        assert_eq!(slots[SLOTS_PER_DAY - 1].to_string(), "23:30");
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn lookup_set_is_shared() {
        assert!(std::ptr::eq(time_slots(), time_slots()));
    }

    #[test]
    fn parse_accepts_grid_values_with_padding() {
        let slot = TimeSlot::parse(" 12:30 ").expect("12:30 is on the grid");
        assert_eq!(slot.hour(), 12);
        assert_eq!(slot.minute(), 30);
    }

    #[test]
    fn parse_rejects_off_grid_values() {
        for raw in ["09:15", "24:00", "9:00", "", "noon", "12:3"] {
            let err = TimeSlot::parse(raw).expect_err("off-grid value must fail");
            assert!(matches!(err, ValidationError::InvalidTime(_)), "{raw}");
        }
    }

    #[test]
    fn new_rejects_bad_parts() {
        assert!(TimeSlot::new(23, 30).is_ok());
        assert!(TimeSlot::new(24, 0).is_err());
        assert!(TimeSlot::new(8, 45).is_err());
    }
}
