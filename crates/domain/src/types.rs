// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Identifies a timecard.
///
/// Assigned once when the card is opened and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimecardId(Uuid);

impl TimecardId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimecardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TimecardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TimecardId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier(s.to_string()))
    }
}

/// Identifies a single line within a timecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier(s.to_string()))
    }
}

/// An opaque person identifier.
///
/// Persons are resolved through the person directory; the domain makes
/// no assumption beyond identity comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of week a line reports hours for.
///
/// Ordering follows the working week, Monday first. The ordering is
/// used when listing lines in work-date order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Returns the string representation of the day.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Parses a day from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDayValue` if the string is not a valid day.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidDayValue(s.to_string())),
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timecard_ids_are_unique() {
        let a: TimecardId = TimecardId::new();
        let b: TimecardId = TimecardId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_timecard_id_display_round_trip() {
        let id: TimecardId = TimecardId::new();
        let parsed: TimecardId = match id.to_string().parse() {
            Ok(parsed) => parsed,
            Err(e) => panic!("Failed to parse timecard id: {e}"),
        };
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_invalid_identifier_string() {
        let result: Result<TimecardId, DomainError> = "not-a-uuid".parse();
        assert!(result.is_err());
        let result: Result<LineId, DomainError> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_person_id_identity() {
        assert_eq!(PersonId::new(7), PersonId::new(7));
        assert_ne!(PersonId::new(7), PersonId::new(9));
        assert_eq!(PersonId::new(7).value(), 7);
    }

    #[test]
    fn test_day_string_round_trip() {
        let days = vec![
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ];

        for day in days {
            let s = day.as_str();
            match DayOfWeek::parse_str(s) {
                Ok(parsed) => assert_eq!(day, parsed),
                Err(e) => panic!("Failed to parse day string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_day_ordering_follows_working_week() {
        assert!(DayOfWeek::Monday < DayOfWeek::Tuesday);
        assert!(DayOfWeek::Friday < DayOfWeek::Saturday);
        assert!(DayOfWeek::Saturday < DayOfWeek::Sunday);
    }
}
