// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::TimecardStatus;
use crate::types::{LineId, PersonId, TimecardId};

/// Errors that can occur during domain validation and workflow checks.
///
/// Every guard failure is one of these variants; the aggregate is left
/// unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The requested timecard does not exist.
    TimecardNotFound(TimecardId),
    /// The requested line does not exist on the timecard.
    LineNotFound(LineId),
    /// The requested transition or line mutation is illegal for the
    /// card's current status.
    InvalidState {
        /// The card's current status.
        status: TimecardStatus,
        /// The action that was attempted.
        action: &'static str,
    },
    /// A submit was attempted on a card with no lines.
    EmptyTimecard,
    /// A transition query was made for a kind not reflected in the
    /// card's current status.
    MissingTransition {
        /// The card's current status.
        status: TimecardStatus,
    },
    /// The actor lacks rights for the action.
    NoAccess {
        /// The person attempting the action.
        person: PersonId,
        /// What the person attempted.
        action: &'static str,
    },
    /// The referenced person is unknown to the directory.
    MissingPerson(PersonId),
    /// Hours must be a finite, non-negative value.
    InvalidHours(f32),
    /// Week must fall within the year.
    InvalidWeek(i32),
    /// Year must be positive.
    InvalidYear(i32),
    /// Project identifier is empty or invalid.
    InvalidProject(String),
    /// A status string did not name a valid status.
    InvalidStatusValue(String),
    /// A day string did not name a valid day of week.
    InvalidDayValue(String),
    /// A transition kind string did not name a valid kind.
    InvalidKindValue(String),
    /// An identifier string was not a valid UUID.
    InvalidIdentifier(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimecardNotFound(id) => write!(f, "Timecard {id} not found"),
            Self::LineNotFound(id) => write!(f, "Line {id} not found"),
            Self::InvalidState { status, action } => {
                write!(f, "Cannot {action} a timecard in status '{status}'")
            }
            Self::EmptyTimecard => write!(f, "Unable to submit timecard with no lines"),
            Self::MissingTransition { status } => {
                write!(
                    f,
                    "No transition of the requested kind is current for status '{status}'"
                )
            }
            Self::NoAccess { person, action } => {
                write!(f, "Person {person} has no access rights to {action}")
            }
            Self::MissingPerson(person) => {
                write!(f, "Person {person} is unknown to the directory")
            }
            Self::InvalidHours(hours) => {
                write!(f, "Invalid hours value {hours}: must be finite and non-negative")
            }
            Self::InvalidWeek(week) => {
                write!(f, "Invalid week {week}: must be between 1 and 53")
            }
            Self::InvalidYear(year) => write!(f, "Invalid year {year}: must be positive"),
            Self::InvalidProject(msg) => write!(f, "Invalid project: {msg}"),
            Self::InvalidStatusValue(s) => write!(f, "Invalid status value: '{s}'"),
            Self::InvalidDayValue(s) => write!(f, "Invalid day value: '{s}'"),
            Self::InvalidKindValue(s) => write!(f, "Invalid transition kind value: '{s}'"),
            Self::InvalidIdentifier(s) => write!(f, "Invalid identifier: '{s}'"),
        }
    }
}

impl std::error::Error for DomainError {}
