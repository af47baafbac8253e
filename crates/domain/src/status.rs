// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timecard status tracking.
//!
//! This module defines the workflow statuses a timecard can hold.
//! Status is never set directly; it is derived from the most recently
//! appended transition record.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Workflow statuses a timecard moves through.
///
/// A card starts in `Draft` and moves through the workflow one
/// transition at a time. No other values are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimecardStatus {
    /// Editable: lines may be added, replaced, or patched.
    #[default]
    Draft,
    /// Handed in for review; awaiting correction, rejection, or approval.
    Submitted,
    /// Accepted by an approver other than the card's employee.
    Approved,
    /// Turned down by a reviewer.
    Rejected,
    /// Withdrawn by the employee or a reviewer.
    Cancelled,
}

impl TimecardStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusValue` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatusValue(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (no transition leaves it).
    ///
    /// `Submitted` is not terminal: a correction returns the card to
    /// `Draft`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Cancelled)
    }

    /// Returns true if line mutations are permitted in this status.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }
}

impl FromStr for TimecardStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TimecardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            TimecardStatus::Draft,
            TimecardStatus::Submitted,
            TimecardStatus::Approved,
            TimecardStatus::Rejected,
            TimecardStatus::Cancelled,
        ];

        for status in statuses {
            let s = status.as_str();
            match TimecardStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = TimecardStatus::parse_str("invalid_status");
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!TimecardStatus::Draft.is_terminal());
        assert!(!TimecardStatus::Submitted.is_terminal());
        assert!(TimecardStatus::Approved.is_terminal());
        assert!(TimecardStatus::Rejected.is_terminal());
        assert!(TimecardStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_only_draft_is_editable() {
        assert!(TimecardStatus::Draft.is_editable());
        assert!(!TimecardStatus::Submitted.is_editable());
        assert!(!TimecardStatus::Approved.is_editable());
        assert!(!TimecardStatus::Rejected.is_editable());
        assert!(!TimecardStatus::Cancelled.is_editable());
    }

    #[test]
    fn test_default_status_is_draft() {
        assert_eq!(TimecardStatus::default(), TimecardStatus::Draft);
    }
}
