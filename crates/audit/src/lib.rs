// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Immutable transition records.
//!
//! Every workflow event on a timecard produces exactly one transition
//! record. Records are immutable once created and the history they form
//! is append-only: it is the source of truth for audit and for the
//! "current transition of a kind" queries.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;
use timecard_domain::{DomainError, PersonId, TimecardStatus};

/// The kind of workflow event a transition records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// The card was opened. Always the first record in a history.
    Entered,
    /// The card was handed in for review.
    Submittal,
    /// The card was returned to draft for correction.
    Correction,
    /// The card was withdrawn.
    Cancellation,
    /// The card was turned down.
    Rejection,
    /// The card was approved.
    Approval,
}

impl TransitionKind {
    /// Returns the status a card moves into as a result of this kind.
    #[must_use]
    pub const fn transitioned_to(&self) -> TimecardStatus {
        match self {
            Self::Entered | Self::Correction => TimecardStatus::Draft,
            Self::Submittal => TimecardStatus::Submitted,
            Self::Cancellation => TimecardStatus::Cancelled,
            Self::Rejection => TimecardStatus::Rejected,
            Self::Approval => TimecardStatus::Approved,
        }
    }

    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entered => "entered",
            Self::Submittal => "submittal",
            Self::Correction => "correction",
            Self::Cancellation => "cancellation",
            Self::Rejection => "rejection",
            Self::Approval => "approval",
        }
    }

    /// Parses a kind from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidKindValue` if the string is not a valid kind.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "entered" => Ok(Self::Entered),
            "submittal" => Ok(Self::Submittal),
            "correction" => Ok(Self::Correction),
            "cancellation" => Ok(Self::Cancellation),
            "rejection" => Ok(Self::Rejection),
            "approval" => Ok(Self::Approval),
            _ => Err(DomainError::InvalidKindValue(s.to_string())),
        }
    }
}

impl FromStr for TransitionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable record of a workflow event changing (or re-affirming)
/// a timecard's status.
///
/// Every transition carries at least one person identifier: the actor
/// who initiated it. Approvals additionally record who approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// What kind of event this records.
    pub kind: TransitionKind,
    /// The status the card moved into. Always equals
    /// `kind.transitioned_to()`; recorded explicitly so the history is
    /// self-describing.
    pub transitioned_to: TimecardStatus,
    /// When the event occurred (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
    /// The person who initiated the event.
    pub person: PersonId,
    /// The approver, for `Approval` transitions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver: Option<PersonId>,
}

impl Transition {
    /// Creates a transition record for any non-approval kind.
    ///
    /// The resulting status is derived from the kind; there is no way
    /// to construct a record whose `transitioned_to` disagrees with it.
    #[must_use]
    pub const fn new(kind: TransitionKind, person: PersonId, occurred_at: OffsetDateTime) -> Self {
        Self {
            kind,
            transitioned_to: kind.transitioned_to(),
            occurred_at,
            person,
            approver: None,
        }
    }

    /// Creates an approval transition record.
    #[must_use]
    pub const fn approval(
        person: PersonId,
        approver: PersonId,
        occurred_at: OffsetDateTime,
    ) -> Self {
        Self {
            kind: TransitionKind::Approval,
            transitioned_to: TimecardStatus::Approved,
            occurred_at,
            person,
            approver: Some(approver),
        }
    }
}
