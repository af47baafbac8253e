// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response documents for the API boundary.
//!
//! Inbound documents name the acting person explicitly; there is no
//! ambient authentication context to take an identity from.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use timecard_audit::Transition;
use timecard_core::Timecard;
use timecard_domain::{PersonId, TimecardId, TimecardLine, TimecardStatus};

/// Request to open a new timecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTimecardRequest {
    /// The employee the card is opened for.
    pub person: PersonId,
}

/// Request to delete a timecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionRequest {
    /// The person named by the request.
    pub person: PersonId,
    /// The person performing the deletion. Must be the card's employee.
    pub deleter: PersonId,
}

/// Body for submittal, correction, rejection, and cancellation
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorDocument {
    /// The person initiating the transition.
    pub person: PersonId,
}

/// Body for the approval transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalDocument {
    /// The person recording the approval.
    pub person: PersonId,
    /// Who approved. Must differ from the card's employee.
    pub approver: PersonId,
}

/// Request to register a person with the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPersonRequest {
    /// The person identifier to register.
    pub person: PersonId,
}

/// A timecard as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardInfo {
    /// The card's identifier.
    pub id: TimecardId,
    /// The owning employee.
    pub employee: PersonId,
    /// When the card was opened (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub opened: OffsetDateTime,
    /// The current status.
    pub status: TimecardStatus,
    /// Line items in insertion order.
    pub lines: Vec<TimecardLine>,
    /// The transition history, oldest first.
    pub transitions: Vec<Transition>,
}

impl TimecardInfo {
    /// Builds the response document for a timecard.
    #[must_use]
    pub fn from_card(card: &Timecard) -> Self {
        Self {
            id: card.id(),
            employee: card.employee(),
            opened: card.opened(),
            status: card.status(),
            lines: card.lines().to_vec(),
            transitions: card.transitions().to_vec(),
        }
    }
}

/// A registered person as returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    /// The person identifier.
    pub person: PersonId,
}

/// A link to a related resource in the service description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    /// The HTTP method the link is used with.
    pub method: String,
    /// The path of the linked resource.
    pub reference: String,
}

impl ResourceLink {
    fn new(method: &str, reference: &str) -> Self {
        Self {
            method: String::from(method),
            reference: String::from(reference),
        }
    }
}

/// The discovery document served at the service root.
///
/// Lists the entry points into the timesheet and people collections
/// along with the service version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescription {
    /// Links into the timesheets collection.
    pub timesheets: Vec<ResourceLink>,
    /// Links into the people collection.
    pub people: Vec<ResourceLink>,
    /// The service version.
    pub version: String,
}

impl ServiceDescription {
    /// Builds the description of this service build.
    #[must_use]
    pub fn current() -> Self {
        Self {
            timesheets: vec![
                ResourceLink::new("GET", "/timesheets"),
                ResourceLink::new("POST", "/timesheets"),
            ],
            people: vec![
                ResourceLink::new("GET", "/people"),
                ResourceLink::new("POST", "/people"),
            ],
            version: String::from(env!("CARGO_PKG_VERSION")),
        }
    }
}
