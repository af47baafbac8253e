// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timecard_audit::TransitionKind;
use timecard_domain::PersonId;

/// A command represents a requested workflow transition as data only.
///
/// Commands are the only way to request a status change on a timecard.
/// Each variant carries the initiating person; `Approve` additionally
/// carries the approver whose identity is checked against the card's
/// employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hand a draft card in for review.
    Submit {
        /// The person submitting.
        person: PersonId,
    },
    /// Return a submitted card to draft.
    Correct {
        /// The person requesting correction.
        person: PersonId,
    },
    /// Turn down a submitted card.
    Reject {
        /// The person rejecting.
        person: PersonId,
    },
    /// Approve a submitted card.
    Approve {
        /// The person recording the approval.
        person: PersonId,
        /// Who approved. Must differ from the card's employee.
        approver: PersonId,
    },
    /// Withdraw a draft or submitted card.
    Cancel {
        /// The person cancelling.
        person: PersonId,
    },
}

impl Command {
    /// Returns the person initiating this command.
    #[must_use]
    pub const fn person(&self) -> PersonId {
        match self {
            Self::Submit { person }
            | Self::Correct { person }
            | Self::Reject { person }
            | Self::Approve { person, .. }
            | Self::Cancel { person } => *person,
        }
    }

    /// Returns the transition kind this command records on success.
    #[must_use]
    pub const fn kind(&self) -> TransitionKind {
        match self {
            Self::Submit { .. } => TransitionKind::Submittal,
            Self::Correct { .. } => TransitionKind::Correction,
            Self::Reject { .. } => TransitionKind::Rejection,
            Self::Approve { .. } => TransitionKind::Approval,
            Self::Cancel { .. } => TransitionKind::Cancellation,
        }
    }

    /// Returns the action name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submit { .. } => "submit",
            Self::Correct { .. } => "correct",
            Self::Reject { .. } => "reject",
            Self::Approve { .. } => "approve",
            Self::Cancel { .. } => "cancel",
        }
    }
}
