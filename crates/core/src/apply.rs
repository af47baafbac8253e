// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::directory::PersonDirectory;
use crate::error::CoreError;
use crate::state::{Timecard, TransitionResult};
use time::OffsetDateTime;
use timecard_audit::Transition;
use timecard_domain::{DomainError, PersonId, TimecardStatus};

/// Applies a workflow command to a timecard, producing the new card
/// and the transition record that was appended.
///
/// The engine is pure decision logic: it knows nothing about storage
/// or transport, and it never mutates its input. Guards are evaluated
/// in a fixed order that callers and tests rely on:
///
/// 1. status guard — the command must be legal from the current status
/// 2. business guard — non-empty lines for `Submit`; approver identity
///    for `Approve`
/// 3. person guard — the initiating person must exist in the directory
///
/// # Arguments
///
/// * `card` - The current timecard (immutable)
/// * `command` - The requested transition
/// * `directory` - The person directory used to resolve the actor
/// * `now` - The timestamp recorded on the appended transition
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new card and the appended record
/// * `Err(CoreError)` if any guard fails; the input card is untouched
///
/// # Errors
///
/// Returns an error if:
/// - The command is not legal from the card's current status
/// - A `Submit` is attempted with no lines
/// - An `Approve` names the card's own employee as approver
/// - The initiating person is unknown to the directory
pub fn apply(
    card: &Timecard,
    command: Command,
    directory: &dyn PersonDirectory,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    // (1) Status guard
    let status: TimecardStatus = card.status();
    let allowed: bool = match command {
        Command::Submit { .. } => status == TimecardStatus::Draft,
        Command::Correct { .. } | Command::Reject { .. } | Command::Approve { .. } => {
            status == TimecardStatus::Submitted
        }
        Command::Cancel { .. } => {
            matches!(status, TimecardStatus::Draft | TimecardStatus::Submitted)
        }
    };
    if !allowed {
        return Err(CoreError::DomainViolation(DomainError::InvalidState {
            status,
            action: command.name(),
        }));
    }

    // (2) Business guard
    match command {
        Command::Submit { .. } if card.lines().is_empty() => {
            return Err(CoreError::DomainViolation(DomainError::EmptyTimecard));
        }
        Command::Approve { approver, .. } if approver == card.employee() => {
            return Err(CoreError::DomainViolation(DomainError::NoAccess {
                person: approver,
                action: "approve their own timecard",
            }));
        }
        _ => {}
    }

    // (3) Person guard
    let person: PersonId = command.person();
    if !directory.exists(person) {
        return Err(CoreError::DomainViolation(DomainError::MissingPerson(
            person,
        )));
    }

    let transition: Transition = match command {
        Command::Approve { person, approver } => Transition::approval(person, approver, now),
        Command::Submit { person }
        | Command::Correct { person }
        | Command::Reject { person }
        | Command::Cancel { person } => Transition::new(command.kind(), person, now),
    };

    let mut new_card: Timecard = card.clone();
    new_card.append_transition(transition.clone());

    Ok(TransitionResult {
        new_card,
        transition,
    })
}

/// Checks whether a deletion request may proceed.
///
/// Deletion is not a transition: an allowed deletion removes the card
/// from the store entirely. The guard order here mirrors the observed
/// workflow and is a fixed contract: person existence, then state, then
/// deleter identity.
///
/// # Arguments
///
/// * `card` - The card the caller wants to delete
/// * `person` - The person initiating the request
/// * `deleter` - The person claiming deletion rights
/// * `directory` - The person directory used to resolve `person`
///
/// # Errors
///
/// Returns an error if:
/// - `person` is unknown to the directory
/// - The card has any activity beyond its `Entered` record
/// - `deleter` is not the card's employee
pub fn check_deletion(
    card: &Timecard,
    person: PersonId,
    deleter: PersonId,
    directory: &dyn PersonDirectory,
) -> Result<(), CoreError> {
    if !directory.exists(person) {
        return Err(CoreError::DomainViolation(DomainError::MissingPerson(
            person,
        )));
    }

    if !card.can_be_deleted() {
        return Err(CoreError::DomainViolation(DomainError::InvalidState {
            status: card.status(),
            action: "delete",
        }));
    }

    if deleter != card.employee() {
        return Err(CoreError::DomainViolation(DomainError::NoAccess {
            person: deleter,
            action: "delete another person's timecard",
        }));
    }

    Ok(())
}
