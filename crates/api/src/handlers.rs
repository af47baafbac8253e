// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions gluing store-loaded aggregates to the engine.
//!
//! Every handler follows the same shape: load the aggregate, run the
//! pure core operation, persist the outcome, translate errors. The
//! store's own person table serves as the engine's directory.

use time::OffsetDateTime;
use timecard_audit::{Transition, TransitionKind};
use timecard_core::{
    Command, Timecard, add_line, apply, check_deletion, current_transition, patch_line,
    replace_line,
};
use timecard_domain::{
    DomainError, LineDocument, LineId, LinePatch, PersonId, TimecardId, TimecardLine,
};
use timecard_persistence::SqliteStore;
use tracing::{debug, info};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ActorDocument, ApprovalDocument, DeletionRequest, OpenTimecardRequest, PersonInfo,
    RegisterPersonRequest, TimecardInfo,
};

/// Loads a timecard or reports it missing.
fn load_card(store: &SqliteStore, id: TimecardId) -> Result<Timecard, ApiError> {
    store
        .find_timecard(id)?
        .ok_or_else(|| translate_domain_error(DomainError::TimecardNotFound(id)))
}

/// Ensures a person is registered with the directory.
fn ensure_person(store: &SqliteStore, person: PersonId) -> Result<(), ApiError> {
    if store.person_exists(person)? {
        Ok(())
    } else {
        Err(translate_domain_error(DomainError::MissingPerson(person)))
    }
}

/// Lists every timecard, oldest opened first.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_timecards(store: &SqliteStore) -> Result<Vec<TimecardInfo>, ApiError> {
    let cards: Vec<Timecard> = store.list_timecards()?;
    Ok(cards.iter().map(TimecardInfo::from_card).collect())
}

/// Opens a new timecard for a registered person.
///
/// # Errors
///
/// Returns `MissingPerson` if the person is not registered, or an
/// error if persistence fails.
pub fn open_timecard(
    store: &SqliteStore,
    request: &OpenTimecardRequest,
    now: OffsetDateTime,
) -> Result<TimecardInfo, ApiError> {
    debug!(person = %request.person, "Opening timecard");
    ensure_person(store, request.person)?;

    let card: Timecard = Timecard::open(request.person, now);
    store.insert_timecard(&card)?;
    info!(id = %card.id(), person = %request.person, "Opened timecard");

    Ok(TimecardInfo::from_card(&card))
}

/// Fetches a single timecard.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the card does not exist.
pub fn get_timecard(store: &SqliteStore, id: TimecardId) -> Result<TimecardInfo, ApiError> {
    let card: Timecard = load_card(store, id)?;
    Ok(TimecardInfo::from_card(&card))
}

/// Deletes a timecard, subject to the deletion rules.
///
/// # Errors
///
/// Returns `MissingPerson` if the named person is unregistered,
/// `InvalidState` if the card has workflow activity, or `NoAccess` if
/// the deleter is not the card's employee.
pub fn delete_timecard(
    store: &SqliteStore,
    id: TimecardId,
    request: &DeletionRequest,
) -> Result<(), ApiError> {
    debug!(id = %id, deleter = %request.deleter, "Deleting timecard");
    let card: Timecard = load_card(store, id)?;

    check_deletion(&card, request.person, request.deleter, store)
        .map_err(translate_core_error)?;

    store.delete_timecard(id)?;
    info!(id = %id, deleter = %request.deleter, "Deleted timecard");

    Ok(())
}

/// Lists a card's lines in work-date order.
///
/// Lines are sorted by (year, week, day), ties broken by the recorded
/// timestamp.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the card does not exist.
pub fn list_timecard_lines(
    store: &SqliteStore,
    id: TimecardId,
) -> Result<Vec<TimecardLine>, ApiError> {
    let card: Timecard = load_card(store, id)?;
    let mut lines: Vec<TimecardLine> = card.lines().to_vec();
    lines.sort_by_key(TimecardLine::work_order_key);
    Ok(lines)
}

/// Fetches a single line.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the card or line does not exist.
pub fn get_timecard_line(
    store: &SqliteStore,
    id: TimecardId,
    line_id: LineId,
) -> Result<TimecardLine, ApiError> {
    let card: Timecard = load_card(store, id)?;
    card.line(line_id)
        .cloned()
        .ok_or_else(|| translate_domain_error(DomainError::LineNotFound(line_id)))
}

/// Adds a line to a draft timecard.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the card does not exist,
/// `InvalidState` if it is not in draft, or `InvalidInput` if the
/// document fails validation.
pub fn add_timecard_line(
    store: &SqliteStore,
    id: TimecardId,
    document: LineDocument,
    now: OffsetDateTime,
) -> Result<TimecardLine, ApiError> {
    let mut card: Timecard = load_card(store, id)?;

    let line: TimecardLine =
        add_line(&mut card, document, now).map_err(translate_core_error)?;
    store.update_timecard(&card)?;
    info!(id = %id, line = %line.id, "Added line");

    Ok(line)
}

/// Replaces a line on a draft timecard.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the card or line does not exist,
/// `InvalidState` outside draft, or `InvalidInput` for a bad document.
pub fn replace_timecard_line(
    store: &SqliteStore,
    id: TimecardId,
    line_id: LineId,
    document: LineDocument,
    now: OffsetDateTime,
) -> Result<TimecardLine, ApiError> {
    let mut card: Timecard = load_card(store, id)?;

    let line: TimecardLine =
        replace_line(&mut card, line_id, document, now).map_err(translate_core_error)?;
    store.update_timecard(&card)?;
    info!(id = %id, line = %line.id, "Replaced line");

    Ok(line)
}

/// Patches a line on a draft timecard.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the card or line does not exist,
/// `InvalidState` outside draft, or `InvalidInput` if the patched
/// document fails validation.
pub fn patch_timecard_line(
    store: &SqliteStore,
    id: TimecardId,
    line_id: LineId,
    patch: &LinePatch,
    now: OffsetDateTime,
) -> Result<TimecardLine, ApiError> {
    let mut card: Timecard = load_card(store, id)?;

    let line: TimecardLine =
        patch_line(&mut card, line_id, patch, now).map_err(translate_core_error)?;
    store.update_timecard(&card)?;
    info!(id = %id, line = %line.id, "Patched line");

    Ok(line)
}

/// Returns a card's full transition history, oldest first.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the card does not exist.
pub fn list_timecard_transitions(
    store: &SqliteStore,
    id: TimecardId,
) -> Result<Vec<Transition>, ApiError> {
    let card: Timecard = load_card(store, id)?;
    Ok(card.transitions().to_vec())
}

/// Applies a workflow command, persists the outcome, and returns the
/// recorded transition.
fn transition_timecard(
    store: &SqliteStore,
    id: TimecardId,
    command: Command,
    now: OffsetDateTime,
) -> Result<Transition, ApiError> {
    debug!(id = %id, person = %command.person(), action = command.name(), "Applying transition");
    let card: Timecard = load_card(store, id)?;

    let result = apply(&card, command, store, now).map_err(translate_core_error)?;
    store.update_timecard(&result.new_card)?;
    info!(
        id = %id,
        person = %command.person(),
        kind = %result.transition.kind,
        status = %result.new_card.status(),
        "Applied transition"
    );

    Ok(result.transition)
}

/// Submits a draft timecard for review and returns the submittal
/// record.
///
/// # Errors
///
/// Returns a workflow error if the card is not a non-empty draft or
/// the person is unregistered.
pub fn submit_timecard(
    store: &SqliteStore,
    id: TimecardId,
    document: &ActorDocument,
    now: OffsetDateTime,
) -> Result<Transition, ApiError> {
    transition_timecard(
        store,
        id,
        Command::Submit {
            person: document.person,
        },
        now,
    )
}

/// Returns a submitted timecard to draft for correction and returns
/// the correction record.
///
/// # Errors
///
/// Returns a workflow error if the card is not submitted or the person
/// is unregistered.
pub fn correct_timecard(
    store: &SqliteStore,
    id: TimecardId,
    document: &ActorDocument,
    now: OffsetDateTime,
) -> Result<Transition, ApiError> {
    transition_timecard(
        store,
        id,
        Command::Correct {
            person: document.person,
        },
        now,
    )
}

/// Rejects a submitted timecard and returns the rejection record.
///
/// # Errors
///
/// Returns a workflow error if the card is not submitted or the person
/// is unregistered.
pub fn reject_timecard(
    store: &SqliteStore,
    id: TimecardId,
    document: &ActorDocument,
    now: OffsetDateTime,
) -> Result<Transition, ApiError> {
    transition_timecard(
        store,
        id,
        Command::Reject {
            person: document.person,
        },
        now,
    )
}

/// Approves a submitted timecard and returns the approval record.
///
/// # Errors
///
/// Returns a workflow error if the card is not submitted, the approver
/// is the card's employee, or the person is unregistered.
pub fn approve_timecard(
    store: &SqliteStore,
    id: TimecardId,
    document: &ApprovalDocument,
    now: OffsetDateTime,
) -> Result<Transition, ApiError> {
    transition_timecard(
        store,
        id,
        Command::Approve {
            person: document.person,
            approver: document.approver,
        },
        now,
    )
}

/// Cancels a draft or submitted timecard and returns the cancellation
/// record.
///
/// # Errors
///
/// Returns a workflow error if the card is already terminal or the
/// person is unregistered.
pub fn cancel_timecard(
    store: &SqliteStore,
    id: TimecardId,
    document: &ActorDocument,
    now: OffsetDateTime,
) -> Result<Transition, ApiError> {
    transition_timecard(
        store,
        id,
        Command::Cancel {
            person: document.person,
        },
        now,
    )
}

/// Returns the transition of the given kind that put the card in its
/// current status.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the card does not exist, or
/// `MissingTransition` if the card's status does not match the kind.
pub fn current_transition_of(
    store: &SqliteStore,
    id: TimecardId,
    kind: TransitionKind,
) -> Result<Transition, ApiError> {
    let card: Timecard = load_card(store, id)?;
    current_transition(&card, kind.transitioned_to())
        .map(Clone::clone)
        .map_err(translate_core_error)
}

/// Registers a person with the directory. Idempotent.
///
/// # Errors
///
/// Returns an error if the store insert fails.
pub fn register_person(
    store: &SqliteStore,
    request: &RegisterPersonRequest,
) -> Result<PersonInfo, ApiError> {
    store.add_person(request.person)?;
    info!(person = %request.person, "Registered person");

    Ok(PersonInfo {
        person: request.person,
    })
}

/// Lists every registered person, in identifier order.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn list_people(store: &SqliteStore) -> Result<Vec<PersonInfo>, ApiError> {
    let people: Vec<PersonId> = store.list_people()?;
    Ok(people
        .into_iter()
        .map(|person| PersonInfo { person })
        .collect())
}
