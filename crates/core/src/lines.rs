// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The line editor.
//!
//! Translates inbound line documents into annotated `TimecardLine`
//! records. Every line mutation shares one draft-only guard and one
//! document validation, so add, replace, and patch cannot drift apart.

use crate::error::CoreError;
use crate::state::Timecard;
use time::OffsetDateTime;
use timecard_domain::{
    DomainError, LineDocument, LineId, LinePatch, TimecardLine, validate_line_document,
};

/// The single draft-only guard shared by every line mutation.
fn ensure_editable(card: &Timecard, action: &'static str) -> Result<(), CoreError> {
    if card.status().is_editable() {
        Ok(())
    } else {
        Err(CoreError::DomainViolation(DomainError::InvalidState {
            status: card.status(),
            action,
        }))
    }
}

/// Adds a line to a draft timecard.
///
/// The line gets a fresh identifier and `recorded = now`, and is
/// appended in insertion order.
///
/// # Errors
///
/// Returns an error if the card is not in draft or the document fails
/// validation.
pub fn add_line(
    card: &mut Timecard,
    document: LineDocument,
    now: OffsetDateTime,
) -> Result<TimecardLine, CoreError> {
    ensure_editable(card, "add a line to")?;
    validate_line_document(&document)?;

    let line: TimecardLine = TimecardLine::from_document(LineId::new(), document, now);
    card.push_line(line.clone());
    Ok(line)
}

/// Replaces every field of an existing line except its identifier.
///
/// The recorded timestamp is refreshed; replacing with the same
/// document twice yields an equivalent line with a newer timestamp.
///
/// # Errors
///
/// Returns an error if the card is not in draft, the line does not
/// exist, or the document fails validation.
pub fn replace_line(
    card: &mut Timecard,
    line_id: LineId,
    document: LineDocument,
    now: OffsetDateTime,
) -> Result<TimecardLine, CoreError> {
    ensure_editable(card, "replace a line on")?;

    if !card.has_line(line_id) {
        return Err(CoreError::DomainViolation(DomainError::LineNotFound(
            line_id,
        )));
    }

    validate_line_document(&document)?;

    let replacement: TimecardLine = TimecardLine::from_document(line_id, document, now);
    if let Some(line) = card.line_mut(line_id) {
        *line = replacement.clone();
    }
    Ok(replacement)
}

/// Patches an existing line on a draft timecard.
///
/// The patch is applied to a document derived from the line's current
/// state; the result is validated and stored exactly as a replace.
///
/// # Errors
///
/// Returns an error if the card is not in draft, the line does not
/// exist, or the patched document fails validation.
pub fn patch_line(
    card: &mut Timecard,
    line_id: LineId,
    patch: &LinePatch,
    now: OffsetDateTime,
) -> Result<TimecardLine, CoreError> {
    ensure_editable(card, "patch a line on")?;

    let Some(line) = card.line(line_id) else {
        return Err(CoreError::DomainViolation(DomainError::LineNotFound(
            line_id,
        )));
    };

    let patched: LineDocument = patch.apply_to(&line.to_document());
    replace_line(card, line_id, patched, now)
}
