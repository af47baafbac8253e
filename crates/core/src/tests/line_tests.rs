// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the line editor: draft-only gating, identifier stability,
//! and patch semantics.

use crate::{CoreError, Timecard, add_line, patch_line, replace_line};
use timecard_domain::{
    DayOfWeek, DomainError, LineDocument, LineId, LinePatch, TimecardLine, TimecardStatus,
};

use super::helpers::{
    StubDirectory, draft_card, draft_card_with_line, even_later_time, later_time,
    sample_document, submitted_card, test_time,
};

#[test]
fn test_add_line_assigns_fresh_id_and_recorded() {
    let mut card = draft_card();

    let line: TimecardLine =
        add_line(&mut card, sample_document(), test_time()).expect("add line");

    assert_eq!(card.lines().len(), 1);
    assert_eq!(line.recorded, test_time());
    assert_eq!(line.to_document(), sample_document());
    assert_eq!(card.lines()[0], line);
}

#[test]
fn test_added_lines_keep_insertion_order() {
    let mut card = draft_card();

    let first = add_line(&mut card, sample_document(), test_time()).expect("first");
    let mut second_document: LineDocument = sample_document();
    second_document.day = DayOfWeek::Tuesday;
    let second = add_line(&mut card, second_document, later_time()).expect("second");

    assert_ne!(first.id, second.id);
    assert_eq!(card.lines()[0].id, first.id);
    assert_eq!(card.lines()[1].id, second.id);
}

#[test]
fn test_add_line_rejects_invalid_document() {
    let mut card = draft_card();
    let mut document: LineDocument = sample_document();
    document.hours = -1.0;

    let result = add_line(&mut card, document, test_time());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidHours(_)))
    ));
    assert!(card.lines().is_empty());
}

#[test]
fn test_add_line_rejected_outside_draft() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = submitted_card(&directory);

    let result = add_line(&mut card, sample_document(), even_later_time());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidState {
            status: TimecardStatus::Submitted,
            ..
        }))
    ));
    assert_eq!(card.lines().len(), 1);
}

#[test]
fn test_replace_line_keeps_id_and_refreshes_recorded() {
    let mut card = draft_card_with_line();
    let line_id: LineId = card.lines()[0].id;

    let mut replacement: LineDocument = sample_document();
    replacement.hours = 4.0;
    replacement.project = String::from("B");

    let replaced: TimecardLine =
        replace_line(&mut card, line_id, replacement.clone(), later_time())
            .expect("replace line");

    assert_eq!(replaced.id, line_id);
    assert_eq!(replaced.recorded, later_time());
    assert_eq!(replaced.to_document(), replacement);
    assert_eq!(card.lines().len(), 1);
    assert_eq!(card.lines()[0], replaced);
}

#[test]
fn test_replace_with_same_document_refreshes_timestamp_only() {
    let mut card = draft_card_with_line();
    let line_id: LineId = card.lines()[0].id;

    let replaced =
        replace_line(&mut card, line_id, sample_document(), later_time()).expect("replace");

    assert_eq!(replaced.to_document(), sample_document());
    assert_eq!(replaced.recorded, later_time());
}

#[test]
fn test_replace_unknown_line_fails_not_found() {
    let mut card = draft_card_with_line();
    let unknown: LineId = LineId::new();

    let result = replace_line(&mut card, unknown, sample_document(), later_time());

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::LineNotFound(
            unknown
        )))
    );
}

#[test]
fn test_replace_rejected_outside_draft() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = submitted_card(&directory);
    let line_id: LineId = card.lines()[0].id;
    let before = card.clone();

    let result = replace_line(&mut card, line_id, sample_document(), even_later_time());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidState { .. }))
    ));
    assert_eq!(card, before);
}

#[test]
fn test_patch_updates_only_named_fields() {
    let mut card = draft_card_with_line();
    let line_id: LineId = card.lines()[0].id;
    let patch: LinePatch = LinePatch {
        hours: Some(6.5),
        ..LinePatch::default()
    };

    let patched: TimecardLine =
        patch_line(&mut card, line_id, &patch, later_time()).expect("patch line");

    assert_eq!(patched.id, line_id);
    assert!((patched.hours - 6.5).abs() < f32::EPSILON);
    assert_eq!(patched.week, 1);
    assert_eq!(patched.year, 2024);
    assert_eq!(patched.day, DayOfWeek::Monday);
    assert_eq!(patched.project, "A");
    assert_eq!(patched.recorded, later_time());
}

#[test]
fn test_empty_patch_refreshes_recorded_and_nothing_else() {
    let mut card = draft_card_with_line();
    let line_id: LineId = card.lines()[0].id;

    let patched = patch_line(&mut card, line_id, &LinePatch::default(), later_time())
        .expect("empty patch");

    assert_eq!(patched.to_document(), sample_document());
    assert_eq!(patched.recorded, later_time());
}

#[test]
fn test_patch_producing_invalid_document_is_rejected_atomically() {
    let mut card = draft_card_with_line();
    let line_id: LineId = card.lines()[0].id;
    let before = card.clone();
    let patch: LinePatch = LinePatch {
        week: Some(0),
        ..LinePatch::default()
    };

    let result = patch_line(&mut card, line_id, &patch, later_time());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidWeek(0)))
    ));
    assert_eq!(card, before);
}

#[test]
fn test_patch_unknown_line_fails_not_found() {
    let mut card = draft_card_with_line();
    let unknown: LineId = LineId::new();

    let result = patch_line(&mut card, unknown, &LinePatch::default(), later_time());

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::LineNotFound(
            unknown
        )))
    );
}

#[test]
fn test_patch_rejected_outside_draft() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = submitted_card(&directory);
    let line_id: LineId = card.lines()[0].id;

    let result = patch_line(&mut card, line_id, &LinePatch::default(), even_later_time());

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidState { .. }))
    ));
}
