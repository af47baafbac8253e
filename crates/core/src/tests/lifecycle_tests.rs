// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Full workflow scenarios exercising the aggregate, engine, line
//! editor, and query together.

use crate::{Command, Timecard, add_line, apply, current_transition};
use timecard_audit::TransitionKind;
use timecard_domain::{DayOfWeek, LineDocument, TimecardStatus};

use super::helpers::{
    EMPLOYEE, REVIEWER, StubDirectory, draft_card, even_later_time, later_time, sample_document,
    test_time,
};

#[test]
fn test_open_starts_in_draft_with_entered_record() {
    let card: Timecard = Timecard::open(EMPLOYEE, test_time());

    assert_eq!(card.status(), TimecardStatus::Draft);
    assert_eq!(card.employee(), EMPLOYEE);
    assert_eq!(card.opened(), test_time());
    assert!(card.lines().is_empty());
    assert_eq!(card.transitions().len(), 1);
    assert_eq!(card.transitions()[0].kind, TransitionKind::Entered);
    assert_eq!(card.transitions()[0].person, EMPLOYEE);
    assert!(card.can_be_deleted());
}

#[test]
fn test_happy_path_open_fill_submit_approve() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = Timecard::open(EMPLOYEE, test_time());

    add_line(&mut card, sample_document(), test_time()).expect("add monday line");
    let mut tuesday: LineDocument = sample_document();
    tuesday.day = DayOfWeek::Tuesday;
    tuesday.hours = 7.5;
    add_line(&mut card, tuesday, test_time()).expect("add tuesday line");

    let card = apply(
        &card,
        Command::Submit { person: EMPLOYEE },
        &directory,
        later_time(),
    )
    .expect("submit")
    .new_card;
    assert_eq!(card.status(), TimecardStatus::Submitted);

    let card = apply(
        &card,
        Command::Approve {
            person: REVIEWER,
            approver: REVIEWER,
        },
        &directory,
        even_later_time(),
    )
    .expect("approve")
    .new_card;

    assert_eq!(card.status(), TimecardStatus::Approved);
    assert_eq!(card.lines().len(), 2);

    let kinds: Vec<TransitionKind> = card.transitions().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TransitionKind::Entered,
            TransitionKind::Submittal,
            TransitionKind::Approval,
        ]
    );

    let approval = current_transition(&card, TimecardStatus::Approved).expect("approval record");
    assert_eq!(approval.approver, Some(REVIEWER));
}

#[test]
fn test_reject_then_correct_then_resubmit() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = draft_card();
    add_line(&mut card, sample_document(), test_time()).expect("add line");

    let card = apply(
        &card,
        Command::Submit { person: EMPLOYEE },
        &directory,
        later_time(),
    )
    .expect("submit")
    .new_card;
    let card = apply(
        &card,
        Command::Reject { person: REVIEWER },
        &directory,
        even_later_time(),
    )
    .expect("reject")
    .new_card;

    assert_eq!(card.status(), TimecardStatus::Rejected);
    // Rejected is terminal: no correction or resubmission from here.
    assert!(
        apply(
            &card,
            Command::Correct { person: REVIEWER },
            &directory,
            even_later_time(),
        )
        .is_err()
    );
    assert!(
        apply(
            &card,
            Command::Submit { person: EMPLOYEE },
            &directory,
            even_later_time(),
        )
        .is_err()
    );
}

#[test]
fn test_correct_reopens_editing_then_resubmit_succeeds() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = draft_card();
    add_line(&mut card, sample_document(), test_time()).expect("add line");

    let card = apply(
        &card,
        Command::Submit { person: EMPLOYEE },
        &directory,
        later_time(),
    )
    .expect("submit")
    .new_card;
    let mut card = apply(
        &card,
        Command::Correct { person: REVIEWER },
        &directory,
        even_later_time(),
    )
    .expect("correct")
    .new_card;

    // Back in draft: lines are editable again.
    let mut extra: LineDocument = sample_document();
    extra.day = DayOfWeek::Wednesday;
    add_line(&mut card, extra, even_later_time()).expect("add line after correction");
    assert_eq!(card.lines().len(), 2);

    let card = apply(
        &card,
        Command::Submit { person: EMPLOYEE },
        &directory,
        even_later_time(),
    )
    .expect("resubmit")
    .new_card;
    assert_eq!(card.status(), TimecardStatus::Submitted);
}

#[test]
fn test_status_always_matches_last_transition() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = draft_card();
    add_line(&mut card, sample_document(), test_time()).expect("add line");

    let steps: Vec<Command> = vec![
        Command::Submit { person: EMPLOYEE },
        Command::Correct { person: REVIEWER },
        Command::Submit { person: EMPLOYEE },
        Command::Approve {
            person: REVIEWER,
            approver: REVIEWER,
        },
    ];

    for command in steps {
        card = apply(&card, command, &directory, later_time())
            .expect("workflow step")
            .new_card;
        let last = card.transitions().last().expect("non-empty history");
        assert_eq!(card.status(), last.transitioned_to);
    }
}

#[test]
fn test_history_is_append_only_across_workflow() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = draft_card();
    add_line(&mut card, sample_document(), test_time()).expect("add line");

    let submitted = apply(
        &card,
        Command::Submit { person: EMPLOYEE },
        &directory,
        later_time(),
    )
    .expect("submit")
    .new_card;

    // The prior history is a strict prefix of the new one.
    assert_eq!(
        submitted.transitions()[..card.transitions().len()],
        card.transitions()[..]
    );
    assert_eq!(submitted.transitions().len(), card.transitions().len() + 1);
}

#[test]
fn test_terminal_states_accept_no_further_commands() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = draft_card();
    add_line(&mut card, sample_document(), test_time()).expect("add line");

    let cancelled = apply(
        &card,
        Command::Cancel { person: EMPLOYEE },
        &directory,
        later_time(),
    )
    .expect("cancel")
    .new_card;
    assert!(cancelled.status().is_terminal());

    for command in [
        Command::Submit { person: EMPLOYEE },
        Command::Correct { person: REVIEWER },
        Command::Reject { person: REVIEWER },
        Command::Approve {
            person: REVIEWER,
            approver: REVIEWER,
        },
        Command::Cancel { person: EMPLOYEE },
    ] {
        assert!(
            apply(&cancelled, command, &directory, even_later_time()).is_err(),
            "{command:?} accepted on a cancelled card"
        );
    }
}

#[test]
fn test_second_approval_is_rejected() {
    let directory = StubDirectory::everyone();
    let mut card: Timecard = draft_card();
    add_line(&mut card, sample_document(), test_time()).expect("add line");

    let card = apply(
        &card,
        Command::Submit { person: EMPLOYEE },
        &directory,
        later_time(),
    )
    .expect("submit")
    .new_card;
    let card = apply(
        &card,
        Command::Approve {
            person: REVIEWER,
            approver: REVIEWER,
        },
        &directory,
        even_later_time(),
    )
    .expect("first approval")
    .new_card;

    let result = apply(
        &card,
        Command::Approve {
            person: REVIEWER,
            approver: REVIEWER,
        },
        &directory,
        even_later_time(),
    );

    assert!(result.is_err());
    assert_eq!(card.transitions().len(), 3);
}
