// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use timecard_audit::{Transition, TransitionKind};
use timecard_domain::{LineId, PersonId, TimecardId, TimecardLine, TimecardStatus};

/// The timecard aggregate: status, owner, line items, and the
/// append-only transition history.
///
/// The cached `status` is a pure projection of the history: it always
/// equals the `transitioned_to` of the most recently appended
/// transition, and it is recomputed atomically with every append.
/// There is no way to set it independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timecard {
    /// Unique identifier, assigned at creation.
    id: TimecardId,
    /// The person who owns this card. Immutable.
    employee: PersonId,
    /// When the card was opened (UTC). Immutable.
    #[serde(with = "time::serde::rfc3339")]
    opened: OffsetDateTime,
    /// Cached projection of the most recent transition.
    status: TimecardStatus,
    /// Line items in insertion order. Mutable only while in draft.
    lines: Vec<TimecardLine>,
    /// Append-only transition history. The first entry is always the
    /// `Entered` record created when the card was opened.
    transitions: Vec<Transition>,
}

impl Timecard {
    /// Opens a new timecard for an employee.
    ///
    /// The history starts with an `Entered` transition attributed to
    /// the employee, putting the card in `Draft`.
    #[must_use]
    pub fn open(employee: PersonId, now: OffsetDateTime) -> Self {
        let entered: Transition = Transition::new(TransitionKind::Entered, employee, now);
        Self {
            id: TimecardId::new(),
            employee,
            opened: now,
            status: entered.transitioned_to,
            lines: Vec::new(),
            transitions: vec![entered],
        }
    }

    /// Returns the card's identifier.
    #[must_use]
    pub const fn id(&self) -> TimecardId {
        self.id
    }

    /// Returns the owning employee.
    #[must_use]
    pub const fn employee(&self) -> PersonId {
        self.employee
    }

    /// Returns when the card was opened.
    #[must_use]
    pub const fn opened(&self) -> OffsetDateTime {
        self.opened
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TimecardStatus {
        self.status
    }

    /// Returns the line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[TimecardLine] {
        &self.lines
    }

    /// Returns the transition history, oldest first.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Checks whether a line with the given identifier exists.
    #[must_use]
    pub fn has_line(&self, line_id: LineId) -> bool {
        self.lines.iter().any(|l| l.id == line_id)
    }

    /// Returns the line with the given identifier, if present.
    #[must_use]
    pub fn line(&self, line_id: LineId) -> Option<&TimecardLine> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    /// Returns true if the card may still be deleted.
    ///
    /// Only a freshly opened card qualifies: a single `Entered`
    /// transition and draft status, i.e. nothing has happened beyond
    /// opening it.
    #[must_use]
    pub fn can_be_deleted(&self) -> bool {
        self.transitions.len() == 1 && self.status == TimecardStatus::Draft
    }

    /// Appends a transition and recomputes the cached status.
    ///
    /// The status update happens with the append; callers never observe
    /// a history that disagrees with the cached status.
    pub(crate) fn append_transition(&mut self, transition: Transition) {
        self.status = transition.transitioned_to;
        self.transitions.push(transition);
    }

    /// Adds a line at the end of the collection.
    pub(crate) fn push_line(&mut self, line: TimecardLine) {
        self.lines.push(line);
    }

    /// Returns a mutable reference to the line with the given identifier.
    pub(crate) fn line_mut(&mut self, line_id: LineId) -> Option<&mut TimecardLine> {
        self.lines.iter_mut().find(|l| l.id == line_id)
    }
}

/// The result of a successfully evaluated workflow transition.
///
/// Transitions are atomic: they either succeed completely, yielding a
/// new card with the record appended, or fail leaving the input card
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The card after the transition was appended.
    pub new_card: Timecard,
    /// The transition record that was appended.
    pub transition: Transition,
}
