// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::Timecard;
use timecard_audit::Transition;
use timecard_domain::{DomainError, TimecardStatus};

/// Returns the transition that put the card in the given status.
///
/// The query is only answerable while the card is actually in that
/// status; otherwise the transition of the requested kind is not
/// "current" and the query fails with `MissingTransition`. Among
/// multiple transitions into the same status (a card can return to
/// draft repeatedly via corrections), the one with the greatest
/// `occurred_at` wins; equal timestamps are broken by insertion order,
/// latest first.
///
/// # Errors
///
/// Returns `DomainError::MissingTransition` if the card's current
/// status differs from the requested one.
pub fn current_transition(
    card: &Timecard,
    status: TimecardStatus,
) -> Result<&Transition, CoreError> {
    if card.status() != status {
        return Err(CoreError::DomainViolation(DomainError::MissingTransition {
            status: card.status(),
        }));
    }

    card.transitions()
        .iter()
        .enumerate()
        .filter(|(_, t)| t.transitioned_to == status)
        .max_by_key(|(index, t)| (t.occurred_at, *index))
        .map(|(_, t)| t)
        .ok_or(CoreError::DomainViolation(DomainError::MissingTransition {
            status,
        }))
}
