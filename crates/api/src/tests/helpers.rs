// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;
use timecard_domain::{DayOfWeek, LineDocument, PersonId, TimecardId};
use timecard_persistence::SqliteStore;

use crate::handlers::{add_timecard_line, open_timecard, submit_timecard};
use crate::request_response::{ActorDocument, OpenTimecardRequest};

pub const EMPLOYEE: PersonId = PersonId::new(7);
pub const REVIEWER: PersonId = PersonId::new(9);
pub const STRANGER: PersonId = PersonId::new(404);

pub fn test_time() -> OffsetDateTime {
    datetime!(2024-01-15 12:00 UTC)
}

pub fn later_time() -> OffsetDateTime {
    datetime!(2024-01-15 13:00 UTC)
}

pub fn sample_document() -> LineDocument {
    LineDocument {
        week: 3,
        year: 2024,
        day: DayOfWeek::Monday,
        hours: 8.0,
        project: String::from("maintenance"),
    }
}

/// An in-memory store with the employee and reviewer registered.
pub fn store_with_people() -> SqliteStore {
    let store: SqliteStore = SqliteStore::new_in_memory().expect("open in-memory store");
    store.add_person(EMPLOYEE).expect("register employee");
    store.add_person(REVIEWER).expect("register reviewer");
    store
}

/// Opens a card for the employee and returns its identifier.
pub fn opened_card(store: &SqliteStore) -> TimecardId {
    open_timecard(
        store,
        &OpenTimecardRequest { person: EMPLOYEE },
        test_time(),
    )
    .expect("open timecard")
    .id
}

/// Opens, fills, and submits a card, returning its identifier.
pub fn submitted_card(store: &SqliteStore) -> TimecardId {
    let id: TimecardId = opened_card(store);
    add_timecard_line(store, id, sample_document(), test_time()).expect("add line");
    submit_timecard(store, id, &ActorDocument { person: EMPLOYEE }, later_time())
        .expect("submit timecard");
    id
}
