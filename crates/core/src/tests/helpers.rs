// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, PersonDirectory, Timecard, add_line, apply};
use time::OffsetDateTime;
use time::macros::datetime;
use timecard_domain::{DayOfWeek, LineDocument, PersonId};

/// The card-owning employee used throughout the tests.
pub const EMPLOYEE: PersonId = PersonId::new(7);

/// A reviewer distinct from the employee.
pub const REVIEWER: PersonId = PersonId::new(9);

/// An identifier no directory stub knows about.
pub const STRANGER: PersonId = PersonId::new(404);

/// In-memory directory stub holding an explicit set of people.
pub struct StubDirectory {
    people: Vec<PersonId>,
}

impl StubDirectory {
    pub fn with_people(people: &[PersonId]) -> Self {
        Self {
            people: people.to_vec(),
        }
    }

    pub fn everyone() -> Self {
        Self::with_people(&[EMPLOYEE, REVIEWER])
    }

    pub fn empty() -> Self {
        Self { people: Vec::new() }
    }
}

impl PersonDirectory for StubDirectory {
    fn exists(&self, person: PersonId) -> bool {
        self.people.contains(&person)
    }
}

pub fn test_time() -> OffsetDateTime {
    datetime!(2024-01-15 12:00 UTC)
}

pub fn later_time() -> OffsetDateTime {
    datetime!(2024-01-15 13:00 UTC)
}

pub fn even_later_time() -> OffsetDateTime {
    datetime!(2024-01-15 14:00 UTC)
}

pub fn sample_document() -> LineDocument {
    LineDocument {
        week: 1,
        year: 2024,
        day: DayOfWeek::Monday,
        hours: 8.0,
        project: String::from("A"),
    }
}

pub fn draft_card() -> Timecard {
    Timecard::open(EMPLOYEE, test_time())
}

pub fn draft_card_with_line() -> Timecard {
    let mut card = draft_card();
    add_line(&mut card, sample_document(), test_time()).expect("add line to draft card");
    card
}

pub fn submitted_card(directory: &StubDirectory) -> Timecard {
    let card = draft_card_with_line();
    apply(
        &card,
        Command::Submit { person: EMPLOYEE },
        directory,
        later_time(),
    )
    .expect("submit draft card")
    .new_card
}
