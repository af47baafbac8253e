// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use timecard_core::{PersonDirectory, Timecard};
use timecard_domain::{PersonId, TimecardId};
use tracing::{debug, info, warn};

use crate::error::PersistenceError;
use crate::schema::initialize_schema;

/// SQLite-backed store for timecards and the person directory.
///
/// Timecards are persisted whole as JSON documents: the aggregate is
/// small and always read and written as a unit, so a document column
/// avoids a table per collection. People are a bare identifier table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new in-memory store.
    ///
    /// Used for tests and ephemeral runs; all data is lost when the
    /// store is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or schema
    /// initialization fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        info!("Opened in-memory store");
        Ok(Self { conn })
    }

    /// Creates a new store backed by a database file.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The database file path
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or schema
    /// initialization fails.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let conn: Connection = Connection::open(path.as_ref())?;
        initialize_schema(&conn)?;
        info!(path = %path.as_ref().display(), "Opened file-backed store");
        Ok(Self { conn })
    }

    /// Inserts a newly opened timecard.
    ///
    /// # Errors
    ///
    /// Returns an error if the card cannot be serialized or the insert
    /// fails (including an identifier collision).
    pub fn insert_timecard(&self, card: &Timecard) -> Result<(), PersistenceError> {
        let document: String = serde_json::to_string(card)?;
        let opened: String = card.opened().format(&Rfc3339)?;

        self.conn.execute(
            "INSERT INTO timecards (id, opened, document) VALUES (?1, ?2, ?3)",
            params![card.id().to_string(), opened, document],
        )?;
        debug!(id = %card.id(), "Inserted timecard");

        Ok(())
    }

    /// Replaces the stored document for an existing timecard.
    ///
    /// # Errors
    ///
    /// Returns `TimecardNotFound` if no row with the card's identifier
    /// exists, or an error if serialization or the update fails.
    pub fn update_timecard(&self, card: &Timecard) -> Result<(), PersistenceError> {
        let document: String = serde_json::to_string(card)?;
        let opened: String = card.opened().format(&Rfc3339)?;

        let rows: usize = self.conn.execute(
            "UPDATE timecards SET opened = ?2, document = ?3 WHERE id = ?1",
            params![card.id().to_string(), opened, document],
        )?;
        if rows == 0 {
            return Err(PersistenceError::TimecardNotFound(card.id()));
        }
        debug!(id = %card.id(), "Updated timecard");

        Ok(())
    }

    /// Deletes a timecard row.
    ///
    /// The caller is responsible for having checked the deletion rules;
    /// the store only removes the row.
    ///
    /// # Errors
    ///
    /// Returns `TimecardNotFound` if no row with the identifier exists.
    pub fn delete_timecard(&self, id: TimecardId) -> Result<(), PersistenceError> {
        let rows: usize = self
            .conn
            .execute("DELETE FROM timecards WHERE id = ?1", params![id.to_string()])?;
        if rows == 0 {
            return Err(PersistenceError::TimecardNotFound(id));
        }
        debug!(id = %id, "Deleted timecard");

        Ok(())
    }

    /// Looks up a timecard by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored document
    /// cannot be deserialized.
    pub fn find_timecard(&self, id: TimecardId) -> Result<Option<Timecard>, PersistenceError> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM timecards WHERE id = ?1",
                params![id.to_string()],
                |row| row.get(0),
            )
            .optional()?;

        match document {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    /// Lists every stored timecard, oldest opened first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or any stored document
    /// cannot be deserialized.
    pub fn list_timecards(&self) -> Result<Vec<Timecard>, PersistenceError> {
        let mut statement = self
            .conn
            .prepare("SELECT document FROM timecards ORDER BY opened, id")?;
        let documents = statement.query_map([], |row| row.get::<_, String>(0))?;

        let mut cards: Vec<Timecard> = Vec::new();
        for document in documents {
            cards.push(serde_json::from_str(&document?)?);
        }
        Ok(cards)
    }

    /// Registers a person. Registering the same identifier twice is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn add_person(&self, person: PersonId) -> Result<(), PersistenceError> {
        self.conn.execute(
            "INSERT OR IGNORE INTO people (id) VALUES (?1)",
            params![person.value()],
        )?;
        debug!(person = %person, "Registered person");

        Ok(())
    }

    /// Checks whether a person is registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn person_exists(&self, person: PersonId) -> Result<bool, PersistenceError> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM people WHERE id = ?1",
                params![person.value()],
                |row| row.get(0),
            )
            .optional()?;

        Ok(found.is_some())
    }

    /// Lists every registered person, in identifier order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_people(&self) -> Result<Vec<PersonId>, PersistenceError> {
        let mut statement = self.conn.prepare("SELECT id FROM people ORDER BY id")?;
        let ids = statement.query_map([], |row| row.get::<_, i64>(0))?;

        let mut people: Vec<PersonId> = Vec::new();
        for id in ids {
            people.push(PersonId::new(id?));
        }
        Ok(people)
    }
}

impl PersonDirectory for SqliteStore {
    // The directory answer has no error channel; a failed lookup reads
    // as an unknown person and the warning is its only trace.
    fn exists(&self, person: PersonId) -> bool {
        match self.person_exists(person) {
            Ok(exists) => exists,
            Err(e) => {
                warn!(person = %person, error = %e, "Person lookup failed");
                false
            }
        }
    }
}
