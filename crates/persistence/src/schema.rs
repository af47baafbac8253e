// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::Connection;
use tracing::info;

use crate::error::PersistenceError;

/// Initializes the database schema.
///
/// Timecards are stored as JSON documents keyed by identifier; the
/// `opened` column is duplicated out of the document so listings can be
/// ordered without deserializing every row. People are bare identifiers.
///
/// # Arguments
///
/// * `conn` - The database connection to initialize
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    info!("Initializing database schema");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS timecards (
            id TEXT PRIMARY KEY NOT NULL,
            opened TEXT NOT NULL,
            document TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_timecards_opened
            ON timecards(opened);

        CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY NOT NULL
        );
        ",
    )?;

    Ok(())
}
