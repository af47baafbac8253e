// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the persistence layer.

use thiserror::Error;
use timecard_domain::TimecardId;

/// Persistence-level errors.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored document could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A timestamp could not be formatted for storage.
    #[error("Timestamp formatting error: {0}")]
    TimestampFormat(#[from] time::error::Format),

    /// The requested timecard does not exist.
    #[error("Timecard not found: {0}")]
    TimecardNotFound(TimecardId),
}
