// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! SQLite persistence for the timecard approval service.
//!
//! Timecard aggregates are stored whole as JSON documents keyed by
//! identifier, and the person directory is a plain identifier table.
//! The store also implements [`timecard_core::PersonDirectory`], so the
//! transition engine can consult the same database its cards live in.

mod error;
mod schema;
mod store;

pub use error::PersistenceError;
pub use schema::initialize_schema;
pub use store::SqliteStore;
