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

//! API boundary layer for the timecard approval service.
//!
//! This crate owns the request/response documents, the API error
//! contract (including the original system's numeric error codes), and
//! thin handler functions that load aggregates from the store, run the
//! pure core operations, and persist the outcome. No HTTP concerns
//! live here; the server crate maps these handlers onto routes.

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    add_timecard_line, approve_timecard, cancel_timecard, correct_timecard,
    current_transition_of, delete_timecard, get_timecard, get_timecard_line, list_people,
    list_timecard_lines, list_timecard_transitions, list_timecards, open_timecard,
    patch_timecard_line, register_person, reject_timecard, replace_timecard_line,
    submit_timecard,
};
pub use request_response::{
    ActorDocument, ApprovalDocument, DeletionRequest, OpenTimecardRequest, PersonInfo,
    RegisterPersonRequest, ResourceLink, ServiceDescription, TimecardInfo,
};
