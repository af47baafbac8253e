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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod directory;
mod error;
mod lines;
mod queries;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, check_deletion};
pub use command::Command;
pub use directory::PersonDirectory;
pub use error::CoreError;
pub use lines::{add_line, patch_line, replace_line};
pub use queries::current_transition;
pub use state::{Timecard, TransitionResult};
