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

mod error;
mod line;
mod status;
mod types;
mod validation;

pub use error::DomainError;
pub use line::{LineDocument, LinePatch, TimecardLine};
pub use status::TimecardStatus;
pub use types::{DayOfWeek, LineId, PersonId, TimecardId};
pub use validation::validate_line_document;
