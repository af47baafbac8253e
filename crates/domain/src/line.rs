// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timecard line items and their inbound document forms.

use crate::types::{DayOfWeek, LineId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An inbound line document as received from a caller.
///
/// This is the editable representation: it carries every line field
/// except the identifier and the recorded timestamp, which the line
/// editor assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDocument {
    /// Reporting week within the year (1-53).
    pub week: i32,
    /// Reporting year.
    pub year: i32,
    /// Day of week the hours were worked.
    pub day: DayOfWeek,
    /// Hours worked. Must be non-negative; no upper bound is enforced.
    pub hours: f32,
    /// Free-text project identifier.
    pub project: String,
}

/// A partial edit of a line document.
///
/// Every field is optional; absent fields keep their current value.
/// Applying a patch is a pure transform from one document to another,
/// validated exactly as a full replace afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinePatch {
    /// Replacement reporting week, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<i32>,
    /// Replacement reporting year, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Replacement day of week, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<DayOfWeek>,
    /// Replacement hours value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f32>,
    /// Replacement project identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl LinePatch {
    /// Applies this patch to a document, producing the patched document.
    ///
    /// The input document is derived from the line's current state; the
    /// output must still pass full document validation.
    #[must_use]
    pub fn apply_to(&self, document: &LineDocument) -> LineDocument {
        LineDocument {
            week: self.week.unwrap_or(document.week),
            year: self.year.unwrap_or(document.year),
            day: self.day.unwrap_or(document.day),
            hours: self.hours.unwrap_or(document.hours),
            project: self
                .project
                .clone()
                .unwrap_or_else(|| document.project.clone()),
        }
    }

    /// Returns true if the patch contains no edits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.week.is_none()
            && self.year.is_none()
            && self.day.is_none()
            && self.hours.is_none()
            && self.project.is_none()
    }
}

/// A line item annotated with its identity and recording timestamp.
///
/// The identifier is assigned at creation and never changes; the
/// recorded timestamp refreshes whenever the line is replaced or
/// patched and serves as a tie-break sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardLine {
    /// Unique line identifier.
    pub id: LineId,
    /// Reporting week within the year.
    pub week: i32,
    /// Reporting year.
    pub year: i32,
    /// Day of week the hours were worked.
    pub day: DayOfWeek,
    /// Hours worked.
    pub hours: f32,
    /// Free-text project identifier.
    pub project: String,
    /// When the line was created or last replaced (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub recorded: OffsetDateTime,
}

impl TimecardLine {
    /// Builds an annotated line from a document.
    #[must_use]
    pub fn from_document(id: LineId, document: LineDocument, recorded: OffsetDateTime) -> Self {
        Self {
            id,
            week: document.week,
            year: document.year,
            day: document.day,
            hours: document.hours,
            project: document.project,
            recorded,
        }
    }

    /// Derives the editable document form of this line.
    ///
    /// Used as the base representation when a patch is applied.
    #[must_use]
    pub fn to_document(&self) -> LineDocument {
        LineDocument {
            week: self.week,
            year: self.year,
            day: self.day,
            hours: self.hours,
            project: self.project.clone(),
        }
    }

    /// Sort key for listing lines in work-date order.
    ///
    /// Lines are ordered by (year, week, day); the recorded timestamp
    /// breaks ties between lines for the same day.
    #[must_use]
    pub const fn work_order_key(&self) -> (i32, i32, DayOfWeek, OffsetDateTime) {
        (self.year, self.week, self.day, self.recorded)
    }
}
