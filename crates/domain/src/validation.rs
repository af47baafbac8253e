// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::line::LineDocument;

/// Validates an inbound line document.
///
/// Every line-mutating operation (add, replace, patch) runs the same
/// validation on the final document form.
///
/// # Errors
///
/// Returns an error if:
/// - `hours` is negative or not finite
/// - `week` is outside 1..=53
/// - `year` is not positive
/// - `project` is empty or whitespace only
pub fn validate_line_document(document: &LineDocument) -> Result<(), DomainError> {
    if !document.hours.is_finite() || document.hours < 0.0 {
        return Err(DomainError::InvalidHours(document.hours));
    }
    if !(1..=53).contains(&document.week) {
        return Err(DomainError::InvalidWeek(document.week));
    }
    if document.year <= 0 {
        return Err(DomainError::InvalidYear(document.year));
    }
    if document.project.trim().is_empty() {
        return Err(DomainError::InvalidProject(String::from(
            "project must not be empty",
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DayOfWeek;

    fn valid_document() -> LineDocument {
        LineDocument {
            week: 1,
            year: 2024,
            day: DayOfWeek::Monday,
            hours: 8.0,
            project: String::from("A"),
        }
    }

    #[test]
    fn test_valid_document_passes() {
        assert!(validate_line_document(&valid_document()).is_ok());
    }

    #[test]
    fn test_zero_hours_is_valid() {
        let mut document: LineDocument = valid_document();
        document.hours = 0.0;
        assert!(validate_line_document(&document).is_ok());
    }

    #[test]
    fn test_negative_hours_rejected() {
        let mut document: LineDocument = valid_document();
        document.hours = -0.5;
        assert_eq!(
            validate_line_document(&document),
            Err(DomainError::InvalidHours(-0.5))
        );
    }

    #[test]
    fn test_non_finite_hours_rejected() {
        let mut document: LineDocument = valid_document();
        document.hours = f32::NAN;
        assert!(validate_line_document(&document).is_err());
        document.hours = f32::INFINITY;
        assert!(validate_line_document(&document).is_err());
    }

    #[test]
    fn test_week_bounds() {
        let mut document: LineDocument = valid_document();
        document.week = 0;
        assert_eq!(
            validate_line_document(&document),
            Err(DomainError::InvalidWeek(0))
        );
        document.week = 53;
        assert!(validate_line_document(&document).is_ok());
        document.week = 54;
        assert_eq!(
            validate_line_document(&document),
            Err(DomainError::InvalidWeek(54))
        );
    }

    #[test]
    fn test_non_positive_year_rejected() {
        let mut document: LineDocument = valid_document();
        document.year = 0;
        assert_eq!(
            validate_line_document(&document),
            Err(DomainError::InvalidYear(0))
        );
    }

    #[test]
    fn test_blank_project_rejected() {
        let mut document: LineDocument = valid_document();
        document.project = String::from("   ");
        assert!(matches!(
            validate_line_document(&document),
            Err(DomainError::InvalidProject(_))
        ));
    }
}
