// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use timecard_core::CoreError;
use timecard_domain::DomainError;
use timecard_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Workflow violations carry the numeric error codes the
/// original timesheet system exposed to its clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The action is illegal for the card's current status. Code 100.
    InvalidState {
        /// A human-readable description of the violation.
        message: String,
    },
    /// A submit was attempted with no lines. Code 101.
    EmptyTimecard {
        /// A human-readable description of the violation.
        message: String,
    },
    /// No transition of the requested kind is current. Code 102.
    MissingTransition {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The actor lacks rights for the action. Code 103.
    NoAccess {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The referenced person is not registered. Code 104.
    MissingPerson {
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the legacy numeric error code for workflow violations.
    ///
    /// Not-found, input, and internal errors have no legacy code and
    /// are expressed through the HTTP status alone.
    #[must_use]
    pub const fn error_code(&self) -> Option<u16> {
        match self {
            Self::InvalidState { .. } => Some(100),
            Self::EmptyTimecard { .. } => Some(101),
            Self::MissingTransition { .. } => Some(102),
            Self::NoAccess { .. } => Some(103),
            Self::MissingPerson { .. } => Some(104),
            Self::ResourceNotFound { .. } | Self::InvalidInput { .. } | Self::Internal { .. } => {
                None
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidState { message }
            | Self::EmptyTimecard { message }
            | Self::MissingTransition { message }
            | Self::NoAccess { message }
            | Self::MissingPerson { message } => write!(f, "{message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly to clients.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::TimecardNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Timecard"),
            message: format!("Timecard {id} does not exist"),
        },
        DomainError::LineNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Line"),
            message: format!("Line {id} does not exist on this timecard"),
        },
        DomainError::InvalidState { status, action } => ApiError::InvalidState {
            message: format!("Cannot {action} a timecard in status '{status}'"),
        },
        DomainError::EmptyTimecard => ApiError::EmptyTimecard {
            message: String::from("Unable to submit timecard with no lines"),
        },
        DomainError::MissingTransition { status } => ApiError::MissingTransition {
            message: format!(
                "No transition of the requested kind is current for status '{status}'"
            ),
        },
        DomainError::NoAccess { person, action } => ApiError::NoAccess {
            message: format!("Person {person} has no access rights to {action}"),
        },
        DomainError::MissingPerson(person) => ApiError::MissingPerson {
            message: format!("Person {person} is unknown to the directory"),
        },
        DomainError::InvalidHours(hours) => ApiError::InvalidInput {
            field: String::from("hours"),
            message: format!("Invalid hours value {hours}: must be finite and non-negative"),
        },
        DomainError::InvalidWeek(week) => ApiError::InvalidInput {
            field: String::from("week"),
            message: format!("Invalid week {week}: must be between 1 and 53"),
        },
        DomainError::InvalidYear(year) => ApiError::InvalidInput {
            field: String::from("year"),
            message: format!("Invalid year {year}: must be positive"),
        },
        DomainError::InvalidProject(msg) => ApiError::InvalidInput {
            field: String::from("project"),
            message: msg,
        },
        DomainError::InvalidStatusValue(s) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{s}' is not a valid status"),
        },
        DomainError::InvalidDayValue(s) => ApiError::InvalidInput {
            field: String::from("day"),
            message: format!("'{s}' is not a valid day of week"),
        },
        DomainError::InvalidKindValue(s) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("'{s}' is not a valid transition kind"),
        },
        DomainError::InvalidIdentifier(s) => ApiError::InvalidInput {
            field: String::from("id"),
            message: format!("'{s}' is not a valid identifier"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::TimecardNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Timecard"),
                message: format!("Timecard {id} does not exist"),
            },
            other => Self::Internal {
                message: format!("Persistence failure: {other}"),
            },
        }
    }
}
