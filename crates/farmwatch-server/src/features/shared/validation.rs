//! Shared validation utilities
//!
//! Input payloads are checked before any statement reaches the database, so
//! a bad request never costs a round trip.
//!
//! # Examples
//!
//! ```rust,ignore
//! use farmwatch_server::features::shared::validation::{validate_text, MAX_NAME_LENGTH};
//!
//! validate_text("name", "Green Acres", MAX_NAME_LENGTH)?;
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Maximum length of names and other short labels
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum length of free-form text such as symptoms or weather notes
pub const MAX_TEXT_LENGTH: usize = 4096;

/// Maximum length of an image URL
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors produced while validating an incoming payload
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required and cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must be at most {max_length} characters")]
    TooLong {
        field: &'static str,
        max_length: usize,
    },

    #[error("{field} must not contain NUL characters")]
    NulCharacter { field: &'static str },

    #[error("harvest_date cannot be earlier than planting_date")]
    HarvestBeforePlanting,

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

/// Validate a required text field
///
/// # Rules
/// - Must not be empty or whitespace only
/// - Must not contain NUL characters, which PostgreSQL text cannot store
/// - Must not exceed `max_length` characters
pub fn validate_text(
    field: &'static str,
    value: &str,
    max_length: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    validate_content(field, value, max_length)
}

/// Validate an optional text field
///
/// Absent values always pass; present values may be empty but are otherwise
/// held to the same content rules as required text.
pub fn validate_optional_text(
    field: &'static str,
    value: Option<&str>,
    max_length: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => validate_content(field, value, max_length),
        None => Ok(()),
    }
}

fn validate_content(
    field: &'static str,
    value: &str,
    max_length: usize,
) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::NulCharacter { field });
    }
    if value.chars().count() > max_length {
        return Err(ValidationError::TooLong { field, max_length });
    }
    Ok(())
}

/// A crop cannot be harvested before it was planted.
///
/// Only checked when both dates are known.
pub fn validate_date_order(
    planting_date: Option<NaiveDate>,
    harvest_date: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match (planting_date, harvest_date) {
        (Some(planted), Some(harvested)) if harvested < planted => {
            Err(ValidationError::HarvestBeforePlanting)
        },
        _ => Ok(()),
    }
}

/// Validate that an integer parameter falls within `min..=max`
pub fn validate_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}

pub fn validate_non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}

/// Implemented by every payload that must be checked before it is persisted
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}
