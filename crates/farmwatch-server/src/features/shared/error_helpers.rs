//! Database error handling utilities
//!
//! Classifies constraint violations reported by Postgres so commands can turn
//! them into client errors instead of opaque 500s.
//!
//! # Examples
//!
//! ```rust,ignore
//! use farmwatch_server::features::shared::error_helpers::{check_constraint_violation, ConstraintViolation};
//!
//! match check_constraint_violation(err) {
//!     ConstraintViolation::ForeignKeyViolation => { /* dangling reference */ }
//!     ConstraintViolation::Other(e) => return Err(e.into()),
//!     _ => {}
//! }
//! ```

use sqlx::Error as SqlxError;

/// Result of checking for a database constraint violation
#[derive(Debug)]
pub enum ConstraintViolation {
    /// A unique constraint was violated
    UniqueViolation,
    /// A foreign key constraint was violated
    ForeignKeyViolation,
    /// A CHECK constraint was violated
    CheckViolation,
    /// No constraint violation - some other error occurred
    Other(SqlxError),
}

/// Check the type of database constraint violation
pub fn check_constraint_violation(error: SqlxError) -> ConstraintViolation {
    if let SqlxError::Database(ref db_err) = error {
        if db_err.is_unique_violation() {
            return ConstraintViolation::UniqueViolation;
        }
        if db_err.is_foreign_key_violation() {
            return ConstraintViolation::ForeignKeyViolation;
        }
        if db_err.is_check_violation() {
            return ConstraintViolation::CheckViolation;
        }
    }
    ConstraintViolation::Other(error)
}
