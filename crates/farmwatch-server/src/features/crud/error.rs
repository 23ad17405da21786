use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    api::response::ErrorResponse,
    features::shared::{
        error_helpers::{check_constraint_violation, ConstraintViolation},
        ValidationError,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0} references a record that does not exist")]
    InvalidReference(&'static str),
    #[error("{0} violates a data constraint")]
    ConstraintViolation(&'static str),
    #[error("Cannot delete {0}: other records still depend on it")]
    HasDependencies(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CrudError {
    /// Classify an error raised while inserting or updating `entity`
    pub fn from_write(entity: &'static str, error: sqlx::Error) -> Self {
        match check_constraint_violation(error) {
            ConstraintViolation::ForeignKeyViolation => Self::InvalidReference(entity),
            ConstraintViolation::CheckViolation | ConstraintViolation::UniqueViolation => {
                Self::ConstraintViolation(entity)
            },
            ConstraintViolation::Other(e) => Self::Database(e),
        }
    }

    /// Classify an error raised while deleting `entity`
    pub fn from_delete(entity: &'static str, error: sqlx::Error) -> Self {
        match check_constraint_violation(error) {
            ConstraintViolation::ForeignKeyViolation => Self::HasDependencies(entity),
            ConstraintViolation::Other(e) => Self::Database(e),
            _ => Self::ConstraintViolation(entity),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidReference(_) | Self::ConstraintViolation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            },
            Self::HasDependencies(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidReference(_) => "INVALID_REFERENCE",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::HasDependencies(_) => "HAS_DEPENDENCIES",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        let detail = match &self {
            Self::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            },
            other => other.to_string(),
        };

        ErrorResponse::new(self.code(), detail).into_response_with(self.status())
    }
}
