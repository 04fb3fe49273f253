//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into caller-facing CRUD operations.
//! - Translate absence (missing records, missing references) into
//!   `ServiceError::NotFound` with a readable message.
//!
//! # Invariants
//! - Services are storage-agnostic; repositories are injected explicitly.
//! - Every validation/lookup failure is `NotFound`; only storage failures
//!   surface as `Repo`.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_service;
pub mod employee_service;

/// Result type used by service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error returned by service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// A referenced record or required reference is missing.
    NotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl ServiceError {
    /// Creates a not-found error with message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Returns whether this error is a `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(message) => write!(f, "not found: {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
