//! Contract error types for employee service
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;
use uuid::Uuid;

/// Employee service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeesError {
    /// No employee is stored under the identifier
    #[error("employee not found: {id}")]
    NotFound { id: Uuid },

    /// Storage failure
    #[error("internal error")]
    Internal,
}

impl EmployeesError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }
}
