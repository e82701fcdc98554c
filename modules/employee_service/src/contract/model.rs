//! Contract models for employee service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use uuid::Uuid;

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Unique identifier, generated on create
    pub id: Uuid,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address (not unique)
    pub email: String,
    /// Assigned roles, in request order
    pub roles: Vec<Role>,
    /// Number of promo codes applied by this employee
    pub applied_promocodes_count: i32,
}

impl Employee {
    /// Build an employee from a draft under the given identifier
    pub fn from_draft(id: Uuid, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            roles: draft.roles,
            applied_promocodes_count: draft.applied_promocodes_count,
        }
    }

    /// First name immediately followed by last name, no separator
    pub fn full_name(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

/// Role assigned to an employee
///
/// Roles are value copies: every write recreates them from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Every mutable employee field, used for both create and full-replace update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub applied_promocodes_count: i32,
}
