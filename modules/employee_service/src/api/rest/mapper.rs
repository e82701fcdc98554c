//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations for bidirectional
//! conversion between REST DTOs and transport-agnostic contract models.

use super::dto::*;
use crate::contract;

// ===== Employee -> response =====

impl From<contract::Employee> for EmployeeShortResponse {
    fn from(employee: contract::Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            email: employee.email,
        }
    }
}

impl From<contract::Employee> for EmployeeResponse {
    fn from(employee: contract::Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            email: employee.email,
            roles: employee.roles.into_iter().map(Into::into).collect(),
            applied_promocodes_count: employee.applied_promocodes_count,
        }
    }
}

impl From<contract::Role> for RoleItemResponse {
    fn from(role: contract::Role) -> Self {
        Self {
            name: role.name,
            description: role.description,
        }
    }
}

// ===== Request -> draft =====

impl From<RoleItemRequest> for contract::Role {
    fn from(req: RoleItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

impl From<CreateEmployeeRequest> for contract::EmployeeDraft {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            roles: req.roles.into_iter().map(Into::into).collect(),
            applied_promocodes_count: req.applied_promocodes_count,
        }
    }
}
