//! REST DTOs with serde derives for HTTP API
//!
//! Missing request fields fall back to defaults; no field is validated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ===== Response DTOs =====

/// Short employee shape returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeShortResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

/// Full employee shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<RoleItemResponse>,
    pub applied_promocodes_count: i32,
}

/// Role as returned inside an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleItemResponse {
    pub name: String,
    pub description: String,
}

// ===== Request DTOs =====

/// Role as submitted inside an employee request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleItemRequest {
    pub name: String,
    pub description: String,
}

/// Create employee request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<RoleItemRequest>,
    pub applied_promocodes_count: i32,
}

/// Update employee request; `id` selects the employee to replace
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: CreateEmployeeRequest,
}
