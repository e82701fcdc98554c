//! HTTP request handlers - thin layer that delegates to domain service

use crate::domain::Service;
use super::{dto::*, error::ApiError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// List all employees in short form
pub async fn list_employees(
    State(service): State<Arc<Service>>,
) -> Result<Json<Vec<EmployeeShortResponse>>, ApiError> {
    let employees = service.list_employees().await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Get a specific employee
pub async fn get_employee(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = service.get_employee(id).await?;

    Ok(Json(employee.into()))
}

/// Create an employee
pub async fn create_employee(
    State(service): State<Arc<Service>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = service.create_employee(req.into()).await?;

    Ok(Json(employee.into()))
}

/// Replace an existing employee
pub async fn update_employee(
    State(service): State<Arc<Service>>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = service.update_employee(req.id, req.fields.into()).await?;

    Ok(Json(employee.into()))
}

/// Delete an employee
pub async fn delete_employee(
    State(service): State<Arc<Service>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    service.delete_employee(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
