//! Domain service - business logic orchestration

use crate::contract::{Employee, EmployeeDraft, EmployeesError};
use super::repository::Repository;
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for employee management
pub struct Service {
    employees: Arc<dyn Repository<Employee>>,
}

impl Service {
    /// Create a new service instance
    pub fn new(employees: Arc<dyn Repository<Employee>>) -> Self {
        Self { employees }
    }

    /// List all employees
    pub async fn list_employees(&self) -> Result<Vec<Employee>, EmployeesError> {
        self.employees.get_all().await.map_err(internal)
    }

    /// Get a specific employee
    pub async fn get_employee(&self, id: Uuid) -> Result<Employee, EmployeesError> {
        self.employees
            .get_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| EmployeesError::not_found(id))
    }

    /// Create an employee under a freshly generated identifier
    pub async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, EmployeesError> {
        // Email uniqueness is not enforced
        let employee = Employee::from_draft(Uuid::new_v4(), draft);

        let created = self.employees.create(employee).await.map_err(internal)?;
        tracing::debug!(employee_id = %created.id, "employee created");
        Ok(created)
    }

    /// Replace every mutable field of an existing employee
    ///
    /// Fields are never merged with the stored record.
    pub async fn update_employee(
        &self,
        id: Uuid,
        draft: EmployeeDraft,
    ) -> Result<Employee, EmployeesError> {
        let employee = Employee::from_draft(id, draft);

        let updated = self
            .employees
            .update(id, employee)
            .await
            .map_err(internal)?
            .ok_or_else(|| EmployeesError::not_found(id))?;
        tracing::debug!(employee_id = %id, "employee updated");
        Ok(updated)
    }

    /// Delete an employee
    pub async fn delete_employee(&self, id: Uuid) -> Result<(), EmployeesError> {
        let removed = self.employees.delete(id).await.map_err(internal)?;
        if !removed {
            return Err(EmployeesError::not_found(id));
        }
        tracing::debug!(employee_id = %id, "employee deleted");
        Ok(())
    }
}

fn internal(error: anyhow::Error) -> EmployeesError {
    tracing::error!(error = ?error, "employee repository failure");
    EmployeesError::Internal
}
