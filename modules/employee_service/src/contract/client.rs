//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the employee service.
//! NO HTTP - direct function calls.

use super::{
    error::EmployeesError,
    model::{Employee, EmployeeDraft},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Employee service API for inter-module communication
#[async_trait]
pub trait EmployeesApi: Send + Sync {
    /// List every stored employee in insertion order
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeesError>;

    /// Get an employee by identifier
    async fn get_employee(&self, id: Uuid) -> Result<Employee, EmployeesError>;

    /// Create an employee under a freshly generated identifier
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, EmployeesError>;

    /// Replace every mutable field of an existing employee
    async fn update_employee(
        &self,
        id: Uuid,
        draft: EmployeeDraft,
    ) -> Result<Employee, EmployeesError>;

    /// Remove an employee
    async fn delete_employee(&self, id: Uuid) -> Result<(), EmployeesError>;
}
