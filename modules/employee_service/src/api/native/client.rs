//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Employee, EmployeeDraft, EmployeesApi, EmployeesError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EmployeesApi for NativeClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeesError> {
        self.service.list_employees().await
    }

    async fn get_employee(&self, id: Uuid) -> Result<Employee, EmployeesError> {
        self.service.get_employee(id).await
    }

    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, EmployeesError> {
        self.service.create_employee(draft).await
    }

    async fn update_employee(
        &self,
        id: Uuid,
        draft: EmployeeDraft,
    ) -> Result<Employee, EmployeesError> {
        self.service.update_employee(id, draft).await
    }

    async fn delete_employee(&self, id: Uuid) -> Result<(), EmployeesError> {
        self.service.delete_employee(id).await
    }
}
