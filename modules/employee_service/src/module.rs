//! Module declaration: wires repository, service and transports together

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::{Employee, EmployeesApi};
use crate::domain::{Repository, Service};
use crate::infra::storage::{seed, InMemoryRepository};
use std::sync::Arc;

/// Employee service module
pub struct EmployeeServiceModule {
    config: Config,
    service: Arc<Service>,
}

impl EmployeeServiceModule {
    /// Build the module over a fresh in-memory store
    pub fn new(config: Config) -> Self {
        let repo = if config.seed_demo_data {
            InMemoryRepository::with_data(seed::demo_employees())
        } else {
            InMemoryRepository::new()
        };
        tracing::info!(
            employees = repo.len(),
            base_path = %config.base_path,
            "Employee service initialized"
        );
        Self::with_repository(config, Arc::new(repo))
    }

    /// Build the module over a caller-supplied store
    pub fn with_repository(config: Config, repo: Arc<dyn Repository<Employee>>) -> Self {
        Self {
            config,
            service: Arc::new(Service::new(repo)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process calls
    pub fn client(&self) -> Arc<dyn EmployeesApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// REST routes nested under the configured base path
    pub fn router(&self) -> axum::Router {
        tracing::info!("Registering employee service REST routes");
        crate::api::rest::routes::register_routes(
            axum::Router::new(),
            &self.config.base_path,
            self.service.clone(),
        )
    }
}

impl Default for EmployeeServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
