//! Employee Service Module
//!
//! Employee management over a generic in-memory repository, exposed as a
//! REST API and as an in-process native client.

// Public exports
pub mod contract;
pub use contract::{
    client::EmployeesApi, error::EmployeesError, Employee, EmployeeDraft, Role,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::EmployeeServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
