//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{Entity, Repository};
pub use service::Service;
