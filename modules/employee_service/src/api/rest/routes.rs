//! Route registration

use crate::domain::Service;
use super::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Register all employee routes under `base_path`
pub fn register_routes(router: Router, base_path: &str, service: Arc<Service>) -> Router {
    let employees = Router::new()
        .route(
            "/employees",
            post(handlers::create_employee)
                .get(handlers::list_employees)
                .put(handlers::update_employee),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee).delete(handlers::delete_employee),
        )
        .with_state(service);

    // axum refuses to nest at "/", so an empty prefix merges instead
    match base_path.trim_matches('/') {
        "" => router.merge(employees),
        prefix => router.nest(&format!("/{prefix}"), employees),
    }
}
