//! API layer - REST and in-process transports

pub mod native;
pub mod rest;
