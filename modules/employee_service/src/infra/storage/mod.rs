//! Storage layer - in-memory repositories and demo data

pub mod memory;
pub mod seed;

pub use memory::InMemoryRepository;
