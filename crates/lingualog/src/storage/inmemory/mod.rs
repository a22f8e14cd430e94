//! In-memory storage backend.
//!
//! Mirrors the DynamoDB backend's observable semantics without an external
//! service; used by tests and local development.

mod repository;

pub use repository::InMemoryRepository;
