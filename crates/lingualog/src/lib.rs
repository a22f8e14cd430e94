//! Storage backends for lingualog translation records.
//!
//! The repository contract lives in [`lingualog_core::storage`]; this crate
//! provides the concrete implementations, selected via feature flags:
//!
//! - `inmemory` (default): an in-memory backend with the same observable
//!   semantics as the real store, for tests and local development.
//! - `dynamodb`: the DynamoDB backend using `aws-sdk-dynamodb`.

pub mod storage;

pub use lingualog_core::storage::{Result, StorageError, TranslationRepository};
pub use lingualog_core::translation::TranslationRecord;
