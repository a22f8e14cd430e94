//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`TranslationRepository`](lingualog_core::storage::TranslationRepository)
//! trait. The implementations are selected at compile time via feature
//! flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory backend for testing
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The backends are independent; both can be enabled at once (tests do
//! exactly that).

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p lingualog --features dynamodb"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbRepository, TableOptions};
