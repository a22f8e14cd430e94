//! DynamoDB storage backend implementation.
//!
//! This module provides the DynamoDB-based implementation of
//! [`TranslationRepository`](lingualog_core::storage::TranslationRepository)
//! using `aws-sdk-dynamodb`. Every operation is a single request-response
//! exchange with the service; no retries, no pagination.

mod conversions;
mod error;
mod options;
mod repository;

pub use options::TableOptions;
pub use repository::DynamoDbRepository;
