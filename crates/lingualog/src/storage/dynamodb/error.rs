//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StorageError` from `lingualog_core::storage`.
//! Classification is for readable messages only; callers get exactly one
//! failure per failed round trip, with no retry behind it.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use lingualog_core::storage::StorageError;

/// Map a PutItem SDK error to StorageError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StorageError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StorageError::Request("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StorageError::Request("Throughput exceeded".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StorageError::Request("Request limit exceeded".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StorageError::Request("DynamoDB internal server error".to_string())
        }
        err => StorageError::Request(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to StorageError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> StorageError {
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => {
            StorageError::Request("Table not found".to_string())
        }
        QueryError::ProvisionedThroughputExceededException(_) => {
            StorageError::Request("Throughput exceeded".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            StorageError::Request("Request limit exceeded".to_string())
        }
        QueryError::InternalServerError(_) => {
            StorageError::Request("DynamoDB internal server error".to_string())
        }
        err => StorageError::Request(format!("Query failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StorageError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StorageError {
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            StorageError::Request("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            StorageError::Request("Throughput exceeded".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            StorageError::Request("Request limit exceeded".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            StorageError::Request("DynamoDB internal server error".to_string())
        }
        err => StorageError::Request(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to StorageError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> StorageError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            StorageError::Request("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            StorageError::Request("Throughput exceeded".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            StorageError::Request("Request limit exceeded".to_string())
        }
        ScanError::InternalServerError(_) => {
            StorageError::Request("DynamoDB internal server error".to_string())
        }
        err => StorageError::Request(format!("Scan failed: {:?}", err)),
    }
}
