//! DynamoDB repository implementation.
//!
//! Implements the repository trait from `lingualog_core::storage` using
//! DynamoDB. Each operation builds one SDK request and sends it; failures
//! propagate to the caller with no retry.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use lingualog_core::storage::{Result, TranslationRepository};
use lingualog_core::translation::TranslationRecord;

use super::conversions::{item_to_record, record_to_item};
use super::error::{map_delete_item_error, map_put_item_error, map_query_error, map_scan_error};
use super::options::{DEFAULT_TABLE_NAME, TableOptions};

/// Environment variable overriding the table name for [`DynamoDbRepository::from_env`].
const TABLE_NAME_ENV: &str = "LINGUALOG_TABLE_NAME";

/// DynamoDB-based repository implementation.
///
/// Holds only the SDK client and the table binding; construction is the
/// single point of configuration.
pub struct DynamoDbRepository {
    client: Client,
    options: TableOptions,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table
    /// binding.
    pub fn new(client: Client, options: TableOptions) -> Self {
        Self { client, options }
    }

    /// Creates a new repository from environment configuration.
    ///
    /// Uses the AWS SDK default credential chain and reads the table name
    /// from `LINGUALOG_TABLE_NAME` (defaults to "lingualog"). Key attribute
    /// names use the shared schema defaults.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        let table_name =
            std::env::var(TABLE_NAME_ENV).unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string());

        Self::new(client, TableOptions::new(table_name))
    }

    /// Get the table binding.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.options.table_name
    }
}

#[async_trait]
impl TranslationRepository for DynamoDbRepository {
    async fn insert(&self, record: &TranslationRecord) -> Result<()> {
        let item = record_to_item(record, &self.options);

        self.client
            .put_item()
            .table_name(&self.options.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        tracing::debug!(
            username = %record.username,
            request_id = %record.request_id,
            "inserted translation record"
        );
        Ok(())
    }

    async fn query_by_user(&self, username: &str) -> Result<Vec<TranslationRecord>> {
        let result = self
            .client
            .query()
            .table_name(&self.options.table_name)
            .key_condition_expression("#pk = :username")
            .expression_attribute_names("#pk", &self.options.partition_key)
            .expression_attribute_values(":username", AttributeValue::S(username.to_string()))
            .scan_index_forward(true)
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        tracing::debug!(username, count = items.len(), "queried translation records");
        items
            .iter()
            .map(|item| item_to_record(item, &self.options))
            .collect()
    }

    async fn delete(&self, username: &str, request_id: &str) -> Result<Vec<TranslationRecord>> {
        self.client
            .delete_item()
            .table_name(&self.options.table_name)
            .key(
                &self.options.partition_key,
                AttributeValue::S(username.to_string()),
            )
            .key(
                &self.options.sort_key,
                AttributeValue::S(request_id.to_string()),
            )
            .send()
            .await
            .map_err(map_delete_item_error)?;

        tracing::debug!(username, request_id, "deleted translation record");

        // Separate request; a concurrent write can land in between.
        self.query_by_user(username).await
    }

    async fn scan_all(&self) -> Result<Vec<TranslationRecord>> {
        // Single page: results past the store's response limit are not fetched.
        let result = self
            .client
            .scan()
            .table_name(&self.options.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        tracing::debug!(count = items.len(), "scanned translation records");
        items
            .iter()
            .map(|item| item_to_record(item, &self.options))
            .collect()
    }
}
