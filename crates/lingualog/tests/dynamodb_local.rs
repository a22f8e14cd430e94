//! Integration tests for the DynamoDB backend against DynamoDB Local.
//!
//! Run with a local DynamoDB (e.g. `docker run -p 8000:8000 amazon/dynamodb-local`):
//!
//! ```bash
//! AWS_ENDPOINT_URL=http://localhost:8000 \
//!   cargo test -p lingualog --features dynamodb -- --ignored
//! ```
//!
//! Each test provisions its own throwaway table and deletes it afterwards.

#![cfg(feature = "dynamodb")]

use std::time::Duration;

use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use lingualog::storage::dynamodb::{DynamoDbRepository, TableOptions};
use lingualog::{TranslationRecord, TranslationRepository};

fn endpoint_url() -> String {
    std::env::var("AWS_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

async fn local_client() -> Client {
    // DynamoDB Local accepts any credentials but requires some to be present.
    let credentials = Credentials::new("local", "local", None, None, "dynamodb-local");
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(endpoint_url())
        .load()
        .await;
    Client::new(&config)
}

async fn create_table(client: &Client, options: &TableOptions) {
    client
        .create_table()
        .table_name(&options.table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(&options.partition_key)
                .key_type(KeyType::Hash)
                .build()
                .expect("key schema"),
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(&options.sort_key)
                .key_type(KeyType::Range)
                .build()
                .expect("key schema"),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(&options.partition_key)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .expect("attribute definition"),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(&options.sort_key)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .expect("attribute definition"),
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .expect("create table");

    // DynamoDB Local activates tables almost immediately; poll briefly anyway.
    for _ in 0..30 {
        let state = client
            .describe_table()
            .table_name(&options.table_name)
            .send()
            .await
            .expect("describe table");
        if state.table().and_then(|t| t.table_status().cloned()) == Some(TableStatus::Active) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }
    panic!("table {} never became active", options.table_name);
}

async fn drop_table(client: &Client, options: &TableOptions) {
    client
        .delete_table()
        .table_name(&options.table_name)
        .send()
        .await
        .expect("delete table");
}

fn throwaway_options() -> TableOptions {
    TableOptions::new(format!("lingualog-test-{}", Uuid::new_v4()))
}

fn record(username: &str, request_id: &str, text: &str, translated: &str) -> TranslationRecord {
    TranslationRecord::new(username, "en", "es", text, translated).with_request_id(request_id)
}

#[tokio::test]
#[ignore = "requires DynamoDB Local (AWS_ENDPOINT_URL)"]
async fn insert_query_delete_round_trip() {
    let client = local_client().await;
    let options = throwaway_options();
    create_table(&client, &options).await;

    let repo = DynamoDbRepository::new(client.clone(), options.clone());

    let r = record("alice", "r1", "hello", "hola");
    repo.insert(&r).await.unwrap();
    assert_eq!(repo.query_by_user("alice").await.unwrap(), vec![r]);

    let remaining = repo.delete("alice", "r1").await.unwrap();
    assert!(remaining.is_empty());
    assert!(repo.query_by_user("alice").await.unwrap().is_empty());

    drop_table(&client, &options).await;
}

#[tokio::test]
#[ignore = "requires DynamoDB Local (AWS_ENDPOINT_URL)"]
async fn overwrite_ordering_and_scan() {
    let client = local_client().await;
    let options = throwaway_options();
    create_table(&client, &options).await;

    let repo = DynamoDbRepository::new(client.clone(), options.clone());

    repo.insert(&record("alice", "r2", "two", "dos"))
        .await
        .unwrap();
    repo.insert(&record("alice", "r1", "one", "uno"))
        .await
        .unwrap();
    repo.insert(&record("bob", "r1", "bye", "adios"))
        .await
        .unwrap();
    // Same key again: replaces, does not duplicate.
    repo.insert(&record("alice", "r1", "one", "un"))
        .await
        .unwrap();

    let alice = repo.query_by_user("alice").await.unwrap();
    let ids: Vec<&str> = alice.iter().map(|r| r.request_id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
    assert_eq!(alice[0].target_text, "un");

    let all = repo.scan_all().await.unwrap();
    assert_eq!(all.len(), 3);

    assert!(repo.query_by_user("nobody").await.unwrap().is_empty());

    drop_table(&client, &options).await;
}
