//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::{Duration, Utc};
use lingualog_core::translation::TranslationRecord;
use std::collections::HashMap;

/// Generate demo translation records for a user.
///
/// Request ids are sequential so repeated seeding overwrites instead of
/// piling up; timestamps are spread backwards from now to look like real
/// history.
pub fn generate_seed_records(username: &str, count: u32) -> Vec<TranslationRecord> {
    let phrases: [(&str, &str, &str); 10] = [
        ("hello", "es", "hola"),
        ("good morning", "es", "buenos días"),
        ("thank you", "fr", "merci"),
        ("see you tomorrow", "fr", "à demain"),
        ("where is the station?", "de", "wo ist der Bahnhof?"),
        ("one coffee, please", "it", "un caffè, per favore"),
        ("how are you?", "pt", "como você está?"),
        ("good night", "es", "buenas noches"),
        ("I would like the menu", "fr", "je voudrais le menu"),
        ("the weather is nice", "de", "das Wetter ist schön"),
    ];

    let now = Utc::now();
    (0..count)
        .map(|i| {
            let (source_text, target_lang, target_text) = phrases[i as usize % phrases.len()];
            TranslationRecord::new(username, "en", target_lang, source_text, target_text)
                .with_request_id(format!("req-{:04}", i + 1))
                .with_requested_at(now - Duration::minutes(i64::from(count - i)))
        })
        .collect()
}

/// Convert a TranslationRecord to a DynamoDB item using the canonical
/// attribute names.
fn record_to_item(record: &TranslationRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "username".to_string(),
        AttributeValue::S(record.username.clone()),
    );
    item.insert(
        "requestId".to_string(),
        AttributeValue::S(record.request_id.clone()),
    );
    item.insert(
        "sourceLang".to_string(),
        AttributeValue::S(record.source_lang.clone()),
    );
    item.insert(
        "targetLang".to_string(),
        AttributeValue::S(record.target_lang.clone()),
    );
    item.insert(
        "sourceText".to_string(),
        AttributeValue::S(record.source_text.clone()),
    );
    item.insert(
        "targetText".to_string(),
        AttributeValue::S(record.target_text.clone()),
    );
    item.insert(
        "requestedAt".to_string(),
        AttributeValue::S(record.requested_at.to_rfc3339()),
    );

    item
}

/// Insert records into DynamoDB.
pub async fn seed_records(
    client: &Client,
    table_name: &str,
    records: &[TranslationRecord],
) -> Result<u32> {
    let mut inserted = 0;

    // Use batch write for efficiency (25 items per batch max)
    for chunk in records.chunks(25) {
        let write_requests: Vec<_> = chunk
            .iter()
            .map(|record| {
                aws_sdk_dynamodb::types::WriteRequest::builder()
                    .put_request(
                        aws_sdk_dynamodb::types::PutRequest::builder()
                            .set_item(Some(record_to_item(record)))
                            .build()
                            .expect("Failed to build PutRequest"),
                    )
                    .build()
            })
            .collect();

        client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        inserted += chunk.len() as u32;
    }

    Ok(inserted)
}
