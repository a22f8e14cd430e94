//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the translation record type. These are testable in isolation without
//! DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use lingualog_core::storage::StorageError;
use lingualog_core::translation::TranslationRecord;

use super::options::TableOptions;

// Payload attribute names, matching the shared record schema.
const ATTR_SOURCE_LANG: &str = "sourceLang";
const ATTR_TARGET_LANG: &str = "targetLang";
const ATTR_SOURCE_TEXT: &str = "sourceText";
const ATTR_TARGET_TEXT: &str = "targetText";
const ATTR_REQUESTED_AT: &str = "requestedAt";

/// Convert a TranslationRecord to a DynamoDB item.
///
/// The key fields land under the attribute names configured in `options`;
/// the payload fields use the shared schema's fixed names.
pub fn record_to_item(
    record: &TranslationRecord,
    options: &TableOptions,
) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        options.partition_key.clone(),
        AttributeValue::S(record.username.clone()),
    );
    item.insert(
        options.sort_key.clone(),
        AttributeValue::S(record.request_id.clone()),
    );

    // Payload
    item.insert(
        ATTR_SOURCE_LANG.to_string(),
        AttributeValue::S(record.source_lang.clone()),
    );
    item.insert(
        ATTR_TARGET_LANG.to_string(),
        AttributeValue::S(record.target_lang.clone()),
    );
    item.insert(
        ATTR_SOURCE_TEXT.to_string(),
        AttributeValue::S(record.source_text.clone()),
    );
    item.insert(
        ATTR_TARGET_TEXT.to_string(),
        AttributeValue::S(record.target_text.clone()),
    );
    item.insert(
        ATTR_REQUESTED_AT.to_string(),
        AttributeValue::S(record.requested_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a TranslationRecord.
pub fn item_to_record(
    item: &HashMap<String, AttributeValue>,
    options: &TableOptions,
) -> Result<TranslationRecord, StorageError> {
    Ok(TranslationRecord {
        username: get_string(item, &options.partition_key)?,
        request_id: get_string(item, &options.sort_key)?,
        source_lang: get_string(item, ATTR_SOURCE_LANG)?,
        target_lang: get_string(item, ATTR_TARGET_LANG)?,
        source_text: get_string(item, ATTR_SOURCE_TEXT)?,
        target_text: get_string(item, ATTR_TARGET_TEXT)?,
        requested_at: get_datetime(item, ATTR_REQUESTED_AT)?,
    })
}

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StorageError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StorageError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, StorageError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}
