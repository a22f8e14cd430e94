use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single translation performed for a user.
///
/// Records are uniquely identified by `(username, request_id)`. The username
/// is the partition key in storage and the request id the sort key;
/// everything else is payload that storage backends carry through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// Owner of the record.
    pub username: String,
    /// Identifier distinguishing this record among the owner's records.
    pub request_id: String,
    pub source_lang: String,
    pub target_lang: String,
    pub source_text: String,
    pub target_text: String,
    pub requested_at: DateTime<Utc>,
}

impl TranslationRecord {
    /// Creates a new record with a generated request id and the current time.
    pub fn new(
        username: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            request_id: Uuid::new_v4().to_string(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            source_text: source_text.into(),
            target_text: target_text.into(),
            requested_at: Utc::now(),
        }
    }

    /// Sets a specific request id (useful for testing).
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Sets a specific request timestamp (useful for testing).
    pub fn with_requested_at(mut self, requested_at: DateTime<Utc>) -> Self {
        self.requested_at = requested_at;
        self
    }
}
