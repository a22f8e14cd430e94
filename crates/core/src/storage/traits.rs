use async_trait::async_trait;

use crate::translation::TranslationRecord;

use super::Result;

/// Repository for translation record operations.
///
/// Each method is a single round trip to the backing store (the delete
/// composition performs two). There is no update operation: writes always
/// replace the whole record.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Persists a record, overwriting any existing record with the same
    /// `(username, request_id)` key.
    async fn insert(&self, record: &TranslationRecord) -> Result<()>;

    /// Returns all records for a user in ascending request-id order.
    /// Returns an empty vector when the user has no records.
    async fn query_by_user(&self, username: &str) -> Result<Vec<TranslationRecord>>;

    /// Deletes one record by exact key, then returns the user's remaining
    /// records.
    ///
    /// The delete and the follow-up query are independent requests, not a
    /// transaction: a write that lands between them shows up in the returned
    /// list. Deleting a key that does not exist is not an error.
    async fn delete(&self, username: &str, request_id: &str) -> Result<Vec<TranslationRecord>>;

    /// Returns every record across all users, in whatever order the store
    /// yields them.
    async fn scan_all(&self) -> Result<Vec<TranslationRecord>>;
}
