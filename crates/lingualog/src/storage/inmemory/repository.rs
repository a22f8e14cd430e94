//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use lingualog_core::storage::{Result, TranslationRepository};
use lingualog_core::translation::TranslationRecord;

/// In-memory storage backend for testing.
///
/// Records live in a per-user `BTreeMap` keyed by request id, so queries
/// come back in ascending request-id order — the same order the real
/// store's sort key yields. Data is not persisted and will be lost when the
/// repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<String, BTreeMap<String, TranslationRecord>>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranslationRepository for InMemoryRepository {
    async fn insert(&self, record: &TranslationRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .entry(record.username.clone())
            .or_default()
            .insert(record.request_id.clone(), record.clone());
        Ok(())
    }

    async fn query_by_user(&self, username: &str) -> Result<Vec<TranslationRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(username)
            .map(|user_records| user_records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, username: &str, request_id: &str) -> Result<Vec<TranslationRecord>> {
        {
            let mut records = self.records.write().await;
            if let Some(user_records) = records.get_mut(username) {
                user_records.remove(request_id);
                if user_records.is_empty() {
                    records.remove(username);
                }
            }
        }
        self.query_by_user(username).await
    }

    async fn scan_all(&self) -> Result<Vec<TranslationRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .flat_map(|user_records| user_records.values().cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, request_id: &str, text: &str, translated: &str) -> TranslationRecord {
        TranslationRecord::new(username, "en", "es", text, translated)
            .with_request_id(request_id)
    }

    #[tokio::test]
    async fn test_insert_then_query_includes_record() {
        let repo = InMemoryRepository::new();
        let r = record("alice", "r1", "hello", "hola");

        repo.insert(&r).await.unwrap();

        let results = repo.query_by_user("alice").await.unwrap();
        assert_eq!(results, vec![r]);
    }

    #[tokio::test]
    async fn test_query_unknown_user_returns_empty() {
        let repo = InMemoryRepository::new();
        let results = repo.query_by_user("nobody").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_insert_twice_overwrites() {
        let repo = InMemoryRepository::new();
        let first = record("alice", "r1", "hello", "hola");
        let second = record("alice", "r1", "hello", "bonjour");

        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let results = repo.query_by_user("alice").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].target_text, "bonjour");
    }

    #[tokio::test]
    async fn test_query_orders_by_request_id() {
        let repo = InMemoryRepository::new();

        repo.insert(&record("alice", "r3", "three", "tres"))
            .await
            .unwrap();
        repo.insert(&record("alice", "r1", "one", "uno"))
            .await
            .unwrap();
        repo.insert(&record("alice", "r2", "two", "dos"))
            .await
            .unwrap();

        let ids: Vec<String> = repo
            .query_by_user("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.request_id)
            .collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[tokio::test]
    async fn test_query_is_scoped_to_user() {
        let repo = InMemoryRepository::new();

        repo.insert(&record("alice", "r1", "hello", "hola"))
            .await
            .unwrap();
        repo.insert(&record("bob", "r1", "bye", "adios"))
            .await
            .unwrap();

        let results = repo.query_by_user("alice").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].username, "alice");
    }

    #[tokio::test]
    async fn test_delete_returns_remaining_records() {
        let repo = InMemoryRepository::new();

        repo.insert(&record("alice", "r1", "one", "uno"))
            .await
            .unwrap();
        repo.insert(&record("alice", "r2", "two", "dos"))
            .await
            .unwrap();

        let remaining = repo.delete("alice", "r1").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].request_id, "r2");

        let results = repo.query_by_user("alice").await.unwrap();
        assert!(results.iter().all(|r| r.request_id != "r1"));
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_not_an_error() {
        let repo = InMemoryRepository::new();

        repo.insert(&record("alice", "r1", "hello", "hola"))
            .await
            .unwrap();

        let remaining = repo.delete("alice", "missing").await.unwrap();
        assert_eq!(remaining.len(), 1);

        let remaining = repo.delete("nobody", "r1").await.unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn test_scan_all_spans_users() {
        let repo = InMemoryRepository::new();

        repo.insert(&record("alice", "r1", "hello", "hola"))
            .await
            .unwrap();
        repo.insert(&record("bob", "r1", "bye", "adios"))
            .await
            .unwrap();
        repo.insert(&record("bob", "r2", "thanks", "gracias"))
            .await
            .unwrap();

        let all = repo.scan_all().await.unwrap();
        assert_eq!(all.len(), 3);

        repo.delete("bob", "r1").await.unwrap();
        let all = repo.scan_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all
            .iter()
            .all(|r| !(r.username == "bob" && r.request_id == "r1")));
    }

    #[tokio::test]
    async fn test_insert_query_delete_scenario() {
        let repo = InMemoryRepository::new();
        let r = record("alice", "r1", "hello", "hola");

        repo.insert(&r).await.unwrap();
        assert_eq!(repo.query_by_user("alice").await.unwrap(), vec![r]);

        let remaining = repo.delete("alice", "r1").await.unwrap();
        assert!(remaining.is_empty());
        assert!(repo.query_by_user("alice").await.unwrap().is_empty());
    }
}
