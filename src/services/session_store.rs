//! File-backed session store
//!
//! Persists one pretty-printed JSON file per session under a daily folder,
//! plus an append-only `history.json` keyed by user id. The history
//! read-modify-write is serialized behind a mutex so concurrent requests
//! cannot drop appends.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::OptimizerResult;
use crate::traits::SessionStore;
use crate::types::SessionRecord;

/// History bucket for the single anonymous user. A future user id
/// parameter slots in here without a format change.
const GUEST_USER: &str = "guest_user";

/// Real file system session store
pub struct FileSessionStore {
    /// Base directory for session files and the history file
    base_dir: PathBuf,

    /// Serializes the history read-modify-write
    history_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Create a store rooted at the given directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            history_lock: Mutex::new(()),
        }
    }

    fn history_path(&self) -> PathBuf {
        self.base_dir.join("history.json")
    }

    /// Daily folder for session files: `<base>/<YYYY-MM-DD>/session_<id>.json`
    fn session_path(&self, session_id: &str) -> PathBuf {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        self.base_dir
            .join(date)
            .join(format!("session_{session_id}.json"))
    }

    async fn write_session_file(&self, record: &SessionRecord) -> OptimizerResult<PathBuf> {
        let path = self.session_path(&record.session_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(record)?;
        fs::write(&path, content).await?;
        Ok(path)
    }

    async fn append_to_history(&self, record: &SessionRecord) -> OptimizerResult<()> {
        let _guard = self.history_lock.lock().await;

        fs::create_dir_all(&self.base_dir).await?;
        let path = self.history_path();

        let mut history: serde_json::Map<String, Value> = if path.exists() {
            let content = fs::read_to_string(&path).await?;
            serde_json::from_str(&content)?
        } else {
            serde_json::Map::new()
        };

        let bucket = history
            .entry(GUEST_USER.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Some(records) = bucket.as_array_mut() {
            records.push(serde_json::to_value(record)?);
        }

        let content = serde_json::to_string_pretty(&Value::Object(history))?;
        fs::write(&path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save_session(&self, record: &SessionRecord) -> OptimizerResult<()> {
        let path = self.write_session_file(record).await?;
        info!("Session {} saved to {}", record.session_id, path.display());

        self.append_to_history(record).await
    }

    async fn load_history(&self) -> OptimizerResult<Vec<SessionRecord>> {
        let _guard = self.history_lock.lock().await;

        let path = self.history_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).await?;
        let history: serde_json::Map<String, Value> = serde_json::from_str(&content)?;

        match history.get(GUEST_USER) {
            Some(bucket) => Ok(serde_json::from_value(bucket.clone())?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Item, Selection};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_record(budget: u32) -> SessionRecord {
        SessionRecord::new(
            budget,
            Selection {
                selected_items: vec![Item::new("A", 2, 3)],
                total_price: 2,
                total_value: 3,
            },
        )
    }

    fn create_test_store() -> (FileSessionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_empty_history() {
        let (store, _temp) = create_test_store();
        let history = store.load_history().await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let (store, _temp) = create_test_store();

        let record = test_record(10);
        store.save_session(&record).await.unwrap();

        let history = store.load_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0], record);
    }

    #[tokio::test]
    async fn test_session_file_written_to_daily_folder() {
        let (store, _temp) = create_test_store();

        let record = test_record(10);
        store.save_session(&record).await.unwrap();

        let path = store.session_path(&record.session_id);
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: SessionRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, record);
    }

    #[tokio::test]
    async fn test_history_preserves_append_order() {
        let (store, _temp) = create_test_store();

        let first = test_record(1);
        let second = test_record(2);
        let third = test_record(3);

        store.save_session(&first).await.unwrap();
        store.save_session(&second).await.unwrap();
        store.save_session(&third).await.unwrap();

        let history = store.load_history().await.unwrap();
        let budgets: Vec<u32> = history.iter().map(|r| r.budget).collect();
        assert_eq!(budgets, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_history_file_keyed_by_guest_user() {
        let (store, temp) = create_test_store();

        store.save_session(&test_record(5)).await.unwrap();

        let content = std::fs::read_to_string(temp.path().join("history.json")).unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert!(parsed.get(GUEST_USER).is_some());
        assert_eq!(parsed[GUEST_USER].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_saves_do_not_lose_records() {
        let (store, _temp) = create_test_store();
        let store = Arc::new(store);

        let mut handles = Vec::new();
        for budget in 1..=10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.save_session(&test_record(budget)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let history = store.load_history().await.unwrap();
        assert_eq!(history.len(), 10);
    }
}
