// src/storage.rs

//! Local key-value persistence for quiz results.
//!
//! Values are strings; the two result collections are stored as JSON arrays
//! under [`RECORDS_KEY`] and [`LEADERBOARD_KEY`] and are always read and
//! written whole.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{error::AppError, models::quiz_result::QuizResult};

/// Full history of results, in insertion order.
pub const RECORDS_KEY: &str = "records";
/// Results shown on the leaderboard; may be reset independently of `records`.
pub const LEADERBOARD_KEY: &str = "leaderboard";

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// All keys live in a single JSON object file that is rewritten on every change.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<HashMap<String, String>, AppError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!("Storage file {:?} is malformed, starting empty: {}", self.path, e);
                Ok(HashMap::new())
            }
        }
    }

    async fn save(&self, map: &HashMap<String, String>) -> Result<(), AppError> {
        let serialized = serde_json::to_string_pretty(map)?;
        // Write beside the target and rename over it, so an interrupted write
        // never leaves a half-written store behind.
        let staging = self.staging_path();
        tokio::fs::write(&staging, serialized).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let mut map = self.load().await?;
        map.insert(key.to_string(), value);
        self.save(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut map = self.load().await?;
        if map.remove(key).is_some() {
            self.save(&map).await?;
        }
        Ok(())
    }
}

/// Volatile store, used by tests and when no storage file is wanted.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::InternalServerError("memory store poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Loads a result collection. Missing or malformed values read as empty.
pub async fn load_results(store: &dyn KeyValueStore, key: &str) -> Result<Vec<QuizResult>, AppError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(results) => Ok(results),
        Err(e) => {
            tracing::warn!("Collection '{}' is malformed, treating as empty: {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Appends one result by rewriting the whole collection.
pub async fn append_result(
    store: &dyn KeyValueStore,
    key: &str,
    result: &QuizResult,
) -> Result<(), AppError> {
    let mut results = load_results(store, key).await?;
    results.push(result.clone());
    store.set(key, serde_json::to_string(&results)?).await
}

pub async fn clear_results(store: &dyn KeyValueStore, key: &str) -> Result<(), AppError> {
    store.remove(key).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::Student;

    fn result(name: &str, score: u32) -> QuizResult {
        QuizResult {
            student: Student {
                name: name.to_string(),
                roll: "1".to_string(),
                category: "Science".to_string(),
                difficulty: "easy".to_string(),
                date: "2026-10-18 09:00:00".to_string(),
            },
            score,
            date: "2026-10-18 09:05:00".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_key_reads_empty() {
        let store = MemoryStore::new();
        assert!(load_results(&store, RECORDS_KEY).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_value_reads_empty() {
        let store = MemoryStore::new();
        store.set(LEADERBOARD_KEY, "{not json".to_string()).await.unwrap();
        assert!(load_results(&store, LEADERBOARD_KEY).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_keeps_insertion_order() {
        let store = MemoryStore::new();
        append_result(&store, RECORDS_KEY, &result("Ada", 70)).await.unwrap();
        append_result(&store, RECORDS_KEY, &result("Linus", 90)).await.unwrap();
        let names: Vec<_> = load_results(&store, RECORDS_KEY)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.student.name)
            .collect();
        assert_eq!(names, vec!["Ada", "Linus"]);
    }

    #[tokio::test]
    async fn clear_leaves_other_collection() {
        let store = MemoryStore::new();
        append_result(&store, RECORDS_KEY, &result("Ada", 70)).await.unwrap();
        append_result(&store, LEADERBOARD_KEY, &result("Ada", 70)).await.unwrap();
        clear_results(&store, LEADERBOARD_KEY).await.unwrap();
        assert!(load_results(&store, LEADERBOARD_KEY).await.unwrap().is_empty());
        assert_eq!(load_results(&store, RECORDS_KEY).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn file_store_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("quiz_store_{}.json", uuid::Uuid::new_v4()));
        let _ = std::fs::remove_file(&path);

        let store = FileStore::new(&path);
        assert_eq!(store.get(RECORDS_KEY).await.unwrap(), None);
        append_result(&store, RECORDS_KEY, &result("Grace", 100)).await.unwrap();

        let reopened = FileStore::new(&path);
        let loaded = load_results(&reopened, RECORDS_KEY).await.unwrap();
        assert_eq!(loaded, vec![result("Grace", 100)]);

        reopened.remove(RECORDS_KEY).await.unwrap();
        assert_eq!(reopened.get(RECORDS_KEY).await.unwrap(), None);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn file_store_tolerates_garbage_file() {
        let path = std::env::temp_dir().join(format!("quiz_garbage_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "garbage").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.get(LEADERBOARD_KEY).await.unwrap(), None);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn file_store_replaces_the_file_whole() {
        let path = std::env::temp_dir().join(format!("quiz_swap_{}.json", uuid::Uuid::new_v4()));
        let store = FileStore::new(&path);
        append_result(&store, RECORDS_KEY, &result("Ada", 70)).await.unwrap();
        append_result(&store, LEADERBOARD_KEY, &result("Ada", 70)).await.unwrap();

        assert!(!store.staging_path().exists());
        let on_disk: HashMap<String, String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.len(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn stale_staging_file_does_not_affect_reads() {
        let path = std::env::temp_dir().join(format!("quiz_stale_{}.json", uuid::Uuid::new_v4()));
        let store = FileStore::new(&path);
        append_result(&store, RECORDS_KEY, &result("Ada", 70)).await.unwrap();
        std::fs::write(store.staging_path(), "{\"records\": \"[trunc").unwrap();

        assert_eq!(load_results(&store, RECORDS_KEY).await.unwrap(), vec![result("Ada", 70)]);
        append_result(&store, LEADERBOARD_KEY, &result("Ada", 70)).await.unwrap();
        assert_eq!(load_results(&store, RECORDS_KEY).await.unwrap().len(), 1);
        assert!(!store.staging_path().exists());
        let _ = std::fs::remove_file(&path);
    }
}
