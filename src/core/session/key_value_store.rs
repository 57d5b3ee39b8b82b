use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use async_trait::async_trait;
use log::debug;
use mockall::automock;
use tokio::{fs, sync::RwLock};

/// Local persistent storage backing the session token.
///
/// Implementations are picked per deployment target; the rest of the crate
/// only sees this trait.
#[automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;
    async fn put(&self, key: &str, value: String) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

/// Stores each key as `<key>.dat` inside a data directory.
///
/// Concurrent writers of one key each stage their own file; the last rename wins.
#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn get_file_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.dat"))
    }
}

#[async_trait]
impl KeyValueStore for FileSystemStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let path = self.get_file_path(key);

        if !fs::try_exists(&path).await? {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).await?;
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Ok(None);
        }

        Ok(Some(trimmed.to_string()))
    }

    async fn put(&self, key: &str, value: String) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path = self.get_file_path(key);
        let seq = STAGING_SEQ.fetch_add(1, Ordering::Relaxed);
        let staging = self
            .data_dir
            .join(format!("{key}.dat.{}.{seq}.tmp", std::process::id()));

        // readers never observe a half written value
        fs::write(&staging, value.as_bytes()).await?;

        if let Err(e) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(Box::new(e));
        }

        debug!("stored {}", path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path = self.get_file_path(key);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Box::new(e)),
        }
    }
}

/// Process-local store, used where nothing must outlive the process.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
