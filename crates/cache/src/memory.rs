//! In-memory cache store.

use crate::error::CacheResult;
use crate::store::CacheStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// HashMap-backed store. Nothing survives a restart; used for tests and
/// throwaway deployments.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CacheResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> CacheResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}
