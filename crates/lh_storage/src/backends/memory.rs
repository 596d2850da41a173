use async_trait::async_trait;
use lh_core::{Article, ArticleCache, Result, CURRENT_ARTICLES_SLOT};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::CacheBackend;

/// Named slots of serialized data, the way a browser session stores them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    pub fn set(&mut self, slot: &str, value: String) {
        self.slots.insert(slot.to_string(), value);
    }

    pub fn remove(&mut self, slot: &str) {
        self.slots.remove(slot);
    }
}

/// Process-wide article cache. Clones share the same store.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<MemoryStore>>,
    slot: String,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::with_slot(CURRENT_ARTICLES_SLOT)
    }

    pub fn with_slot(slot: &str) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
            slot: slot.to_string(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Raw serialized contents of the slot.
    pub async fn raw(&self) -> Option<String> {
        self.store.read().await.get(&self.slot).map(String::from)
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    fn name() -> &'static str {
        "memory"
    }

    async fn new() -> Result<Self> {
        Ok(MemoryCache::new())
    }
}

#[async_trait]
impl ArticleCache for MemoryCache {
    async fn load(&self) -> Result<Option<Vec<Article>>> {
        let store = self.store.read().await;
        match store.get(&self.slot) {
            Some(raw) => {
                let articles: Vec<Article> = serde_json::from_str(raw)?;
                debug!("📚 Found {} articles in {}", articles.len(), self.slot);
                Ok(Some(articles))
            }
            None => Ok(None),
        }
    }

    async fn store(&self, articles: &[Article]) -> Result<()> {
        let raw = serde_json::to_string(articles)?;
        self.store.write().await.set(&self.slot, raw);
        debug!("💾 Saved {} articles to {}", articles.len(), self.slot);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.store.write().await.remove(&self.slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_core::mock::mock_articles_at;

    #[tokio::test]
    async fn test_empty_cache_loads_none() {
        let cache = MemoryCache::new();
        assert!(cache.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_replaces_wholesale() {
        let cache = MemoryCache::new();
        let articles = mock_articles_at(chrono::Utc::now());

        cache.store(&articles).await.unwrap();
        assert_eq!(cache.load().await.unwrap().unwrap(), articles);

        cache.store(&articles[..1]).await.unwrap();
        let loaded = cache.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, articles[0].title);
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let writer = MemoryCache::new();
        let reader = writer.clone();
        writer.store(&mock_articles_at(chrono::Utc::now())).await.unwrap();
        assert_eq!(reader.load().await.unwrap().unwrap().len(), 3);

        reader.clear().await.unwrap();
        assert!(writer.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_slot_holds_serialized_json() {
        let cache = MemoryCache::new();
        cache.store(&mock_articles_at(chrono::Utc::now())).await.unwrap();
        assert_eq!(cache.slot(), "currentNewsArticles");
        let raw = cache.raw().await.unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"urlToImage\""));
    }

    #[tokio::test]
    async fn test_corrupt_slot_is_an_error() {
        let cache = MemoryCache::new();
        cache.store.write().await.set(CURRENT_ARTICLES_SLOT, "not json".to_string());
        assert!(matches!(
            cache.load().await,
            Err(lh_core::Error::Serialization(_))
        ));
    }
}
