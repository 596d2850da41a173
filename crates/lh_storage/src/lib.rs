use async_trait::async_trait;
use lh_core::{ArticleCache, Error, Result};
use std::sync::Arc;
use tracing::info;

pub mod backends;

pub use backends::*;

#[async_trait]
pub trait CacheBackend: ArticleCache {
    fn name() -> &'static str
    where
        Self: Sized;

    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// Build the cache backend named `kind`.
pub async fn create_cache(kind: &str) -> Result<Arc<dyn ArticleCache>> {
    match kind {
        "memory" => {
            let cache = <MemoryCache as CacheBackend>::new().await?;
            info!("💾 Article cache ready (using {})", MemoryCache::name());
            Ok(Arc::new(cache))
        }
        other => Err(Error::Cache(format!("unknown cache backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_cache, CacheBackend};
}
