use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

/// Name of the slot holding the most recently loaded article list.
pub const CURRENT_ARTICLES_SLOT: &str = "currentNewsArticles";

/// Holds the article list the home page last rendered, so the detail page can
/// find an article again by slug.
///
/// The list is replaced wholesale on every store; there is no expiry.
#[async_trait]
pub trait ArticleCache: Send + Sync {
    /// The last stored list, or `None` if nothing was stored yet.
    async fn load(&self) -> Result<Option<Vec<Article>>>;

    /// Replace the stored list.
    async fn store(&self, articles: &[Article]) -> Result<()>;

    async fn clear(&self) -> Result<()>;
}
