use lh_core::{ArticleCache, NewsSource};
use lh_newsapi::{ArticleResolver, NewsDesk};
use std::sync::Arc;

pub struct AppState {
    pub desk: NewsDesk,
    pub resolver: ArticleResolver,
    pub cache: Arc<dyn ArticleCache>,
    /// Serve the mock set when a live listing fails.
    pub mock_fallback: bool,
    /// Country for the top-headlines endpoint when the request names none.
    pub country: String,
}

impl AppState {
    pub fn new(source: Arc<dyn NewsSource>, cache: Arc<dyn ArticleCache>, country: &str) -> Self {
        Self {
            desk: NewsDesk::new(source.clone()),
            resolver: ArticleResolver::new(source, cache.clone()),
            cache,
            mock_fallback: true,
            country: country.to_string(),
        }
    }

    pub fn with_mock_fallback(mut self, enabled: bool) -> Self {
        self.mock_fallback = enabled;
        self
    }
}
