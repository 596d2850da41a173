use lh_core::mock::shuffled_mock_articles;
use lh_core::normalize;
use lh_core::{
    Article, Category, Error, HeadlinesQuery, NewsSource, Result, SearchQuery, DEFAULT_PAGE_SIZE,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Where a list of headlines came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedOrigin {
    Live,
    Mock,
}

#[derive(Debug, Clone, Serialize)]
pub struct Headlines {
    pub articles: Vec<Article>,
    pub origin: FeedOrigin,
}

impl Headlines {
    pub fn live(articles: Vec<Article>) -> Self {
        Self {
            articles,
            origin: FeedOrigin::Live,
        }
    }

    /// The mock set, freshly shuffled.
    pub fn mock() -> Self {
        Self {
            articles: shuffled_mock_articles(&mut rand::rng()),
            origin: FeedOrigin::Mock,
        }
    }

    pub fn is_mock(&self) -> bool {
        self.origin == FeedOrigin::Mock
    }
}

/// Fetches and normalizes headlines for the views.
///
/// The `try_*` methods surface every failure. The others never fail: listings
/// fall back to the mock set, search falls back to nothing.
#[derive(Clone)]
pub struct NewsDesk {
    source: Arc<dyn NewsSource>,
}

impl NewsDesk {
    pub fn new(source: Arc<dyn NewsSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> Arc<dyn NewsSource> {
        self.source.clone()
    }

    pub async fn try_get_all_news(&self, category: Category, page_size: u32) -> Result<Vec<Article>> {
        info!("📰 Fetching LIVE {} news from {}...", category, self.source.name());
        let raw = self
            .source
            .top_headlines(&HeadlinesQuery::category(category, page_size))
            .await?;
        let articles = normalize::listing(raw);
        if articles.is_empty() {
            return Err(Error::EmptyResult);
        }
        info!("✅ Fresh news loaded: {} articles", articles.len());
        Ok(articles)
    }

    pub async fn get_all_news(&self, category: Category, page_size: u32) -> Headlines {
        match self.try_get_all_news(category, page_size).await {
            Ok(articles) => Headlines::live(articles),
            Err(e) => {
                error!("❌ Error fetching news: {}", e);
                warn!("📰 Using mock data as fallback");
                Headlines::mock()
            }
        }
    }

    pub async fn get_news_by_category(&self, category: Category, page_size: u32) -> Headlines {
        self.get_all_news(category, page_size).await
    }

    /// Same as loading the general feed with the default page size.
    pub async fn force_refresh_news(&self) -> Headlines {
        info!("🔄 Manual refresh triggered");
        self.get_all_news(Category::General, DEFAULT_PAGE_SIZE).await
    }

    /// Top headlines across categories. An empty live answer is returned as
    /// is; a failure returns at most `page_size` mock articles.
    pub async fn get_top_headlines(&self, country: &str, page_size: u32) -> Headlines {
        let query = HeadlinesQuery::broad(page_size).with_country(country);
        match self.source.top_headlines(&query).await {
            Ok(raw) => Headlines::live(normalize::listing(raw)),
            Err(e) => {
                error!("❌ Error fetching top headlines: {}", e);
                let mut headlines = Headlines::mock();
                headlines.articles.truncate(page_size as usize);
                headlines
            }
        }
    }

    pub async fn try_search_news(&self, query: &str, page_size: u32) -> Result<Vec<Article>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let raw = self
            .source
            .search(&SearchQuery {
                query: query.to_string(),
                page_size,
            })
            .await?;
        Ok(normalize::search_results(raw))
    }

    pub async fn search_news(&self, query: &str, page_size: u32) -> Vec<Article> {
        match self.try_search_news(query, page_size).await {
            Ok(articles) => articles,
            Err(e) => {
                error!("❌ Error searching news: {}", e);
                Vec::new()
            }
        }
    }
}
