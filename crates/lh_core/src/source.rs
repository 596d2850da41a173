use async_trait::async_trait;

use crate::category::Category;
use crate::types::RawArticle;
use crate::Result;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Query for the top-headlines endpoint. `category: None` asks for every
/// category at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub country: Option<String>,
    pub category: Option<Category>,
    pub page_size: u32,
}

impl HeadlinesQuery {
    pub fn category(category: Category, page_size: u32) -> Self {
        Self {
            country: None,
            category: Some(category),
            page_size,
        }
    }

    /// Every category, for looking an article up by slug.
    pub fn broad(page_size: u32) -> Self {
        Self {
            country: None,
            category: None,
            page_size,
        }
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub page_size: u32,
}

/// A remote source of headlines.
///
/// Implementations report every failure as an error; deciding whether to fall
/// back to mock data is the caller's business.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Fetch top headlines, unnormalized.
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Vec<RawArticle>>;

    /// Full-text search over all articles, newest first.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawArticle>>;
}
