//! In-process [`NewsSource`] for tests.

use async_trait::async_trait;
use lh_core::{Error, HeadlinesQuery, NewsSource, RawArticle, Result, SearchQuery};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Reply {
    Articles(Vec<RawArticle>),
    Status(u16),
    Api(String),
}

/// Answers every request with the same canned reply and counts calls.
#[derive(Debug)]
pub struct FakeSource {
    reply: Reply,
    calls: AtomicUsize,
    queries: Mutex<Vec<HeadlinesQuery>>,
}

impl FakeSource {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(articles: Vec<RawArticle>) -> Self {
        Self::with_reply(Reply::Articles(articles))
    }

    /// Titles become articles with a description and content.
    pub fn with_titles(titles: &[&str]) -> Self {
        Self::returning(titles.iter().map(|title| raw_article(title)).collect())
    }

    pub fn failing_status(status: u16) -> Self {
        Self::with_reply(Reply::Status(status))
    }

    pub fn failing_api(message: &str) -> Self {
        Self::with_reply(Reply::Api(message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Headline queries received so far.
    pub fn headline_queries(&self) -> Vec<HeadlinesQuery> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }

    fn answer(&self) -> Result<Vec<RawArticle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Articles(articles) => Ok(articles.clone()),
            Reply::Status(status) => Err(Error::Status(*status)),
            Reply::Api(message) => Err(Error::Api(message.clone())),
        }
    }
}

#[async_trait]
impl NewsSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Vec<RawArticle>> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        self.answer()
    }

    async fn search(&self, _query: &SearchQuery) -> Result<Vec<RawArticle>> {
        self.answer()
    }
}

pub fn raw_article(title: &str) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        description: Some(format!("About {}", title)),
        content: Some(format!("{} in full.", title)),
        published_at: Some("2024-05-01T10:00:00Z".to_string()),
        source: Some(lh_core::ArticleSource::named("Wire")),
        url: Some("https://example.com/story".to_string()),
        ..Default::default()
    }
}
