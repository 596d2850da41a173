use std::ops::Range;

use chrono::{DateTime, Local};
use lh_core::{Article, ArticleCache, Category, Error, Result, DEFAULT_PAGE_SIZE};
use lh_newsapi::{FeedOrigin, Headlines, NewsDesk};
use tracing::{error, info, warn};

use super::html::escape;
use super::{category_nav, grid, hero};

pub const LOAD_ERROR: &str = "Failed to load news. Please try refreshing the page.";

/// Articles 2-9 go to "Latest News", 10-13 to "More News".
const LATEST: Range<usize> = 1..9;
const MORE: Range<usize> = 9..13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Success,
    Error(String),
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Idle => "idle",
            ViewState::Loading => "loading",
            ViewState::Success => "success",
            ViewState::Error(_) => "error",
        }
    }
}

/// The home page: the current article list and where loading it got to.
///
/// Every load or refresh goes back through `Loading` and ends in `Success` or
/// `Error`. A failed load keeps whatever articles an earlier load produced.
#[derive(Debug, Clone)]
pub struct HomeView {
    state: ViewState,
    articles: Vec<Article>,
    category: Category,
    origin: Option<FeedOrigin>,
    last_updated: Option<DateTime<Local>>,
}

impl HomeView {
    pub fn new(category: Category) -> Self {
        Self {
            state: ViewState::Idle,
            articles: Vec::new(),
            category,
            origin: None,
            last_updated: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn origin(&self) -> Option<FeedOrigin> {
        self.origin
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn begin_loading(&mut self, category: Category) {
        self.category = category;
        self.state = ViewState::Loading;
    }

    /// Apply the outcome of a fetch. Returns true when new articles landed.
    pub fn finish(&mut self, outcome: Result<Headlines>) -> bool {
        let outcome = outcome.and_then(|headlines| {
            if headlines.articles.is_empty() {
                Err(Error::EmptyResult)
            } else {
                Ok(headlines)
            }
        });

        match outcome {
            Ok(headlines) => {
                self.articles = headlines.articles;
                self.origin = Some(headlines.origin);
                self.last_updated = Some(Local::now());
                self.state = ViewState::Success;
                true
            }
            Err(e) => {
                error!("❌ Error loading news: {}", e);
                self.state = ViewState::Error(LOAD_ERROR.to_string());
                false
            }
        }
    }

    /// Load `category`. With `mock_fallback` off a failed fetch ends in the
    /// error state instead of showing the mock set.
    pub async fn load(
        &mut self,
        desk: &NewsDesk,
        cache: &dyn ArticleCache,
        category: Category,
        mock_fallback: bool,
    ) {
        self.begin_loading(category);
        info!("📰 Loading {} news...", category);

        let outcome = if mock_fallback {
            Ok(desk.get_all_news(category, DEFAULT_PAGE_SIZE).await)
        } else {
            desk.try_get_all_news(category, DEFAULT_PAGE_SIZE)
                .await
                .map(Headlines::live)
        };

        if self.finish(outcome) {
            info!("✅ Loaded {} {} articles", self.articles.len(), category);
            self.save(cache).await;
        }
    }

    /// Reload the general feed. Refreshing always falls back to the mock set.
    pub async fn refresh(&mut self, desk: &NewsDesk, cache: &dyn ArticleCache) {
        info!("🔄 Manual refresh requested");
        self.begin_loading(Category::General);
        let headlines = desk.force_refresh_news().await;
        if self.finish(Ok(headlines)) {
            self.save(cache).await;
        }
    }

    async fn save(&self, cache: &dyn ArticleCache) {
        match cache.store(&self.articles).await {
            Ok(()) => info!("💾 Articles saved for the article page"),
            Err(e) => warn!("⚠️ Could not save articles: {}", e),
        }
    }

    fn status_bar(&self) -> String {
        let updated = self
            .last_updated
            .map(|at| format!(r#"<span class="updated">Updated: {}</span>"#, at.format("%-I:%M:%S %p")))
            .unwrap_or_default();
        let refresh = if self.state == ViewState::Loading {
            "Refreshing..."
        } else {
            "Refresh News"
        };

        format!(
            r#"<div class="status-bar">
  <span class="summary">📰 Live News • {} articles</span>{}
  <a class="refresh" href="/refresh">🔄 {}</a>
</div>"#,
            self.articles.len(),
            updated,
            refresh
        )
    }

    fn retry_href(&self) -> String {
        format!("/?category={}", self.category.as_str())
    }

    fn content(&self) -> String {
        match &self.state {
            ViewState::Loading if self.articles.is_empty() => r#"<div class="loading">
  <div class="spinner"></div>
  <p>Loading latest news...</p>
</div>"#
                .to_string(),
            ViewState::Loading => String::new(),
            ViewState::Error(message) => format!(
                r#"<div class="error">
  <div class="error-title">⚠️ Unable to Load News</div>
  <p>{}</p>
  <a class="retry" href="{}">Try Again</a>
</div>"#,
                escape(message),
                self.retry_href()
            ),
            ViewState::Success if !self.articles.is_empty() => {
                let mut sections = vec![
                    hero::render(self.articles.first()),
                    grid::render(slice(&self.articles, LATEST), "Latest News", false),
                ];
                if self.articles.len() > LATEST.end {
                    sections.push(grid::render(slice(&self.articles, MORE), "More News", false));
                }
                sections.join("\n")
            }
            ViewState::Idle | ViewState::Success => format!(
                r#"<div class="empty">
  <div class="icon">📰</div>
  <h2>No News Available</h2>
  <p>We couldn't fetch any news articles at the moment.</p>
  <a class="retry" href="{}">Try Loading Again</a>
</div>"#,
                self.retry_href()
            ),
        }
    }

    /// Everything between the header and the footer.
    pub fn render(&self) -> String {
        let origin = match self.origin {
            Some(FeedOrigin::Live) => "live",
            Some(FeedOrigin::Mock) => "mock",
            None => "none",
        };
        format!(
            r#"{nav}
<main data-state="{state}" data-origin="{origin}">
{status}
{content}
</main>"#,
            nav = category_nav::render(self.category),
            state = self.state.name(),
            origin = origin,
            status = self.status_bar(),
            content = self.content(),
        )
    }
}

fn slice(articles: &[Article], range: Range<usize>) -> &[Article] {
    let end = range.end.min(articles.len());
    let start = range.start.min(end);
    &articles[start..end]
}
