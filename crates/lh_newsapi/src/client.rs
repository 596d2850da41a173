use async_trait::async_trait;
use lh_core::{Error, HeadlinesQuery, NewsSource, RawArticle, Result, SearchQuery};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};
use url::Url;

use crate::config::NewsApiConfig;

const USER_AGENT: &str = concat!("lh-newsdesk/", env!("CARGO_PKG_VERSION"));

/// Envelope of every headlines API response.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Option<Vec<RawArticle>>,
}

/// Client for the NewsAPI v2 `top-headlines` and `everything` endpoints.
pub struct NewsApiClient {
    client: Client,
    config: NewsApiConfig,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &NewsApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("no API key configured".to_string()))?;

        let mut url = Url::parse(&format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        ))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("apiKey", api_key);
        }
        Ok(url)
    }

    async fn fetch_articles(&self, url: Url) -> Result<Vec<RawArticle>> {
        debug!("GET {}{}", url.origin().ascii_serialization(), url.path());
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body: ApiResponse = response.json().await?;
        if body.status == "error" {
            return Err(Error::Api(
                body.message
                    .or(body.code)
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        Ok(body.articles.unwrap_or_default())
    }
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Vec<RawArticle>> {
        let country = query
            .country
            .clone()
            .unwrap_or_else(|| self.config.country.clone());
        let mut params = vec![("country", country)];
        if let Some(category) = query.category {
            params.push(("category", category.as_str().to_string()));
        }
        params.push(("pageSize", query.page_size.to_string()));

        let url = self.endpoint("top-headlines", &params)?;
        let articles = self.fetch_articles(url).await?;
        info!("📰 {} returned {} headlines", self.name(), articles.len());
        Ok(articles)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawArticle>> {
        let params = [
            ("q", query.query.clone()),
            ("pageSize", query.page_size.to_string()),
            ("sortBy", "publishedAt".to_string()),
        ];
        let url = self.endpoint("everything", &params)?;
        let articles = self.fetch_articles(url).await?;
        info!("🔍 {} returned {} results for {:?}", self.name(), articles.len(), query.query);
        Ok(articles)
    }
}
