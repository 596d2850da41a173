use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slug::slugify;

/// Source name shown when an article carries none.
pub const DEFAULT_SOURCE_NAME: &str = "LiveHindustan";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ArticleSource {
    pub fn named(name: &str) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
        }
    }
}

/// An article as exposed to the views. Title, description and content are
/// never empty and never the upstream removal sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Article {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    pub fn source_name(&self) -> &str {
        self.source
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_SOURCE_NAME)
    }

    /// Path of the detail page for this article.
    pub fn path(&self) -> String {
        format!("/article/{}", self.slug())
    }
}

/// An article exactly as the headlines API returns it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<Article> for RawArticle {
    fn from(article: Article) -> Self {
        Self {
            title: Some(article.title),
            description: Some(article.description),
            content: Some(article.content),
            published_at: article.published_at.map(|at| at.to_rfc3339()),
            author: article.author,
            source: Some(article.source),
            url_to_image: article.url_to_image,
            url: article.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            id: slugify(title),
            title: title.to_string(),
            description: "desc".to_string(),
            content: "content".to_string(),
            published_at: None,
            author: None,
            source: ArticleSource::default(),
            url_to_image: None,
            url: None,
        }
    }

    #[test]
    fn test_article_path_uses_slug() {
        let article = article("Breaking: Major Policy!!");
        assert_eq!(article.path(), "/article/breaking-major-policy");
    }

    #[test]
    fn test_source_name_falls_back() {
        let mut article = article("Title");
        assert_eq!(article.source_name(), DEFAULT_SOURCE_NAME);
        article.source = ArticleSource::named("Reuters");
        assert_eq!(article.source_name(), "Reuters");
    }

    #[test]
    fn test_raw_article_tolerates_nulls() {
        let raw: RawArticle = serde_json::from_str(
            r#"{"source":null,"author":null,"title":"Headline","description":null,
                "url":"https://example.com/a","urlToImage":null,
                "publishedAt":"2024-05-01T10:00:00Z","content":"[Removed]"}"#,
        )
        .unwrap();
        assert_eq!(raw.title.as_deref(), Some("Headline"));
        assert!(raw.source.is_none());
        assert_eq!(raw.content.as_deref(), Some("[Removed]"));
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let mut article = article("Title");
        article.url_to_image = Some("https://img".to_string());
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["urlToImage"], "https://img");
        assert!(json.get("publishedAt").is_some());
    }
}
