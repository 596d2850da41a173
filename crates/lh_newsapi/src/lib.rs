pub mod client;
pub mod config;
pub mod desk;
pub mod resolver;

#[cfg(any(test, feature = "test-util"))]
pub mod fake;

pub use client::NewsApiClient;
pub use config::NewsApiConfig;
pub use desk::{FeedOrigin, Headlines, NewsDesk};
pub use resolver::{ArticleResolver, MatchTier, Resolution};

pub mod prelude {
    pub use super::{ArticleResolver, Headlines, NewsApiClient, NewsApiConfig, NewsDesk};
    pub use lh_core::{Article, Category, Error, Result};
}
