use clap::{Parser, Subcommand};
use lh_core::DEFAULT_PAGE_SIZE;
use lh_newsapi::NewsApiConfig;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "LiveHindustan news site and NewsAPI client", long_about = None)]
pub struct Cli {
    /// NewsAPI key. Without one every command serves mock data.
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,
    #[arg(long, env = "NEWSAPI_BASE_URL", global = true)]
    pub base_url: Option<String>,
    #[arg(long, env = "NEWSAPI_COUNTRY", global = true)]
    pub country: Option<String>,
    /// Request timeout in seconds
    #[arg(long, env = "NEWSAPI_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,
    #[arg(long, default_value = "memory", global = true)]
    pub cache: String,
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the web site
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 3000)]
        port: u16,
        /// Show the error state instead of mock stories when NewsAPI fails
        #[arg(long)]
        no_mock_fallback: bool,
    },
    /// Print the headlines of a category
    Headlines {
        #[arg(long, default_value = "general")]
        category: String,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Print the top headlines of a country
    Top {
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
    Search {
        query: String,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Resolve an article slug and print it as JSON
    Article { slug: String },
    /// Print the slug of a title
    Slug { title: String },
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Cli {
    /// Flags override whatever `config` was loaded with.
    pub fn apply(&self, mut config: NewsApiConfig) -> NewsApiConfig {
        if let Some(key) = given(&self.api_key) {
            config = config.with_api_key(key);
        }
        if let Some(base_url) = given(&self.base_url) {
            config = config.with_base_url(base_url);
        }
        if let Some(country) = given(&self.country) {
            config = config.with_country(country);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from([
            "lh",
            "serve",
            "--port",
            "8080",
            "--no-mock-fallback",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Serve {
                host: "127.0.0.1".to_string(),
                port: 8080,
                no_mock_fallback: true,
            }
        );
    }

    #[test]
    fn test_parse_headlines_defaults() {
        let cli = Cli::try_parse_from(["lh", "headlines"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Headlines {
                category: "general".to_string(),
                page_size: DEFAULT_PAGE_SIZE,
            }
        );
        assert_eq!(cli.cache, "memory");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lh", "search", "monsoon", "--country", "in"]).unwrap();
        assert_eq!(cli.country.as_deref(), Some("in"));
        assert_eq!(
            cli.command,
            Commands::Search {
                query: "monsoon".to_string(),
                page_size: DEFAULT_PAGE_SIZE,
            }
        );
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["lh"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "lh",
            "--api-key",
            "k",
            "--base-url",
            "http://localhost:9999",
            "--timeout-secs",
            "5",
            "top",
        ])
        .unwrap();
        let config = cli.apply(NewsApiConfig::default().with_country("in"));
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.country, "in");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
