use std::fmt;
use std::time::Duration;

use lh_core::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_COUNTRY: &str = "us";

pub const ENV_BASE_URL: &str = "NEWSAPI_BASE_URL";
pub const ENV_API_KEY: &str = "NEWSAPI_KEY";
pub const ENV_COUNTRY: &str = "NEWSAPI_COUNTRY";
pub const ENV_TIMEOUT_SECS: &str = "NEWSAPI_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct NewsApiConfig {
    pub base_url: String,
    /// Without a key every live request fails and callers get mock data.
    pub api_key: Option<String>,
    pub country: String,
    pub timeout: Option<Duration>,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            country: DEFAULT_COUNTRY.to_string(),
            timeout: None,
        }
    }
}

impl NewsApiConfig {
    /// Read the configuration from the process environment, after loading a
    /// `.env` file if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be a number of seconds, got {:?}", ENV_TIMEOUT_SECS, raw))
            })?)),
            None => None,
        };

        Ok(Self {
            base_url: non_empty(ENV_BASE_URL).unwrap_or(defaults.base_url),
            api_key: non_empty(ENV_API_KEY),
            country: non_empty(ENV_COUNTRY).unwrap_or(defaults.country),
            timeout,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = country.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for NewsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("country", &self.country)
            .field("timeout", &self.timeout)
            .finish()
    }
}
