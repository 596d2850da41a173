//! Finds an article again from the slug in its URL.
//!
//! The headlines API has no fetch-by-id endpoint, so the slug is matched
//! against the list the home page last showed, or failing that a fresh broad
//! fetch. Matching runs in tiers and the first tier with a hit wins:
//!
//! 1. [`MatchTier::Exact`]: the candidate's slug equals the cleaned input.
//! 2. [`MatchTier::Keyword`]: the title contains any slug word longer than two
//!    characters.
//! 3. [`MatchTier::Prefix`]: the title contains the first three slug words
//!    joined by spaces.
//!
//! Tiers 2 and 3 are lax on purpose and can pick an unrelated article that
//! shares a common word with the slug. When nothing matches, the mock set is
//! consulted and its first article is the last resort.

use lh_core::mock::{first_mock_article, mock_article_by_slug};
use lh_core::normalize::{self, REMOVED};
use lh_core::slug::{clean_slug, slugify};
use lh_core::{Article, ArticleCache, Error, HeadlinesQuery, NewsSource, RawArticle, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Page size of the broad fetch used when the cache is empty.
pub const BROAD_FETCH_PAGE_SIZE: u32 = 50;

const MIN_KEYWORD_LEN: usize = 3;
const PREFIX_WORDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Keyword,
    Prefix,
    MockExact,
    MockDefault,
}

impl MatchTier {
    pub fn is_mock(&self) -> bool {
        matches!(self, MatchTier::MockExact | MatchTier::MockDefault)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub article: Article,
    pub tier: MatchTier,
}

fn usable_title(candidate: &RawArticle) -> Option<&str> {
    candidate
        .title
        .as_deref()
        .filter(|title| !title.trim().is_empty() && *title != REMOVED)
}

/// Rank `candidates` against `slug` and return the winner with its tier.
pub fn find_match<'a>(candidates: &'a [RawArticle], slug: &str) -> Option<(&'a RawArticle, MatchTier)> {
    let cleaned = clean_slug(slug);
    let titled: Vec<(&RawArticle, &str)> = candidates
        .iter()
        .filter_map(|candidate| usable_title(candidate).map(|title| (candidate, title)))
        .collect();

    if let Some((candidate, _)) = titled.iter().find(|(_, title)| slugify(title) == cleaned) {
        return Some((*candidate, MatchTier::Exact));
    }

    let keywords: Vec<&str> = cleaned
        .split('-')
        .filter(|word| word.chars().count() >= MIN_KEYWORD_LEN)
        .collect();
    if let Some((candidate, _)) = titled.iter().find(|(_, title)| {
        let title = title.to_lowercase();
        keywords.iter().any(|word| title.contains(word))
    }) {
        return Some((*candidate, MatchTier::Keyword));
    }

    let prefix = cleaned
        .split('-')
        .take(PREFIX_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    titled
        .iter()
        .find(|(_, title)| title.to_lowercase().contains(&prefix))
        .map(|(candidate, _)| (*candidate, MatchTier::Prefix))
}

/// Mock lookup used when the live candidates yield nothing.
pub fn mock_resolution(slug: &str) -> Resolution {
    match mock_article_by_slug(&clean_slug(slug)) {
        Some(article) => Resolution {
            article,
            tier: MatchTier::MockExact,
        },
        None => Resolution {
            article: first_mock_article(),
            tier: MatchTier::MockDefault,
        },
    }
}

/// Resolves slugs against the session cache. Never writes to the cache.
#[derive(Clone)]
pub struct ArticleResolver {
    source: Arc<dyn NewsSource>,
    cache: Arc<dyn ArticleCache>,
}

impl ArticleResolver {
    pub fn new(source: Arc<dyn NewsSource>, cache: Arc<dyn ArticleCache>) -> Self {
        Self { source, cache }
    }

    async fn candidates(&self) -> Result<Vec<RawArticle>> {
        match self.cache.load().await {
            Ok(Some(articles)) if !articles.is_empty() => {
                info!("📚 Found {} articles in storage", articles.len());
                return Ok(articles.into_iter().map(RawArticle::from).collect());
            }
            Ok(_) => {}
            Err(e) => warn!("⚠️ Cached articles unreadable, fetching fresh ones: {}", e),
        }

        info!("📡 Fetching fresh articles for search...");
        self.source
            .top_headlines(&HeadlinesQuery::broad(BROAD_FETCH_PAGE_SIZE))
            .await
    }

    /// Resolve against live candidates only.
    pub async fn try_resolve(&self, slug: &str) -> Result<Resolution> {
        info!("🔍 Searching for article: {}", slug);
        let candidates = self.candidates().await?;

        let (candidate, tier) =
            find_match(&candidates, slug).ok_or_else(|| Error::NotFound(slug.to_string()))?;
        debug!("matched {:?} at tier {:?}", candidate.title, tier);

        let article =
            normalize::detail(candidate.clone()).ok_or_else(|| Error::NotFound(slug.to_string()))?;
        info!("✅ Found matching article: {}", article.title);
        Ok(Resolution { article, tier })
    }

    /// Resolve `slug`, falling back to the mock set. Always yields an article.
    pub async fn resolve(&self, slug: &str) -> Resolution {
        match self.try_resolve(slug).await {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!("❌ {}; falling back to mock data", e);
                mock_resolution(slug)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{raw_article, FakeSource};
    use lh_core::mock::mock_articles;
    use lh_core::normalize::NO_DESCRIPTION;
    use lh_storage::MemoryCache;

    fn resolver(source: FakeSource, cache: MemoryCache) -> (ArticleResolver, Arc<FakeSource>) {
        let source = Arc::new(source);
        (
            ArticleResolver::new(source.clone(), Arc::new(cache)),
            source,
        )
    }

    fn raws(titles: &[&str]) -> Vec<RawArticle> {
        titles.iter().map(|title| raw_article(title)).collect()
    }

    #[test]
    fn test_exact_tier() {
        let candidates = raws(&["Monsoon arrives early", "Breaking: Major Policy!!"]);
        let (found, tier) = find_match(&candidates, "breaking-major-policy").unwrap();
        assert_eq!(tier, MatchTier::Exact);
        assert_eq!(found.title.as_deref(), Some("Breaking: Major Policy!!"));
    }

    #[test]
    fn test_exact_tier_cleans_input() {
        let candidates = raws(&["Breaking: Major Policy!!"]);
        let (_, tier) = find_match(&candidates, "--Breaking--Major-Policy-").unwrap();
        assert_eq!(tier, MatchTier::Exact);
    }

    #[test]
    fn test_keyword_tier_skips_short_words() {
        let candidates = raws(&["An ox in the road", "Monsoon arrives early"]);
        let (found, tier) = find_match(&candidates, "ox-in-monsoon").unwrap();
        assert_eq!(tier, MatchTier::Keyword);
        assert_eq!(found.title.as_deref(), Some("Monsoon arrives early"));
    }

    #[test]
    fn test_keyword_tier_false_positive_on_common_word() {
        let candidates = raws(&["The budget debate", "Champions win the final"]);
        let (found, tier) = find_match(&candidates, "the-final-score").unwrap();
        assert_eq!(tier, MatchTier::Keyword);
        assert_eq!(found.title.as_deref(), Some("The budget debate"));
    }

    #[test]
    fn test_prefix_tier() {
        let candidates = raws(&["Top story", "Go to a gig"]);
        let (found, tier) = find_match(&candidates, "go-to-a").unwrap();
        assert_eq!(tier, MatchTier::Prefix);
        assert_eq!(found.title.as_deref(), Some("Go to a gig"));
    }

    #[test]
    fn test_empty_slug_takes_first_candidate_by_prefix() {
        let candidates = raws(&["First", "Second"]);
        let (found, tier) = find_match(&candidates, "---").unwrap();
        assert_eq!(tier, MatchTier::Prefix);
        assert_eq!(found.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_untitled_candidates_are_skipped() {
        let mut candidates = vec![RawArticle::default(), raw_article("[Removed]")];
        assert!(find_match(&candidates, "removed").is_none());
        candidates.push(raw_article("Removed from office"));
        let (_, tier) = find_match(&candidates, "removed").unwrap();
        assert_eq!(tier, MatchTier::Keyword);
    }

    #[test]
    fn test_no_match() {
        let candidates = raws(&["Monsoon arrives early"]);
        assert!(find_match(&candidates, "xyz-totally-unknown-topic").is_none());
    }

    #[test]
    fn test_own_slug_resolves_to_own_title() {
        let titles = [
            "Markets rally on rate cut hopes",
            "Monsoon arrives early in Kerala",
            "Breaking: Major Policy!!",
            "COVID-19: what we know",
        ];
        let candidates = raws(&titles);
        for title in titles {
            let (found, tier) = find_match(&candidates, &slugify(title)).unwrap();
            assert_eq!(tier, MatchTier::Exact);
            assert_eq!(found.title.as_deref(), Some(title));
        }
    }

    #[tokio::test]
    async fn test_prefers_cache_over_fetch() {
        let cache = MemoryCache::new();
        cache.store(&mock_articles()).await.unwrap();
        let (resolver, source) = resolver(FakeSource::with_titles(&["Other"]), cache);

        let resolution = resolver
            .resolve("india-launches-new-space-mission-to-study-climate-change")
            .await;

        assert_eq!(resolution.tier, MatchTier::Exact);
        assert_eq!(
            resolution.article.title,
            "India Launches New Space Mission to Study Climate Change"
        );
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_mock_set_resolves_isro_article() {
        let mock_raws: Vec<RawArticle> = mock_articles().into_iter().map(RawArticle::from).collect();
        let (resolver, _) = resolver(FakeSource::returning(mock_raws), MemoryCache::new());

        let resolution = resolver
            .resolve("india-launches-new-space-mission-to-study-climate-change")
            .await;

        assert_eq!(resolution.tier, MatchTier::Exact);
        assert_eq!(resolution.article.source_name(), "Space & Technology Daily");
    }

    #[tokio::test]
    async fn test_empty_cache_triggers_broad_fetch() {
        let cache = MemoryCache::new();
        cache.store(&[]).await.unwrap();
        let (resolver, source) = resolver(FakeSource::with_titles(&["Monsoon arrives early"]), cache);

        let resolution = resolver.resolve("monsoon-arrives-early").await;

        assert_eq!(resolution.tier, MatchTier::Exact);
        assert_eq!(
            source.headline_queries(),
            vec![HeadlinesQuery::broad(BROAD_FETCH_PAGE_SIZE)]
        );
    }

    #[tokio::test]
    async fn test_unknown_slug_with_failing_fetch_returns_first_mock() {
        let (resolver, _) = resolver(FakeSource::failing_status(500), MemoryCache::new());

        let resolution = resolver.resolve("xyz-totally-unknown-topic").await;

        assert_eq!(resolution.tier, MatchTier::MockDefault);
        assert_eq!(resolution.article.title, mock_articles()[0].title);
    }

    #[tokio::test]
    async fn test_unmatched_slug_falls_back_to_mock_exact() {
        let (resolver, _) = resolver(FakeSource::with_titles(&["Monsoon"]), MemoryCache::new());

        let resolution = resolver
            .resolve("startup-ecosystem-in-bangalore-reaches-new-heights")
            .await;

        assert_eq!(resolution.tier, MatchTier::MockExact);
        assert!(resolution.tier.is_mock());
        assert_eq!(resolution.article.source_name(), "Startup India");
    }

    #[tokio::test]
    async fn test_resolved_article_is_enhanced() {
        let mut bare = raw_article("Athlete breaks national record");
        bare.description = None;
        bare.content = Some(REMOVED.to_string());
        let (resolver, _) = resolver(FakeSource::returning(vec![bare]), MemoryCache::new());

        let resolution = resolver.resolve("athlete-breaks-national-record").await;

        assert_eq!(resolution.article.description, NO_DESCRIPTION);
        assert!(resolution.article.content.starts_with("Indian athletes continue"));
    }

    #[tokio::test]
    async fn test_resolve_does_not_touch_cache() {
        let cache = MemoryCache::new();
        let (resolver, _) = resolver(FakeSource::with_titles(&["Monsoon"]), cache.clone());
        resolver.resolve("monsoon").await;
        assert!(cache.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_try_resolve_reports_not_found() {
        let (resolver, _) = resolver(FakeSource::with_titles(&["Monsoon"]), MemoryCache::new());
        assert!(matches!(
            resolver.try_resolve("xyz-qqq").await,
            Err(Error::NotFound(_))
        ));
    }
}
