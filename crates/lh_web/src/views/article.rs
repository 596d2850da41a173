use lh_core::Article;
use lh_newsapi::Resolution;

use super::card::image;
use super::html::{escape, format_date, paragraphs};

fn original_link(article: &Article) -> String {
    match article.url.as_deref() {
        Some(url) if url != "#" && !url.trim().is_empty() => format!(
            r#"<a class="read-original" href="{}" rel="noopener noreferrer" target="_blank">Read Original</a>"#,
            escape(url)
        ),
        _ => String::new(),
    }
}

pub fn render(resolution: &Resolution) -> String {
    let article = &resolution.article;
    let tier = serde_json::to_value(resolution.tier)
        .ok()
        .and_then(|value| value.as_str().map(String::from))
        .unwrap_or_default();
    let author = article
        .author
        .as_deref()
        .map(|author| format!(r#" • <span class="author">By {}</span>"#, escape(author)))
        .unwrap_or_default();

    format!(
        r#"<main class="article-page" data-match-tier="{tier}">
  <a class="back" href="/">← Back to News</a>
  <article>
    <div class="meta"><span class="source">{source}</span> • <time>{date}</time>{author}</div>
    <h1>{title}</h1>
    {image}
    <p class="lead">{description}</p>
    <div class="content">
{content}
    </div>
    {original}
  </article>
</main>"#,
        tier = tier,
        source = escape(article.source_name()),
        date = format_date(article.published_at),
        author = author,
        title = escape(&article.title),
        image = image(article, "article-image"),
        description = escape(&article.description),
        content = paragraphs(&article.content),
        original = original_link(article),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_newsapi::resolver::mock_resolution;
    use lh_newsapi::MatchTier;
    use scraper::{Html, Selector};

    #[test]
    fn test_renders_resolved_article() {
        let resolution = mock_resolution("india-launches-new-space-mission-to-study-climate-change");
        let doc = Html::parse_fragment(&render(&resolution));

        let h1 = Selector::parse("h1").unwrap();
        let title: String = doc.select(&h1).next().unwrap().text().collect();
        assert_eq!(title, "India Launches New Space Mission to Study Climate Change");

        let main = Selector::parse("main").unwrap();
        let tier = doc.select(&main).next().unwrap().value().attr("data-match-tier");
        assert_eq!(tier, Some("mock_exact"));
    }

    #[test]
    fn test_mock_links_are_not_offered() {
        let resolution = mock_resolution("anything");
        assert_eq!(resolution.tier, MatchTier::MockDefault);
        assert!(!render(&resolution).contains("Read Original"));
    }

    #[test]
    fn test_live_articles_link_to_original() {
        let mut resolution = mock_resolution("anything");
        resolution.article.url = Some("https://example.com/story?a=1&b=2".to_string());
        let html = render(&resolution);
        assert!(html.contains(r#"href="https://example.com/story?a=1&amp;b=2""#));
    }

    #[test]
    fn test_content_is_split_into_paragraphs() {
        let mut resolution = mock_resolution("anything");
        resolution.article.content = "First.\n\nSecond.".to_string();
        let doc = Html::parse_fragment(&render(&resolution));
        let p = Selector::parse(".content p").unwrap();
        assert_eq!(doc.select(&p).count(), 2);
    }
}
