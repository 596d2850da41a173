use chrono::Utc;
use lh_core::{Article, ArticleSource};

use super::card::image;
use super::html::{escape, format_date};

const TOP_STORIES: [(&str, &str); 4] = [
    ("Breaking: Major Policy Announcement Expected Today", "1 hour ago"),
    ("Sports: National Team Wins Championship", "2 hours ago"),
    ("Technology: New Innovation Revolutionizes Industry", "3 hours ago"),
    ("Entertainment: Blockbuster Movie Breaks Records", "4 hours ago"),
];

const NEWS_IN_NUMBERS: [(&str, &str); 4] = [
    ("24+", "News Categories"),
    ("50+", "Reporters"),
    ("1M+", "Daily Readers"),
    ("15+", "Cities Covered"),
];

/// Shown in the hero slot when there is nothing to feature.
pub fn fallback_article() -> Article {
    let title = "India's Economy Shows Strong Growth in Q3 2024";
    Article {
        id: lh_core::slug::slugify(title),
        title: title.to_string(),
        description: "Latest economic indicators show robust growth across multiple sectors with manufacturing and services leading the way. Government initiatives continue to drive economic recovery.".to_string(),
        content: lh_core::mock::generated_content(title).to_string(),
        published_at: Some(Utc::now()),
        author: None,
        source: ArticleSource::named("Economic Times"),
        url_to_image: Some("https://images.unsplash.com/photo-1584824486539-53bb4646bdbc?auto=format&fit=crop&w=1000&q=80".to_string()),
        url: None,
    }
}

fn sidebar() -> String {
    let stories = TOP_STORIES
        .iter()
        .map(|(title, time)| format!(r#"<li><h3>{}</h3><p>{}</p></li>"#, escape(title), time))
        .collect::<Vec<_>>()
        .join("");
    let numbers = NEWS_IN_NUMBERS
        .iter()
        .map(|(value, label)| format!(r#"<div><strong>{}</strong><span>{}</span></div>"#, value, label))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<aside class="hero-side">
    <h2>Top Stories</h2>
    <ul class="top-stories">{}</ul>
    <div class="numbers"><h3>News in Numbers</h3>{}</div>
  </aside>"#,
        stories, numbers
    )
}

pub fn render(featured: Option<&Article>) -> String {
    let fallback;
    let article = match featured {
        Some(article) => article,
        None => {
            fallback = fallback_article();
            &fallback
        }
    };

    format!(
        r#"<section class="hero">
  <a class="hero-main" href="{href}">
    {image}
    <div class="overlay">
      <span class="badge">Featured</span>
      <h1>{title}</h1>
      <p>{description}</p>
      <div class="meta"><time>{date}</time> • <span class="source">{source}</span></div>
    </div>
  </a>
  {sidebar}
</section>"#,
        href = escape(&article.path()),
        image = image(article, "hero-image"),
        title = escape(&article.title),
        description = escape(&article.description),
        date = format_date(article.published_at),
        source = escape(article.source_name()),
        sidebar = sidebar(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_core::mock::mock_articles;
    use scraper::{Html, Selector};

    #[test]
    fn test_hero_features_given_article() {
        let article = &mock_articles()[1];
        let doc = Html::parse_fragment(&render(Some(article)));
        let h1 = Selector::parse(".hero h1").unwrap();
        let title: String = doc.select(&h1).next().unwrap().text().collect();
        assert_eq!(title, article.title);

        let link = Selector::parse("a.hero-main").unwrap();
        let href = doc.select(&link).next().unwrap().value().attr("href").unwrap();
        assert_eq!(href, article.path());
    }

    #[test]
    fn test_hero_falls_back_when_empty() {
        let html = render(None);
        assert!(html.contains("Economic Times"));
        assert!(html.contains("/article/indias-economy-shows-strong-growth-in-q3-2024"));
    }

    #[test]
    fn test_sidebar_is_static() {
        let html = render(None);
        assert!(html.contains("Top Stories"));
        assert!(html.contains("News in Numbers"));
        assert!(html.contains("Daily Readers"));
    }
}
