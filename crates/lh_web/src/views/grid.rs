use lh_core::Article;

use super::card;
use super::html::{escape, plural};

/// Grids longer than this get a "Load More Articles" control.
pub const LOAD_MORE_THRESHOLD: usize = 8;

pub fn render(articles: &[Article], title: &str, featured: bool) -> String {
    let cards = articles
        .iter()
        .enumerate()
        .map(|(index, article)| card::render(article, featured && index == 0))
        .collect::<Vec<_>>()
        .join("\n");

    let load_more = if articles.len() > LOAD_MORE_THRESHOLD {
        r#"<div class="load-more"><button type="button">Load More Articles</button></div>"#
    } else {
        ""
    };

    format!(
        r#"<section class="news-grid">
  <div class="grid-heading"><h2>{title}</h2><span class="count">{count}</span></div>
  <div class="cards">
{cards}
  </div>
  {load_more}
</section>"#,
        title = escape(title),
        count = plural(articles.len(), "Article", "Articles"),
        cards = cards,
        load_more = load_more,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_core::mock::mock_articles;
    use scraper::{Html, Selector};

    fn many(n: usize) -> Vec<Article> {
        mock_articles().into_iter().cycle().take(n).collect()
    }

    #[test]
    fn test_count_badge() {
        let one = Html::parse_fragment(&render(&many(1), "Latest News", false));
        let count = Selector::parse(".count").unwrap();
        let text: String = one.select(&count).next().unwrap().text().collect();
        assert_eq!(text, "1 Article");

        let three = render(&many(3), "Latest News", false);
        assert!(three.contains("3 Articles"));
    }

    #[test]
    fn test_load_more_only_past_eight() {
        assert!(!render(&many(8), "Latest News", false).contains("Load More Articles"));
        assert!(render(&many(9), "Latest News", false).contains("Load More Articles"));
    }

    #[test]
    fn test_featured_grid_features_first_card_only() {
        let doc = Html::parse_fragment(&render(&many(3), "Latest News", true));
        let featured = Selector::parse("article.featured").unwrap();
        let cards = Selector::parse("article.news-card").unwrap();
        assert_eq!(doc.select(&featured).count(), 1);
        assert_eq!(doc.select(&cards).count(), 3);
    }

    #[test]
    fn test_cards_link_to_slug_paths() {
        let articles = many(1);
        let doc = Html::parse_fragment(&render(&articles, "Latest News", false));
        let link = Selector::parse("article a").unwrap();
        let href = doc.select(&link).next().unwrap().value().attr("href").unwrap();
        assert_eq!(href, format!("/article/{}", articles[0].slug()));
    }

    #[test]
    fn test_titles_are_escaped() {
        let mut articles = many(1);
        articles[0].title = "<script>alert(1)</script>".to_string();
        let html = render(&articles, "Latest News", false);
        assert!(!html.contains("<script>"));
    }
}
