use lh_core::Article;

use super::grid;
use super::html::escape;

pub fn render(query: &str, results: &[Article]) -> String {
    let query = query.trim();
    let results = if query.is_empty() {
        r#"<p class="hint">Type something to search the news.</p>"#.to_string()
    } else if results.is_empty() {
        format!(r#"<p class="no-results">No results for "{}".</p>"#, escape(query))
    } else {
        grid::render(results, &format!("Results for \"{}\"", query), true)
    };

    format!(
        r#"<main class="search-page">
  <form action="/search" method="get" class="search-form">
    <input type="search" name="q" value="{value}" placeholder="Search news">
    <button type="submit">Search</button>
  </form>
{results}
</main>"#,
        value = escape(query),
        results = results,
    )
}
