use lh_core::Article;

use super::html::{escape, format_date};

pub fn image(article: &Article, class: &str) -> String {
    match &article.url_to_image {
        Some(src) => format!(
            r#"<img class="{}" src="{}" alt="{}">"#,
            class,
            escape(src),
            escape(&article.title)
        ),
        None => format!(r#"<div class="{} image-fallback">LH</div>"#, class),
    }
}

pub fn render(article: &Article, featured: bool) -> String {
    let author = article
        .author
        .as_deref()
        .map(|author| format!(r#"<span class="author">{}</span>"#, escape(author)))
        .unwrap_or_default();

    format!(
        r#"<article class="news-card{featured}">
  <a href="{href}">
    {image}
    <div class="body">
      <span class="source">{source}</span>
      <h3>{title}</h3>
      <p class="description">{description}</p>
      <div class="meta"><time>{date}</time>{author}</div>
    </div>
  </a>
</article>"#,
        featured = if featured { " featured" } else { "" },
        href = escape(&article.path()),
        image = image(article, "thumb"),
        source = escape(article.source_name()),
        title = escape(&article.title),
        description = escape(&article.description),
        date = format_date(article.published_at),
        author = author,
    )
}
