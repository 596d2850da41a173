use chrono::{DateTime, Utc};

/// Escape text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Day/month/year, the way Indian English locales print dates.
pub fn format_date(at: Option<DateTime<Utc>>) -> String {
    at.map(|at| at.format("%-d/%-m/%Y").to_string())
        .unwrap_or_default()
}

/// Body text split into paragraphs on blank lines.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert_eq!(format_date(Some(at)), "1/5/2024");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(paragraphs("One.\n\n  \n\nTwo <b>."), "<p>One.</p>\n<p>Two &lt;b&gt;.</p>");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "Article", "Articles"), "1 Article");
        assert_eq!(plural(0, "Article", "Articles"), "0 Articles");
    }
}
