use chrono::{DateTime, Datelike, Local};

use super::html::escape;
use super::{footer, header};

pub const SITE_TITLE: &str = "LiveHindustan - Latest News & Breaking Updates";
pub const SITE_DESCRIPTION: &str = "Stay updated with the latest news, breaking stories, and in-depth coverage from India and around the world. LiveHindustan brings you real-time news updates.";

/// A full document: header, then `body`, then the footer.
pub fn page(title: &str, body: &str, now: &DateTime<Local>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<title>{title}</title>
</head>
<body>
{header}
{body}
{footer}
</body>
</html>"#,
        description = escape(SITE_DESCRIPTION),
        title = escape(title),
        header = header::render(now),
        body = body,
        footer = footer::render(now.year()),
    )
}
