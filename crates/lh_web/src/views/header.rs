use chrono::{DateTime, Datelike, Local, TimeZone};

use super::html::escape;

pub const SECTIONS: [&str; 8] = [
    "Latest",
    "National",
    "Politics",
    "Business",
    "Sports",
    "Entertainment",
    "Technology",
    "World",
];

pub const WEATHER: &str = "🌤️ Lucknow, 25°C";

/// `Weekday, D Month YYYY`.
pub fn display_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}, {}", now.format("%A"), now.format("%-d %B %Y"))
}

pub fn render(now: &DateTime<Local>) -> String {
    let nav = SECTIONS
        .iter()
        .map(|section| {
            format!(
                r##"<li><a href="/#{}">{}</a></li>"##,
                section.to_lowercase(),
                escape(section)
            )
        })
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<header class="site-header">
  <div class="top-bar">
    <a href="/" class="brand"><span class="logo">LH</span><span class="name">LiveHindustan</span></a>
    <div class="today">
      <div class="date" data-year="{year}">{date}</div>
      <div class="weather">{weather}</div>
    </div>
  </div>
  <nav class="sections"><ul>{nav}</ul></nav>
</header>"#,
        year = now.year(),
        date = escape(&display_date(now)),
        weather = WEATHER,
        nav = nav,
    )
}
