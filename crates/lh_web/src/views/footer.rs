use super::html::escape;

const CATEGORIES: [&str; 6] = [
    "National",
    "Politics",
    "Business",
    "Sports",
    "Entertainment",
    "Technology",
];

const COMPANY: [&str; 6] = ["About Us", "Contact", "Careers", "Advertise", "Terms", "Privacy"];

fn list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect::<Vec<_>>()
        .join("")
}

pub fn render(year: i32) -> String {
    format!(
        r#"<footer class="site-footer">
  <div class="columns">
    <div class="brand"><span class="logo">LH</span><span class="name">LiveHindustan</span><p>Serving you with the Latest News.</p></div>
    <div><h3>Categories</h3><ul>{categories}</ul></div>
    <div><h3>Company</h3><ul>{company}</ul></div>
    <div class="contact"><h3>Contact Info</h3><p>📞 +91 98XXXXXX00</p><p>✉️ livehindustan@gmail.com</p><p>📍 Lucknow, India</p></div>
  </div>
  <p class="copyright">&copy; {year} LiveHindustan. All rights reserved.</p>
</footer>"#,
        categories = list(&CATEGORIES),
        company = list(&COMPANY),
        year = year,
    )
}
