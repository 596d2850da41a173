//! Fixed articles served when the live source is unavailable, and the canned
//! body text used when an article has no content of its own.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::slug::slugify;
use crate::types::{Article, ArticleSource};

struct MockEntry {
    title: &'static str,
    description: &'static str,
    content: &'static str,
    hours_ago: i64,
    author: &'static str,
    source: &'static str,
    image: &'static str,
}

const MOCK_ENTRIES: [MockEntry; 3] = [
    MockEntry {
        title: "India Launches New Space Mission to Study Climate Change",
        description: "ISRO successfully launches advanced satellite to monitor environmental changes and weather patterns across South Asia.",
        content: "The Indian Space Research Organisation (ISRO) has achieved another milestone with the successful launch of its latest climate observation satellite. The advanced spacecraft is equipped with state-of-the-art sensors designed to monitor atmospheric conditions, ocean temperatures, and deforestation patterns across South Asia.",
        hours_ago: 0,
        author: "Science Correspondent",
        source: "Space & Technology Daily",
        image: "https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?w=600&h=400&fit=crop",
    },
    MockEntry {
        title: "Digital Payment Revolution Transforms Rural Indian Economy",
        description: "UPI and mobile banking bring financial inclusion to remote villages, boosting local businesses and economic growth.",
        content: "A quiet revolution is sweeping across rural India as digital payment platforms transform traditional economic systems. Villages that once relied entirely on cash transactions are now embracing UPI payments, mobile banking, and digital wallets at an unprecedented rate.",
        hours_ago: 2,
        author: "Economic Times Bureau",
        source: "Business Today",
        image: "https://images.unsplash.com/photo-1563013541-2d0c14a00c9e?w=600&h=400&fit=crop",
    },
    MockEntry {
        title: "Startup Ecosystem in Bangalore Reaches New Heights",
        description: "Silicon Valley of India attracts record investments as innovative startups solve global challenges.",
        content: "Bangalore's startup ecosystem is experiencing unprecedented growth, with venture capital investments reaching an all-time high in the first quarter. The city has become a hub for innovation in artificial intelligence, renewable energy, and healthcare technology.",
        hours_ago: 4,
        author: "Tech Innovation Network",
        source: "Startup India",
        image: "https://images.unsplash.com/photo-1512486130939-2c4f79935e4f?w=600&h=400&fit=crop",
    },
];

pub const MOCK_ARTICLE_COUNT: usize = MOCK_ENTRIES.len();

fn build(entry: &MockEntry, now: DateTime<Utc>) -> Article {
    Article {
        id: slugify(entry.title),
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        content: entry.content.to_string(),
        published_at: Some(now - Duration::hours(entry.hours_ago)),
        author: Some(entry.author.to_string()),
        source: ArticleSource::named(entry.source),
        url_to_image: Some(entry.image.to_string()),
        url: Some("#".to_string()),
    }
}

/// The mock set in its canonical order, timestamped relative to `now`.
pub fn mock_articles_at(now: DateTime<Utc>) -> Vec<Article> {
    MOCK_ENTRIES.iter().map(|entry| build(entry, now)).collect()
}

pub fn mock_articles() -> Vec<Article> {
    mock_articles_at(Utc::now())
}

/// First article of the canonical mock set; the answer of last resort.
pub fn first_mock_article() -> Article {
    build(&MOCK_ENTRIES[0], Utc::now())
}

/// The mock set in a random order, as served in place of a failed listing.
pub fn shuffled_mock_articles<R: Rng + ?Sized>(rng: &mut R) -> Vec<Article> {
    let mut articles = mock_articles();
    articles.shuffle(rng);
    articles
}

/// Mock article whose slug equals `slug` exactly.
pub fn mock_article_by_slug(slug: &str) -> Option<Article> {
    mock_articles().into_iter().find(|article| article.slug() == slug)
}

const PAYMENTS_CONTENT: &str = "A quiet revolution is sweeping across rural India as digital payment platforms transform traditional economic systems. Villages that once relied entirely on cash transactions are now embracing UPI payments, mobile banking, and digital wallets at an unprecedented rate.

Local shopkeepers, farmers, and small business owners report significant improvements in efficiency and security since adopting digital payments. \"Earlier, we had to travel hours to deposit cash. Now, everything happens instantly on our phones,\" says a village grocery store owner in Uttar Pradesh.

The government's Digital India initiative, combined with improved internet connectivity, has created an environment where even the smallest transactions are going digital, bringing millions into the formal economy. This shift is particularly impactful in remote areas where banking infrastructure was previously limited.

Small businesses are experiencing growth as they can now accept payments from customers who previously only carried cash. Farmers can receive payments for their produce directly into their bank accounts, reducing reliance on middlemen and improving transparency in agricultural transactions.";

const SPACE_CONTENT: &str = "The Indian Space Research Organisation (ISRO) continues to make significant strides in space exploration and technology. Recent missions have focused on climate monitoring, satellite communication, and planetary exploration.

The success of these missions demonstrates India's growing capabilities in space technology and its commitment to using space resources for national development and global environmental monitoring.

Scientists and engineers at ISRO are working on ambitious projects including lunar exploration, Mars missions, and advanced satellite systems that will benefit various sectors including agriculture, disaster management, and communication.";

const STARTUP_CONTENT: &str = "The startup ecosystem in India is experiencing unprecedented growth, with innovative companies emerging across various sectors including technology, healthcare, education, and renewable energy.

These startups are not only creating new job opportunities but also solving complex problems through technology and innovation, contributing significantly to India's economic growth and global technological presence.

Venture capital investments have reached record levels, and several Indian startups have achieved unicorn status, attracting international attention and partnerships.";

const SPORTS_CONTENT: &str = "Indian athletes continue to achieve remarkable success on international platforms, bringing pride to the nation and inspiring young sports enthusiasts across the country.

The improved sports infrastructure, better training facilities, and increased corporate sponsorship have created an environment where Indian athletes can compete at the highest levels globally.

Recent performances in various international championships have demonstrated the potential of Indian sports talent and the positive impact of systematic sports development programs.";

const GENERIC_CONTENT: &str = "This article discusses important developments and current affairs. The full content focuses on recent events and their implications across various sectors.

For complete details and in-depth analysis, please refer to the original source publication. The ongoing developments reflect the dynamic nature of current events and their impact on society, economy, and technology.

Stay updated with LiveHindustan for the latest news and comprehensive coverage of events shaping our world today.";

/// Topics checked in priority order; the first keyword hit wins.
const TOPICS: [(&[&str], &str); 4] = [
    (&["digital payment", "upi"], PAYMENTS_CONTENT),
    (&["space", "isro"], SPACE_CONTENT),
    (&["startup", "bangalore"], STARTUP_CONTENT),
    (&["sports", "athlete"], SPORTS_CONTENT),
];

/// Placeholder body text for an article that has no content of its own.
pub fn generated_content(title: &str) -> &'static str {
    let title = title.to_lowercase();
    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| title.contains(keyword)))
        .map(|(_, content)| *content)
        .unwrap_or(GENERIC_CONTENT)
}
