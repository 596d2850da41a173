use anyhow::Context;
use clap::Parser;
use lh_core::slug::slugify;
use lh_core::{Article, Category, NewsSource, Result};
use lh_newsapi::{ArticleResolver, Headlines, NewsApiClient, NewsApiConfig, NewsDesk};
use lh_web::AppState;
use std::sync::Arc;
use tracing::info;

mod cli;
mod logging;

use cli::{Cli, Commands};

fn print_articles(articles: &[Article]) {
    for (index, article) in articles.iter().enumerate() {
        println!("{:>2}. {} ({})", index + 1, article.title, article.source_name());
        println!("    {}", article.path());
    }
}

fn print_headlines(headlines: &Headlines) {
    if headlines.is_mock() {
        println!("NewsAPI unavailable, showing sample stories");
    }
    print_articles(&headlines.articles);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(if cli.verbose { "debug" } else { logging::DEFAULT_FILTER });

    if let Commands::Slug { title } = &cli.command {
        println!("{}", slugify(title));
        return Ok(());
    }

    let config = cli.apply(NewsApiConfig::from_env()?);
    info!("🔧 Using {:?}", config);
    let country = config.country.clone();
    let source: Arc<dyn NewsSource> = Arc::new(NewsApiClient::new(config)?);
    let cache = lh_storage::create_cache(&cli.cache).await?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_mock_fallback,
        } => {
            let state = AppState::new(source, cache, &country).with_mock_fallback(!no_mock_fallback);
            let app = lh_web::create_app(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            info!("🚀 LiveHindustan listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Headlines {
            category,
            page_size,
        } => {
            let category: Category = category.parse()?;
            let headlines = NewsDesk::new(source).get_news_by_category(category, page_size).await;
            print_headlines(&headlines);
        }
        Commands::Top { page_size } => {
            let headlines = NewsDesk::new(source).get_top_headlines(&country, page_size).await;
            print_headlines(&headlines);
        }
        Commands::Search { query, page_size } => {
            let results = NewsDesk::new(source).search_news(&query, page_size).await;
            if results.is_empty() {
                println!("No results for {:?}", query);
            }
            print_articles(&results);
        }
        Commands::Article { slug } => {
            let resolution = ArticleResolver::new(source, cache).resolve(&slug).await;
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }
        Commands::Slug { .. } => {}
    }

    Ok(())
}
