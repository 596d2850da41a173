use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use lh_core::{Article, Category, DEFAULT_PAGE_SIZE};
use lh_newsapi::{Headlines, Resolution};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::error::{WebError, WebResult};
use crate::views::{self, layout, HomeView};
use crate::AppState;

/// NewsAPI refuses page sizes above this.
pub const MAX_PAGE_SIZE: u32 = 100;
pub const TOP_HEADLINES_PAGE_SIZE: u32 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub category: Option<String>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHeadlinesParams {
    pub country: Option<String>,
    pub page_size: Option<u32>,
}

fn parse_category(raw: Option<&str>) -> WebResult<Category> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|_| WebError::Validation(format!("unknown category: {}", raw))),
        None => Ok(Category::General),
    }
}

fn page_size(raw: Option<u32>, default: u32) -> WebResult<u32> {
    match raw {
        None => Ok(default),
        Some(n) if (1..=MAX_PAGE_SIZE).contains(&n) => Ok(n),
        Some(_) => Err(WebError::Validation(format!(
            "pageSize must be between 1 and {}",
            MAX_PAGE_SIZE
        ))),
    }
}

fn html_page(title: &str, body: &str) -> Html<String> {
    Html(layout::page(title, body, &Local::now()))
}

pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HomeParams>,
) -> impl IntoResponse {
    let category = parse_category(params.category.as_deref()).unwrap_or_else(|e| {
        warn!("⚠️ {}, showing general news", e);
        Category::General
    });

    let mut view = HomeView::new(category);
    view.load(&state.desk, state.cache.as_ref(), category, state.mock_fallback)
        .await;
    html_page(layout::SITE_TITLE, &view.render())
}

pub async fn refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut view = HomeView::new(Category::General);
    view.refresh(&state.desk, state.cache.as_ref()).await;
    html_page(layout::SITE_TITLE, &view.render())
}

pub async fn article_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let resolution = state.resolver.resolve(&slug).await;
    let title = format!("{} - LiveHindustan", resolution.article.title);
    html_page(&title, &views::article::render(&resolution))
}

pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> WebResult<Html<String>> {
    let query = params.q.unwrap_or_default();
    let size = page_size(params.page_size, DEFAULT_PAGE_SIZE)?;
    let results = state.desk.search_news(&query, size).await;
    let title = if query.trim().is_empty() {
        "Search - LiveHindustan".to_string()
    } else {
        format!("{} - Search - LiveHindustan", query.trim())
    };
    Ok(html_page(&title, &views::search::render(&query, &results)))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> WebResult<Json<Headlines>> {
    let category = parse_category(params.category.as_deref())?;
    let size = page_size(params.page_size, DEFAULT_PAGE_SIZE)?;

    let headlines = if state.mock_fallback {
        state.desk.get_all_news(category, size).await
    } else {
        Headlines::live(state.desk.try_get_all_news(category, size).await?)
    };
    Ok(Json(headlines))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> WebResult<Json<Resolution>> {
    if state.mock_fallback {
        Ok(Json(state.resolver.resolve(&slug).await))
    } else {
        Ok(Json(state.resolver.try_resolve(&slug).await?))
    }
}

pub async fn search_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> WebResult<Json<Vec<Article>>> {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(WebError::Validation("q must not be empty".to_string()));
    }
    let size = page_size(params.page_size, DEFAULT_PAGE_SIZE)?;
    if state.mock_fallback {
        Ok(Json(state.desk.search_news(&query, size).await))
    } else {
        Ok(Json(state.desk.try_search_news(&query, size).await?))
    }
}

pub async fn top_headlines(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopHeadlinesParams>,
) -> WebResult<Json<Headlines>> {
    let size = page_size(params.page_size, TOP_HEADLINES_PAGE_SIZE)?;
    let country = params
        .country
        .as_deref()
        .map(str::trim)
        .filter(|country| !country.is_empty())
        .unwrap_or(&state.country)
        .to_lowercase();
    Ok(Json(state.desk.get_top_headlines(&country, size).await))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
