use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use na_core::{Article, NewsStorage, RawNewsRecord, ViewRecord};
use na_engine::{
    build_preference_profile, cluster_topics, corpus_trends, find_similar, reading_stats,
    recommend, ComparisonGroup, ComparisonSet, ComparisonSummary, ReadingStats, TrendSummary,
};
use serde::Deserialize;

use crate::AppState;

// Profiles are built from the most recent 100 views only.
const VIEW_HISTORY_WINDOW: usize = 100;
const DEFAULT_RECOMMENDATIONS: usize = 10;
const DEFAULT_SIMILAR: usize = 5;

type HandlerResult<T> = std::result::Result<Json<T>, StatusCode>;

fn storage_error(err: na_core::Error) -> StatusCode {
    tracing::error!("storage error: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RecordViewRequest {
    pub article_id: String,
    pub reading_time_seconds: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub ids: Vec<String>,
}

pub async fn list_news(State(state): State<Arc<AppState>>) -> HandlerResult<Vec<Article>> {
    let articles = state.storage.list_articles().await.map_err(storage_error)?;
    Ok(Json(articles))
}

pub async fn create_news(
    State(state): State<Arc<AppState>>,
    Json(record): Json<RawNewsRecord>,
) -> HandlerResult<Article> {
    let article = record.into_article().map_err(|err| {
        tracing::warn!("rejecting news record: {}", err);
        StatusCode::UNPROCESSABLE_ENTITY
    })?;
    state
        .storage
        .store_article(&article)
        .await
        .map_err(storage_error)?;
    Ok(Json(article))
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> HandlerResult<Article> {
    let article = state
        .storage
        .get_article(&id)
        .await
        .map_err(storage_error)?
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(article))
}

pub async fn similar_news(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> HandlerResult<Vec<Article>> {
    let articles = state.storage.list_articles().await.map_err(storage_error)?;
    let limit = query.limit.unwrap_or(DEFAULT_SIMILAR);
    Ok(Json(find_similar(&articles, &id, limit)))
}

pub async fn topic_groups(
    State(state): State<Arc<AppState>>,
) -> HandlerResult<Vec<ComparisonGroup>> {
    let articles = state.storage.list_articles().await.map_err(storage_error)?;
    Ok(Json(cluster_topics(&articles)))
}

pub async fn trends(State(state): State<Arc<AppState>>) -> HandlerResult<TrendSummary> {
    let articles = state.storage.list_articles().await.map_err(storage_error)?;
    Ok(Json(corpus_trends(&articles)))
}

/// Log a view, snapshotting the article's category and keywords so later
/// edits to the article do not rewrite history.
pub async fn record_view(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(request): Json<RecordViewRequest>,
) -> HandlerResult<ViewRecord> {
    let article = state
        .storage
        .get_article(&request.article_id)
        .await
        .map_err(storage_error)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let view = ViewRecord {
        article_id: article.id.clone(),
        category: article.category,
        keywords: article.keywords.clone(),
        reading_time_seconds: request.reading_time_seconds,
    };
    state
        .storage
        .record_view(&user_id, &view)
        .await
        .map_err(storage_error)?;
    Ok(Json(view))
}

pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<LimitQuery>,
) -> HandlerResult<Vec<Article>> {
    let views = state
        .storage
        .views_for_user(&user_id, VIEW_HISTORY_WINDOW)
        .await
        .map_err(storage_error)?;
    let profile = build_preference_profile(&views);
    let viewed: HashSet<String> = views.iter().map(|v| v.article_id.clone()).collect();

    let articles = state.storage.list_articles().await.map_err(storage_error)?;
    let limit = query.limit.unwrap_or(DEFAULT_RECOMMENDATIONS);
    Ok(Json(recommend(&articles, &profile, &viewed, Utc::now(), limit)))
}

pub async fn user_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> HandlerResult<ReadingStats> {
    let views = state
        .storage
        .views_for_user(&user_id, VIEW_HISTORY_WINDOW)
        .await
        .map_err(storage_error)?;
    Ok(Json(reading_stats(&views)))
}

/// Resolve the requested ids and aggregate them under the comparison-set
/// rules: unknown ids are skipped, duplicates collapse, at most four count.
pub async fn compare(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CompareRequest>,
) -> HandlerResult<ComparisonSummary> {
    let mut set = ComparisonSet::new();
    for id in &request.ids {
        if let Some(article) = state.storage.get_article(id).await.map_err(storage_error)? {
            set.add(article);
        }
    }
    Ok(Json(set.summary()))
}
