use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::aggregate;
use crate::AppState;

#[derive(Serialize)]
pub struct Summary {
    pub total: usize,
    pub threats: usize,
    pub sentiments: HashMap<String, usize>,
    pub regions: HashMap<String, usize>,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

pub async fn list_articles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;
    Json(snapshot.records.clone())
}

pub async fn get_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;
    Json(build_summary(
        &snapshot.records,
        snapshot.refreshed_at,
        snapshot.last_error.clone(),
    ))
}

pub async fn get_word_cloud(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;
    Json(aggregate::word_frequencies(&snapshot.records, 100))
}

pub async fn get_map(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot.read().await;
    Json(aggregate::map_points(&snapshot.records))
}

/// Re-fetch and classify, then report the new summary
pub async fn refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.refresh().await;
    let snapshot = state.snapshot.read().await;
    Json(build_summary(
        &snapshot.records,
        snapshot.refreshed_at,
        snapshot.last_error.clone(),
    ))
}

fn build_summary(
    records: &[ds_core::ClassifiedArticle],
    refreshed_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
) -> Summary {
    Summary {
        total: records.len(),
        threats: aggregate::threat_count(records),
        sentiments: aggregate::sentiment_counts(records)
            .into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v))
            .collect(),
        regions: aggregate::region_counts(records)
            .into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v))
            .collect(),
        refreshed_at,
        last_error,
    }
}
