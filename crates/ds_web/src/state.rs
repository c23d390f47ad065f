use chrono::{DateTime, Utc};
use ds_classifier::Classifier;
use ds_core::ClassifiedArticle;
use ds_sources::NewsSource;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Result of the most recent fetch cycle. Replaced wholesale on refresh;
/// a failed fetch leaves an empty record set with the error message so the
/// dashboard degrades to empty displays instead of erroring.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub records: Vec<ClassifiedArticle>,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

pub struct AppState {
    pub source: Arc<dyn NewsSource>,
    pub classifier: Classifier,
    pub snapshot: RwLock<Snapshot>,
}

impl AppState {
    pub fn new(source: Arc<dyn NewsSource>, classifier: Classifier) -> Self {
        Self {
            source,
            classifier,
            snapshot: RwLock::new(Snapshot::default()),
        }
    }

    /// Fetch, classify and swap in a new snapshot
    pub async fn refresh(&self) {
        let snapshot = match self.source.fetch_latest().await {
            Ok(raw) => {
                let records = self.classifier.classify_all(&raw);
                info!("🛰️ Classified {} articles", records.len());
                Snapshot {
                    records,
                    refreshed_at: Some(Utc::now()),
                    last_error: None,
                }
            }
            Err(e) => {
                warn!("⚠️ Fetch from {} failed: {}", self.source.name(), e);
                Snapshot {
                    records: Vec::new(),
                    refreshed_at: Some(Utc::now()),
                    last_error: Some(e.to_string()),
                }
            }
        };
        *self.snapshot.write().await = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ds_core::{Error, RawArticle, Result};

    struct StaticSource(Vec<RawArticle>);

    #[async_trait]
    impl NewsSource for StaticSource {
        fn name(&self) -> &str {
            "static"
        }

        async fn fetch_latest(&self) -> Result<Vec<RawArticle>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl NewsSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_latest(&self) -> Result<Vec<RawArticle>> {
            Err(Error::Api {
                code: "apiKeyInvalid".to_string(),
                message: "Your API key is invalid.".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot() {
        let raw = vec![RawArticle {
            title: "India missile update".to_string(),
            description: String::new(),
            source_name: "Wire".to_string(),
            published_at: "2025-06-01T00:00:00Z".to_string(),
        }];
        let state = AppState::new(Arc::new(StaticSource(raw)), Classifier::default());

        state.refresh().await;
        let snapshot = state.snapshot.read().await;
        assert_eq!(snapshot.records.len(), 1);
        assert!(snapshot.refreshed_at.is_some());
        assert!(snapshot.last_error.is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_yields_empty_snapshot() {
        let state = AppState::new(Arc::new(FailingSource), Classifier::default());

        state.refresh().await;
        let snapshot = state.snapshot.read().await;
        assert!(snapshot.records.is_empty());
        assert!(snapshot.last_error.as_deref().unwrap().contains("apiKeyInvalid"));
    }
}
