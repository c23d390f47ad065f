use async_trait::async_trait;
use ds_core::{Error, RawArticle, Result};
use serde::Deserialize;
use tracing::info;

use crate::NewsSource;

const BASE_URL: &str = "https://newsapi.org/v2/everything";
const DEFAULT_QUERY: &str = "defense OR military OR DRDO OR missile OR war OR border";

/// Client for the NewsAPI `everything` endpoint. One page of results per
/// fetch; pagination and retry are out of scope.
pub struct NewsApiSource {
    client: reqwest::Client,
    api_key: String,
    query: String,
    base_url: String,
}

impl NewsApiSource {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            query: DEFAULT_QUERY.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Override the endpoint, used by tests against a local server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("api_key", &"<redacted>")
            .field("query", &self.query)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_latest(&self) -> Result<Vec<RawArticle>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", self.query.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // NewsAPI reports failures as JSON with code/message fields
            let error: ApiError = response.json().await?;
            return Err(Error::Api {
                code: error.code.unwrap_or_else(|| status.as_u16().to_string()),
                message: error.message.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        let body: SearchResponse = response.json().await?;
        let articles = body.into_articles()?;
        info!("📰 Fetched {} articles from {}", articles.len(), self.name());
        Ok(articles)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // NewsAPI can answer 200 with an error body, so the status field
    // decides whether articles are trustworthy
    status: Option<String>,
    code: Option<String>,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<ArticleDto>,
}

impl SearchResponse {
    fn into_articles(self) -> Result<Vec<RawArticle>> {
        if self.status.as_deref() == Some("error") {
            return Err(Error::Api {
                code: self.code.unwrap_or_else(|| "unknown".to_string()),
                message: self.message.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        Ok(self.articles.into_iter().map(ArticleDto::into_raw).collect())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<String>,
    message: Option<String>,
}

/// Wire shape of one article; every field NewsAPI may null out is an
/// Option here and normalized in `into_raw`.
#[derive(Debug, Deserialize)]
struct ArticleDto {
    title: Option<String>,
    description: Option<String>,
    source: Option<SourceDto>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SourceDto {
    name: Option<String>,
}

impl ArticleDto {
    fn into_raw(self) -> RawArticle {
        RawArticle {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            source_name: self
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            published_at: self.published_at.unwrap_or_default(),
        }
    }
}
