use async_trait::async_trait;
use ds_core::{RawArticle, Result};

pub mod newsapi;

pub use newsapi::NewsApiSource;

/// A provider of raw articles. The contract with consumers is loose on
/// purpose: a fetch may legitimately return zero articles, and the records
/// it does return always have every text field populated (possibly empty),
/// so downstream classification never has to deal with missing data.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Name of the source, for logging
    fn name(&self) -> &str;

    /// Fetch the latest batch of articles
    async fn fetch_latest(&self) -> Result<Vec<RawArticle>>;
}

pub mod prelude {
    pub use super::{NewsApiSource, NewsSource};
    pub use ds_core::{Error, RawArticle, Result};
}
