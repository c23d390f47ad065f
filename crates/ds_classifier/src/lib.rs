pub mod region;
pub mod sentiment;
pub mod threat;

pub use sentiment::LexiconScorer;

use ds_core::{ClassifiedArticle, RawArticle, Sentiment, SentimentScorer};

/// Thresholds applied to the polarity score; scores inside the band are
/// Neutral.
const POSITIVE_THRESHOLD: f32 = 0.1;
const NEGATIVE_THRESHOLD: f32 = -0.1;

/// Deterministic, side-effect-free mapping from raw to classified
/// articles. Holds no mutable state: the lookup tables and the scorer are
/// fixed at construction, so `classify` is a pure function of its input.
pub struct Classifier {
    scorer: Box<dyn SentimentScorer>,
}

impl Classifier {
    pub fn new(scorer: Box<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Classify one article. Total: every input yields exactly one record
    /// and empty text comes out Neutral / Global / non-threat at (0, 0).
    pub fn classify(&self, article: &RawArticle) -> ClassifiedArticle {
        let text = format!("{} {}", article.title, article.description);

        let polarity = self.scorer.polarity(&text);
        let sentiment = if polarity > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        let region = region::tag_region(&text);
        let (latitude, longitude) = region::coordinates(region);

        ClassifiedArticle {
            title: article.title.clone(),
            source: article.source_name.clone(),
            date: article.published_at.chars().take(10).collect(),
            sentiment,
            region,
            is_threat: threat::is_threat(&text),
            latitude,
            longitude,
        }
    }

    /// Classify a batch in input order. An empty fetch classifies to an
    /// empty batch.
    pub fn classify_all(&self, articles: &[RawArticle]) -> Vec<ClassifiedArticle> {
        articles.iter().map(|a| self.classify(a)).collect()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Box::new(LexiconScorer::new()))
    }
}
