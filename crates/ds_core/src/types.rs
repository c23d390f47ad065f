use serde::{Deserialize, Serialize};

/// An article as delivered by the data source, normalized so that every
/// field is a plain string. Missing title/description collapse to "" and a
/// missing source name collapses to "Unknown" at the wire boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawArticle {
    pub title: String,
    pub description: String,
    pub source_name: String,
    /// RFC 3339 timestamp string; only the leading calendar date is kept
    /// on the classified record.
    pub published_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of region labels the classifier can produce. Tagging is a
/// substring heuristic over the article text, not geocoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    India,
    China,
    #[serde(rename = "USA")]
    Usa,
    Russia,
    Global,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::India => "India",
            Region::China => "China",
            Region::Usa => "USA",
            Region::Russia => "Russia",
            Region::Global => "Global",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the classifier: one per RawArticle, never mutated after
/// creation, replaced wholesale on the next fetch cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedArticle {
    pub title: String,
    pub source: String,
    pub date: String,
    pub sentiment: Sentiment,
    pub region: Region,
    pub is_threat: bool,
    pub latitude: f64,
    pub longitude: f64,
}
