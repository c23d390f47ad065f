use ds_core::{ClassifiedArticle, Region, Sentiment};
use serde::Serialize;
use std::collections::HashMap;

/// Words too common in headlines to be interesting in a word cloud
const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has",
    "have", "his", "her", "in", "into", "is", "it", "its", "new", "of", "on", "or", "over",
    "say", "says", "that", "the", "this", "to", "was", "were", "will", "with",
];

#[derive(Debug, Clone, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub is_threat: bool,
    /// Fill intensity for the scatter layer: threats plot hot
    pub intensity: u8,
}

pub fn sentiment_counts(records: &[ClassifiedArticle]) -> HashMap<Sentiment, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.sentiment).or_insert(0) += 1;
    }
    counts
}

pub fn region_counts(records: &[ClassifiedArticle]) -> HashMap<Region, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.region).or_insert(0) += 1;
    }
    counts
}

pub fn threat_count(records: &[ClassifiedArticle]) -> usize {
    records.iter().filter(|r| r.is_threat).count()
}

/// Term frequencies over all titles, most frequent first, for the word
/// cloud. Ties break alphabetically so output is stable.
pub fn word_frequencies(records: &[ClassifiedArticle], limit: usize) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        for token in record
            .title
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.len() > 2 && !STOP_WORDS.contains(t))
        {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(limit);
    words
}

pub fn map_points(records: &[ClassifiedArticle]) -> Vec<MapPoint> {
    records
        .iter()
        .map(|r| MapPoint {
            latitude: r.latitude,
            longitude: r.longitude,
            title: r.title.clone(),
            is_threat: r.is_threat,
            intensity: if r.is_threat { 100 } else { 30 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, sentiment: Sentiment, region: Region, is_threat: bool) -> ClassifiedArticle {
        ClassifiedArticle {
            title: title.to_string(),
            source: "Wire".to_string(),
            date: "2025-06-01".to_string(),
            sentiment,
            region,
            is_threat,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn test_counts() {
        let records = vec![
            record("a", Sentiment::Neutral, Region::India, true),
            record("b", Sentiment::Neutral, Region::India, false),
            record("c", Sentiment::Positive, Region::Global, false),
        ];
        assert_eq!(sentiment_counts(&records)[&Sentiment::Neutral], 2);
        assert_eq!(region_counts(&records)[&Region::India], 2);
        assert_eq!(threat_count(&records), 1);
    }

    #[test]
    fn test_empty_records_degrade_to_empty_aggregates() {
        assert!(sentiment_counts(&[]).is_empty());
        assert!(region_counts(&[]).is_empty());
        assert_eq!(threat_count(&[]), 0);
        assert!(word_frequencies(&[], 50).is_empty());
        assert!(map_points(&[]).is_empty());
    }

    #[test]
    fn test_word_frequencies_filters_and_ranks() {
        let records = vec![
            record("Missile defence and the missile gap", Sentiment::Neutral, Region::Global, true),
            record("Budget grows steadily", Sentiment::Positive, Region::Global, false),
        ];
        let words = word_frequencies(&records, 10);
        assert_eq!(words[0].word, "missile");
        assert_eq!(words[0].count, 2);
        // stop words and short tokens never appear
        assert!(words.iter().all(|w| w.word != "the" && w.word != "and"));
    }

    #[test]
    fn test_map_points_intensity() {
        let records = vec![
            record("hot", Sentiment::Neutral, Region::India, true),
            record("cold", Sentiment::Neutral, Region::Global, false),
        ];
        let points = map_points(&records);
        assert_eq!(points[0].intensity, 100);
        assert_eq!(points[1].intensity, 30);
    }
}
