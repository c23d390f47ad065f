use ds_core::SentimentScorer;

/// Small polarity lexicon tuned for news headlines. This is a heuristic,
/// not a language model: words carry a fixed +1/-1 weight and a preceding
/// negator flips the sign.
const POSITIVE_WORDS: &[&str] = &[
    "advance",
    "agreement",
    "boost",
    "breakthrough",
    "celebrate",
    "cooperation",
    "good",
    "great",
    "grows",
    "growth",
    "improve",
    "improved",
    "peace",
    "peaceful",
    "progress",
    "prosperity",
    "stable",
    "steadily",
    "strong",
    "succeed",
    "success",
    "successful",
    "support",
    "welcome",
    "win",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "casualties",
    "collapse",
    "crisis",
    "danger",
    "dangerous",
    "dead",
    "deadly",
    "death",
    "destroy",
    "destroyed",
    "disaster",
    "escalation",
    "fail",
    "failed",
    "failure",
    "fear",
    "hostile",
    "kill",
    "killed",
    "loss",
    "sanctions",
    "tension",
    "terror",
    "threaten",
    "violence",
    "worst",
];

const NEGATORS: &[&str] = &["never", "no", "not", "without"];

/// Lexicon-based polarity scorer. Scores are the mean weight of the
/// sentiment-bearing words found in the text, so the output stays in
/// [-1.0, 1.0]; text with no lexicon hits scores 0.0.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> f32 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let mut sum = 0.0f32;
        let mut hits = 0u32;
        for (i, token) in tokens.iter().enumerate() {
            let weight = if POSITIVE_WORDS.contains(token) {
                1.0
            } else if NEGATIVE_WORDS.contains(token) {
                -1.0
            } else {
                continue;
            };
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1]);
            sum += if negated { -weight } else { weight };
            hits += 1;
        }

        if hits == 0 {
            0.0
        } else {
            sum / hits as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(LexiconScorer::new().polarity(""), 0.0);
    }

    #[test]
    fn test_no_lexicon_hits_is_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(
            scorer.polarity("India conducts missile test launch near border"),
            0.0
        );
    }

    #[test]
    fn test_positive_words_score_positive() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("Experts welcome peaceful cooperation") > 0.1);
    }

    #[test]
    fn test_negative_words_score_negative() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("Deadly escalation feared as tension rises") < -0.1);
    }

    #[test]
    fn test_negation_flips_sign() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("talks were not successful") < 0.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let scorer = LexiconScorer::new();
        let score = scorer.polarity("peace peace peace success win great good");
        assert!((-1.0..=1.0).contains(&score));
    }
}
