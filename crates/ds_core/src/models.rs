/// Polarity scoring over a piece of text.
///
/// Implementations return a score in [-1.0, 1.0]; the classifier only
/// relies on the three-way thresholding contract (> 0.1 positive, < -0.1
/// negative, neutral otherwise), so any general-purpose scorer that honors
/// the range can be swapped in.
pub trait SentimentScorer: Send + Sync {
    /// Name of the scorer, for logging
    fn name(&self) -> &str;

    /// Polarity of the given text in [-1.0, 1.0]; 0.0 for empty text
    fn polarity(&self, text: &str) -> f32;
}
