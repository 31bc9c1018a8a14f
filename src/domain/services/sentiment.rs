use tracing::warn;

use crate::domain::models::feedback::Sentiment;
use crate::domain::ports::SentimentScorer;

pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

pub fn label_for_compound(compound: f64) -> Sentiment {
    if compound > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if compound < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Scores `text` and buckets it. Scorer failures yield [`Sentiment::Unknown`].
pub fn tag(scorer: &dyn SentimentScorer, text: &str) -> Sentiment {
    match scorer.compound(text) {
        Ok(compound) => label_for_compound(compound),
        Err(e) => {
            warn!("Sentiment analysis failed: {}", e);
            Sentiment::Unknown
        }
    }
}
