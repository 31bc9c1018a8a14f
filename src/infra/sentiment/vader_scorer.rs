use std::panic::{self, AssertUnwindSafe};
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::domain::ports::SentimentScorer;
use crate::error::AppError;

/// VADER lexicon scorer. Panics inside the analyzer are contained and
/// reported as errors so callers can fall back to an `Unknown` label.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> Result<f64, AppError> {
        let scores = panic::catch_unwind(AssertUnwindSafe(|| self.analyzer.polarity_scores(text)))
            .map_err(|_| AppError::InternalWithMsg("Sentiment analyzer panicked".into()))?;

        scores
            .get("compound")
            .copied()
            .filter(|c| c.is_finite())
            .ok_or_else(|| AppError::InternalWithMsg("Sentiment analyzer returned no compound score".into()))
    }
}
