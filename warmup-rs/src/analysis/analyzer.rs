//! Analysis pipeline
//!
//! Ties the normalizer, metric extractor, classifier and report assembly
//! together. One analysis is a pure function of its input plus the shared
//! read-only model, so the analyzer can be shared across request tasks.

use std::sync::Arc;

use super::metrics::MetricExtractor;
use super::report::build_report;
use super::types::AnalysisReport;
use crate::classifier::SpamModel;
use crate::error::Result;

/// Email content analyzer
pub struct EmailAnalyzer {
    model: Arc<dyn SpamModel>,
    extractor: MetricExtractor,
}

impl EmailAnalyzer {
    /// Create an analyzer around an already loaded spam model
    pub fn new(model: Arc<dyn SpamModel>) -> Result<Self> {
        Ok(Self {
            model,
            extractor: MetricExtractor::new()?,
        })
    }

    /// Analyze a draft and produce the full health report.
    ///
    /// Subject and body are analyzed as one text (subject first, blank
    /// line, then body) so subject words count toward the word, uppercase
    /// and trigger metrics. The subject is kept separately for the
    /// subject-length checks; it may be empty.
    pub fn analyze(&self, subject: &str, body: &str) -> AnalysisReport {
        let text = format!("{}\n\n{}", subject, body);
        let normalized = self.extractor.normalize(&text);

        let mut metrics = self.extractor.extract(&text, &normalized, subject, body);
        metrics.spam_probability = self.model.predict_proba(&normalized);

        build_report(&metrics)
    }
}
