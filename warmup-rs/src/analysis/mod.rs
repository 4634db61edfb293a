//! Email content analysis
//!
//! Extracts structural and content metrics from a draft, combines them
//! with the classifier's spam probability into a 0-100 health score, and
//! generates categorized findings.

pub mod analyzer;
pub mod findings;
pub mod metrics;
pub mod report;
pub mod scorer;
pub mod types;

pub use analyzer::EmailAnalyzer;
pub use metrics::{MetricExtractor, NEGATIVE_TONE_WORDS, SPAM_TRIGGER_WORDS};
pub use scorer::{health_score, health_status};
pub use types::*;
