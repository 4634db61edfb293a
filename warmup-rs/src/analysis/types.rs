//! Analysis types and data structures

use serde::{Deserialize, Serialize};

/// Metrics extracted from a draft, computed once per analysis
#[derive(Debug, Clone, Default)]
pub struct ExtractedMetrics {
    /// Whitespace-delimited tokens in the normalized text
    pub word_count: usize,
    /// Fragments left by splitting on terminal punctuation runs
    pub sentence_count: usize,
    /// Non-blank lines
    pub paragraph_count: usize,
    /// All lines, blank ones included
    pub line_count: usize,
    /// Literal `?` occurrences
    pub question_count: usize,
    /// `http(s)://` URLs
    pub link_count: usize,
    /// Whole words of 2+ consecutive uppercase letters
    pub uppercase_count: usize,
    /// Bracket-delimited `[placeholder]` tokens
    pub personalization_tag_count: usize,
    /// Trigger words found, in vocabulary order, deduplicated
    pub spam_words: Vec<&'static str>,
    /// Negative-tone words found, in vocabulary order, deduplicated
    pub negative_words: Vec<&'static str>,
    /// Subject characters; falls back to the body's first non-blank line
    pub subject_length: usize,
    /// Classifier output, in [0, 1]
    pub spam_probability: f64,
    /// Heuristic score derived from average sentence length, in [0, 100]
    pub readability_score: f64,
    /// Estimated reading time, at least 1
    pub read_time_minutes: u32,
}

/// Finding priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "HIGH PRIORITY")]
    High,
    #[serde(rename = "MEDIUM PRIORITY")]
    Medium,
    #[serde(rename = "LOW PRIORITY")]
    Low,
    #[serde(rename = "SUGGESTION")]
    Suggestion,
    #[serde(rename = "NONE PRIORITY")]
    None,
}

/// A single categorized observation about the draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub priority: Priority,
    pub category: String,
    /// Evidence for the finding
    pub found: String,
    /// How to remediate it
    pub recommendation: String,
}

/// Per-metric status in the report table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricStatus {
    Optimal,
    Review,
    #[serde(rename = "Too Short")]
    TooShort,
    #[serde(rename = "Too Long")]
    TooLong,
}

/// Metric cell value: a count or a display string (e.g. `"2 min"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    Text(String),
}

/// One row of the report's metric table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub value: MetricValue,
    pub status: MetricStatus,
    pub label: String,
}

/// The full metric table; field order is the wire order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsTable {
    pub subject: MetricEntry,
    pub words: MetricEntry,
    pub sentences: MetricEntry,
    pub paragraphs: MetricEntry,
    pub lines: MetricEntry,
    pub read_time: MetricEntry,
    pub links: MetricEntry,
    pub questions: MetricEntry,
    pub spam_words: MetricEntry,
    pub personal_tags: MetricEntry,
    pub uppercase: MetricEntry,
    pub readability: MetricEntry,
}

/// Health score summary block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateAnalytics {
    pub email_health_score: u8,
    pub status: String,
    pub metrics: MetricsTable,
}

/// Categorized findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalysis {
    pub critical_issues: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub suggestions: Vec<Finding>,
    pub passed_checks: Vec<String>,
}

/// A deliverability warmup practice, static content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupStrategy {
    pub title: String,
    pub description: String,
}

/// Complete analysis report returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub template_analytics: TemplateAnalytics,
    pub detailed_analysis: DetailedAnalysis,
    pub warmup_strategies: Vec<WarmupStrategy>,
    pub positive_aspects: Finding,
}
