//! Report assembly
//!
//! Pure composition of the extracted metrics, score and findings into the
//! wire structure. Field names and nesting are a compatibility contract.

use super::findings;
use super::scorer::{health_score, health_status};
use super::types::{
    AnalysisReport, DetailedAnalysis, ExtractedMetrics, MetricEntry, MetricStatus, MetricValue,
    MetricsTable, TemplateAnalytics,
};

/// Build the complete report for one analyzed draft
pub fn build_report(metrics: &ExtractedMetrics) -> AnalysisReport {
    let score = health_score(
        metrics.spam_probability,
        metrics.spam_words.len(),
        metrics.uppercase_count,
    );

    AnalysisReport {
        template_analytics: TemplateAnalytics {
            email_health_score: score,
            status: health_status(score).to_string(),
            metrics: metrics_table(metrics),
        },
        detailed_analysis: DetailedAnalysis {
            critical_issues: findings::critical_issues(metrics),
            warnings: findings::warnings(metrics),
            suggestions: findings::suggestions(metrics),
            passed_checks: findings::passed_checks(metrics),
        },
        warmup_strategies: findings::warmup_strategies(),
        positive_aspects: findings::positive_aspects(metrics),
    }
}

fn metrics_table(metrics: &ExtractedMetrics) -> MetricsTable {
    MetricsTable {
        subject: entry(
            count(metrics.subject_length),
            subject_status(metrics.subject_length),
            "SUBJECT",
        ),
        words: entry(
            count(metrics.word_count),
            review_unless((50..=150).contains(&metrics.word_count)),
            "WORDS",
        ),
        sentences: entry(
            count(metrics.sentence_count),
            review_unless(metrics.sentence_count >= 3),
            "SENTENCES",
        ),
        paragraphs: entry(
            count(metrics.paragraph_count),
            review_unless(metrics.paragraph_count >= 2),
            "PARAGRAPHS",
        ),
        lines: entry(count(metrics.line_count), MetricStatus::Optimal, "LINES"),
        read_time: entry(
            MetricValue::Text(format!("{} min", metrics.read_time_minutes)),
            MetricStatus::Optimal,
            "READ TIME",
        ),
        links: entry(count(metrics.link_count), MetricStatus::Optimal, "LINKS"),
        questions: entry(
            count(metrics.question_count),
            MetricStatus::Optimal,
            "QUESTIONS",
        ),
        spam_words: entry(
            count(metrics.spam_words.len()),
            review_unless(metrics.spam_words.is_empty()),
            "SPAM WORDS",
        ),
        personal_tags: entry(
            count(metrics.personalization_tag_count),
            review_unless(metrics.personalization_tag_count == 0),
            "PERSONAL TAGS",
        ),
        uppercase: entry(
            count(metrics.uppercase_count),
            review_unless(metrics.uppercase_count <= 3),
            "UPPERCASE",
        ),
        readability: entry(
            // Truncated for display; the status compares the float score
            MetricValue::Count(metrics.readability_score.trunc() as i64),
            review_unless(metrics.readability_score >= 60.0),
            "READABILITY",
        ),
    }
}

/// Subject line status, 20-60 characters inclusive is optimal
pub fn subject_status(subject_length: usize) -> MetricStatus {
    if (20..=60).contains(&subject_length) {
        MetricStatus::Optimal
    } else if subject_length < 20 {
        MetricStatus::TooShort
    } else {
        MetricStatus::TooLong
    }
}

fn entry(value: MetricValue, status: MetricStatus, label: &str) -> MetricEntry {
    MetricEntry {
        value,
        status,
        label: label.to_string(),
    }
}

fn count(n: usize) -> MetricValue {
    MetricValue::Count(n as i64)
}

fn review_unless(optimal: bool) -> MetricStatus {
    if optimal {
        MetricStatus::Optimal
    } else {
        MetricStatus::Review
    }
}
