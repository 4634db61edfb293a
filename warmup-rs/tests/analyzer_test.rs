//! Integration tests for the analysis pipeline

use std::sync::Arc;
use warmup_rs::analysis::{EmailAnalyzer, MetricStatus, MetricValue, Priority};
use warmup_rs::classifier::SpamModel;

/// Fixed-probability model so pipeline behavior is deterministic
struct FixedModel(f64);

impl SpamModel for FixedModel {
    fn predict_proba(&self, _text: &str) -> f64 {
        self.0
    }
}

fn analyzer_with(probability: f64) -> EmailAnalyzer {
    EmailAnalyzer::new(Arc::new(FixedModel(probability))).unwrap()
}

#[test]
fn test_score_stays_in_bounds() {
    let drafts = [
        ("", ""),
        ("FREE OFFER", "FREE CASH! BUY NOW! CLICK HERE! URGENT! WINNER! PRIZE!"),
        ("Hello", "A perfectly ordinary note.\n\nNothing to see here."),
    ];

    for p in [0.0, 0.5, 1.0] {
        let analyzer = analyzer_with(p);
        for (subject, body) in drafts {
            let report = analyzer.analyze(subject, body);
            assert!(report.template_analytics.email_health_score <= 100);
        }
    }
}

#[test]
fn test_empty_draft() {
    let report = analyzer_with(0.0).analyze("", "");
    let metrics = &report.template_analytics.metrics;

    assert_eq!(metrics.words.value, MetricValue::Count(0));
    assert_eq!(metrics.sentences.value, MetricValue::Count(0));
    assert_eq!(metrics.paragraphs.value, MetricValue::Count(0));
    assert_eq!(metrics.subject.value, MetricValue::Count(0));
    assert_eq!(metrics.subject.status, MetricStatus::TooShort);

    // At all-zero metrics the uppercase and link checks still pass
    assert_eq!(
        report.detailed_analysis.passed_checks,
        vec!["Good uppercase usage", "No suspicious links"]
    );

    assert_eq!(report.template_analytics.email_health_score, 100);
    assert_eq!(
        report.template_analytics.status,
        "Excellent - Your template is ready for sending!"
    );
}

#[test]
fn test_analysis_is_idempotent() {
    let analyzer = analyzer_with(0.37);
    let subject = "Quarterly check-in";
    let body = "Hi [FirstName],\n\nHow did the rollout go? Happy to help.\n\nBest,\nSam";

    let first = serde_json::to_string(&analyzer.analyze(subject, body)).unwrap();
    let second = serde_json::to_string(&analyzer.analyze(subject, body)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_spammy_draft_scenario() {
    let analyzer = analyzer_with(0.9);
    let report = analyzer.analyze(
        "FREE OFFER",
        "FREE MONEY! Click here now! [Name], this is a limited time offer!!!",
    );

    let issues = &report.detailed_analysis.critical_issues;
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].category, "Spam Risk");
    assert_eq!(issues[0].priority, Priority::High);
    assert_eq!(issues[1].category, "Spam Trigger Words");
    assert_eq!(issues[1].priority, Priority::High);
    // Vocabulary order, deduplicated
    assert_eq!(issues[1].found, "free, limited time, click here, offer");

    let warnings = &report.detailed_analysis.warnings;
    assert!(warnings
        .iter()
        .any(|w| w.priority == Priority::Medium && w.found == "1 personalization tags found"));

    let metrics = &report.template_analytics.metrics;
    assert_eq!(metrics.spam_words.value, MetricValue::Count(4));
    assert_eq!(metrics.spam_words.status, MetricStatus::Review);
    assert_eq!(metrics.personal_tags.value, MetricValue::Count(1));

    // 100 - trunc(0.9 * 50) - 4 trigger words * 5 - 4 uppercase words
    assert_eq!(report.template_analytics.email_health_score, 31);
    assert_eq!(
        report.template_analytics.status,
        "Needs Work - Review content carefully"
    );
}

#[test]
fn test_subject_status_boundaries() {
    let analyzer = analyzer_with(0.0);
    let cases = [
        (19, MetricStatus::TooShort),
        (20, MetricStatus::Optimal),
        (60, MetricStatus::Optimal),
        (61, MetricStatus::TooLong),
    ];

    for (len, expected) in cases {
        let subject = "x".repeat(len);
        let report = analyzer.analyze(&subject, "A short body.");
        let entry = &report.template_analytics.metrics.subject;
        assert_eq!(entry.value, MetricValue::Count(len as i64));
        assert_eq!(entry.status, expected, "subject length {}", len);
    }
}

#[test]
fn test_friendly_draft_scenario() {
    let analyzer = analyzer_with(0.1);
    let report = analyzer.analyze(
        "",
        "Hi Alice, quick question: are you available Tuesday? Let's chat. Looking forward to it.",
    );

    assert!(report.detailed_analysis.critical_issues.is_empty());
    assert!(report.detailed_analysis.warnings.is_empty());

    let passed = &report.detailed_analysis.passed_checks;
    assert!(passed.contains(&"Engaging questions present".to_string()));
    assert!(passed.contains(&"No suspicious links".to_string()));

    assert!(report.positive_aspects.found.contains("engaging questions"));
}

#[test]
fn test_each_trigger_word_costs_five_points() {
    let analyzer = analyzer_with(0.0);
    let words = ["free", "cash", "prize", "urgent", "discount"];

    let mut previous = analyzer.analyze("", "plain text").template_analytics.email_health_score;
    for k in 1..=words.len() {
        let body = words[..k].join(" ");
        let score = analyzer.analyze("", &body).template_analytics.email_health_score;
        assert_eq!(previous - score, 5, "after adding {} trigger words", k);
        previous = score;
    }
}

#[test]
fn test_detection_metrics_use_raw_text() {
    let analyzer = analyzer_with(0.0);
    let report = analyzer.analyze("", "CHECK   THIS:\thttps://example.com ok?\n\nBye");
    let metrics = &report.template_analytics.metrics;

    // Whitespace collapsing must not touch line, link, question or
    // uppercase detection
    assert_eq!(metrics.lines.value, MetricValue::Count(5));
    assert_eq!(metrics.links.value, MetricValue::Count(1));
    assert_eq!(metrics.questions.value, MetricValue::Count(1));
    assert_eq!(metrics.uppercase.value, MetricValue::Count(2));
}
