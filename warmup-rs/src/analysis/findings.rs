//! Finding generation
//!
//! Four independent rule sets over the extracted metrics, plus the
//! positive-feedback aggregate and the static warmup strategies. Each rule
//! set is a pure function of the metrics record so it can be tested
//! against synthetic values.

use super::types::{ExtractedMetrics, Finding, Priority, WarmupStrategy};

/// Issues that need urgent attention before sending
pub fn critical_issues(metrics: &ExtractedMetrics) -> Vec<Finding> {
    let mut issues = Vec::new();

    if metrics.spam_probability > 0.5 {
        issues.push(Finding {
            priority: Priority::High,
            category: "Spam Risk".to_string(),
            found: format!(
                "High spam probability ({:.1}%)",
                metrics.spam_probability * 100.0
            ),
            recommendation: "Content may be flagged as spam. Reduce promotional language and avoid spam triggers.".to_string(),
        });
    }

    if !metrics.spam_words.is_empty() {
        issues.push(Finding {
            priority: Priority::High,
            category: "Spam Trigger Words".to_string(),
            found: metrics.spam_words.join(", "),
            recommendation: format!(
                "Replace {} spam-triggering words with professional alternatives",
                metrics.spam_words.len()
            ),
        });
    }

    issues
}

/// Recommended improvements
pub fn warnings(metrics: &ExtractedMetrics) -> Vec<Finding> {
    let mut warnings = Vec::new();

    if !metrics.negative_words.is_empty() {
        warnings.push(Finding {
            priority: Priority::Low,
            category: "Negative Tone Detected".to_string(),
            found: "Email content may sound negative or problematic".to_string(),
            recommendation: "Rephrase to maintain a positive, solution-oriented tone while addressing issues".to_string(),
        });
    }

    if metrics.personalization_tag_count > 0 {
        warnings.push(Finding {
            priority: Priority::Medium,
            category: "Unfilled Personalization Tags".to_string(),
            found: format!(
                "{} personalization tags found",
                metrics.personalization_tag_count
            ),
            recommendation: "Replace all [placeholder] tags with actual recipient data before sending to improve engagement".to_string(),
        });
    }

    warnings
}

/// Optional enhancements; any subset may fire
pub fn suggestions(metrics: &ExtractedMetrics) -> Vec<Finding> {
    let mut suggestions = Vec::new();

    if metrics.word_count < 50 {
        suggestions.push(Finding {
            priority: Priority::Suggestion,
            category: "Content Length".to_string(),
            found: "Email content is quite short".to_string(),
            recommendation: "Consider adding more valuable content to improve engagement"
                .to_string(),
        });
    }

    if metrics.question_count < 1 {
        suggestions.push(Finding {
            priority: Priority::Suggestion,
            category: "Engagement".to_string(),
            found: "No engaging questions detected".to_string(),
            recommendation: "Add questions to encourage recipient interaction".to_string(),
        });
    }

    if metrics.paragraph_count < 3 {
        suggestions.push(Finding {
            priority: Priority::Suggestion,
            category: "Formatting".to_string(),
            found: "Could use better paragraph structure".to_string(),
            recommendation: "Add more line breaks to improve readability".to_string(),
        });
    }

    if metrics.subject_length > 60 {
        suggestions.push(Finding {
            priority: Priority::Suggestion,
            category: "Subject Line".to_string(),
            found: "Subject line is too long".to_string(),
            recommendation: "Shorten subject line to under 60 characters for better open rates"
                .to_string(),
        });
    } else if metrics.subject_length < 20 {
        suggestions.push(Finding {
            priority: Priority::Suggestion,
            category: "Subject Line".to_string(),
            found: "Subject line is too short".to_string(),
            recommendation: "Make subject line more descriptive (20-60 characters recommended)"
                .to_string(),
        });
    }

    suggestions
}

/// Checks the draft passed, never empty
pub fn passed_checks(metrics: &ExtractedMetrics) -> Vec<String> {
    let mut passed = Vec::new();

    if (30..=200).contains(&metrics.word_count) {
        passed.push("Optimal word count".to_string());
    }

    if metrics.uppercase_count <= 3 {
        passed.push("Good uppercase usage".to_string());
    }

    if metrics.paragraph_count >= 2 {
        passed.push("Good paragraph structure".to_string());
    }

    if metrics.question_count > 0 {
        passed.push("Engaging questions present".to_string());
    }

    if metrics.link_count == 0 {
        passed.push("No suspicious links".to_string());
    }

    if (20..=60).contains(&metrics.subject_length) {
        passed.push("Good subject line length".to_string());
    }

    if passed.is_empty() {
        passed.push("Basic structure OK".to_string());
    }

    passed
}

/// Single aggregate of what the draft does well
pub fn positive_aspects(metrics: &ExtractedMetrics) -> Finding {
    let mut feedback = Vec::new();

    if metrics.personalization_tag_count > 0 {
        feedback.push("personalization tags");
    }

    if metrics.question_count > 0 {
        feedback.push("engaging questions");
    }

    if metrics.sentence_count >= 3 {
        feedback.push("good sentence structure");
    }

    if metrics.paragraph_count >= 3 {
        feedback.push("excellent paragraph formatting");
    } else if metrics.paragraph_count >= 2 {
        feedback.push("good paragraph structure");
    }

    if (50..=150).contains(&metrics.word_count) {
        feedback.push("optimal content length");
    }

    if (20..=60).contains(&metrics.subject_length) {
        feedback.push("optimal subject length");
    }

    let (found, recommendation) = if feedback.is_empty() {
        (
            "No specific positive aspects identified".to_string(),
            "Focus on adding personalization and engagement elements".to_string(),
        )
    } else {
        (
            format!("Well done on: {}", feedback.join(", ")),
            "Continue maintaining these good practices in your email templates".to_string(),
        )
    };

    Finding {
        priority: Priority::None,
        category: "Positive Feedback".to_string(),
        found,
        recommendation,
    }
}

/// Warmup practices, independent of the analyzed draft
pub fn warmup_strategies() -> Vec<WarmupStrategy> {
    vec![
        WarmupStrategy {
            title: "Gradual Warmup Process".to_string(),
            description: "Start with 5-10 emails daily, gradually increasing volume over 4-8 weeks. Monitor engagement metrics closely and adjust based on performance.".to_string(),
        },
        WarmupStrategy {
            title: "Authentication Setup".to_string(),
            description: "Configure SPF, DKIM, and DMARC records properly. This builds trust with email providers and improves deliverability rates significantly.".to_string(),
        },
        WarmupStrategy {
            title: "List Hygiene & Engagement".to_string(),
            description: "Regularly clean your email list. Remove inactive subscribers, validate email addresses, and monitor open/click rates to maintain list quality.".to_string(),
        },
        WarmupStrategy {
            title: "Content Optimization".to_string(),
            description: "Personalize content, avoid spam triggers, maintain a clean professional tone, and ensure mobile responsiveness for better engagement.".to_string(),
        },
    ]
}
