//! Text normalization and metric extraction
//!
//! Counting metrics run over the raw draft text; only the word count uses
//! the normalized form. Trigger-word detection is a case-insensitive
//! substring check against two fixed vocabularies.

use regex::Regex;

use super::types::ExtractedMetrics;
use crate::error::Result;

/// Terms historically associated with unsolicited promotional email
pub const SPAM_TRIGGER_WORDS: [&str; 16] = [
    "promotion",
    "free",
    "winner",
    "urgent",
    "discount",
    "buy now",
    "limited time",
    "act now",
    "click here",
    "offer",
    "cash",
    "prize",
    "risk-free",
    "guaranteed",
    "special promotion",
    "limited offer",
];

/// Terms that make a draft read negative or apologetic
pub const NEGATIVE_TONE_WORDS: [&str; 17] = [
    "problem",
    "issue",
    "failed",
    "wrong",
    "error",
    "broken",
    "complaint",
    "trouble",
    "difficulty",
    "can't",
    "won't",
    "sorry",
    "apologize",
    "mistake",
    "fix",
    "repair",
    "spam folder",
];

/// Words-per-minute basis for read time estimation
const READ_WPM: f64 = 200.0;

/// Metric extraction engine holding the compiled patterns
pub struct MetricExtractor {
    whitespace_re: Regex,
    sentence_re: Regex,
    link_re: Regex,
    uppercase_re: Regex,
    tag_re: Regex,
}

impl MetricExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            whitespace_re: Regex::new(r"[ \t]+")?,
            sentence_re: Regex::new(r"[.!?]+")?,
            link_re: Regex::new(
                r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+",
            )?,
            uppercase_re: Regex::new(r"\b[A-Z]{2,}\b")?,
            tag_re: Regex::new(r"\[[^\]]+\]")?,
        })
    }

    /// Collapse runs of spaces/tabs to a single space and trim.
    ///
    /// Newlines are kept intact: line and paragraph metrics depend on them.
    pub fn normalize(&self, text: &str) -> String {
        self.whitespace_re.replace_all(text, " ").trim().to_string()
    }

    /// Extract all text-derived metrics.
    ///
    /// `text` is the raw draft (subject and body combined), `normalized`
    /// its [`normalize`](Self::normalize)d form. The spam probability is
    /// not known here and is left at its default.
    pub fn extract(
        &self,
        text: &str,
        normalized: &str,
        subject: &str,
        body: &str,
    ) -> ExtractedMetrics {
        let word_count = normalized.split_whitespace().count();

        // Split on terminal punctuation runs, drop blank fragments.
        // "..." therefore yields zero sentences and an unpunctuated
        // non-blank text yields one; the health score is calibrated
        // against exactly this counting.
        let sentence_count = self
            .sentence_re
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();

        let paragraph_count = text
            .split('\n')
            .filter(|l| !l.trim().is_empty())
            .count();
        let line_count = text.split('\n').count();

        let question_count = text.matches('?').count();
        let link_count = self.link_re.find_iter(text).count();
        let uppercase_count = self.uppercase_re.find_iter(text).count();
        let personalization_tag_count = self.tag_re.find_iter(text).count();

        let text_lower = text.to_lowercase();
        let spam_words: Vec<&'static str> = SPAM_TRIGGER_WORDS
            .iter()
            .copied()
            .filter(|w| text_lower.contains(w))
            .collect();
        let negative_words: Vec<&'static str> = NEGATIVE_TONE_WORDS
            .iter()
            .copied()
            .filter(|w| text_lower.contains(w))
            .collect();

        let subject_length = subject_length(subject, body);

        let avg_sentence_length = word_count as f64 / sentence_count.max(1) as f64;
        let readability_score = (100.0 - (avg_sentence_length - 10.0) * 2.0).clamp(0.0, 100.0);

        let read_time_minutes = ((word_count as f64 / READ_WPM).round() as u32).max(1);

        ExtractedMetrics {
            word_count,
            sentence_count,
            paragraph_count,
            line_count,
            question_count,
            link_count,
            uppercase_count,
            personalization_tag_count,
            spam_words,
            negative_words,
            subject_length,
            readability_score,
            read_time_minutes,
            ..Default::default()
        }
    }
}

/// Subject length in characters.
///
/// An empty subject falls back to the body's first non-blank line, so
/// drafts pasted with the subject inline still get a length check.
fn subject_length(subject: &str, body: &str) -> usize {
    if !subject.is_empty() {
        return subject.chars().count();
    }

    body.split('\n')
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(|l| l.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> MetricExtractor {
        MetricExtractor::new().unwrap()
    }

    fn extract(text: &str) -> ExtractedMetrics {
        let ex = extractor();
        let normalized = ex.normalize(text);
        ex.extract(text, &normalized, "", text)
    }

    #[test]
    fn test_normalize_collapses_spaces_and_tabs() {
        let ex = extractor();
        assert_eq!(ex.normalize("a  b\t\tc"), "a b c");
    }

    #[test]
    fn test_normalize_preserves_newlines() {
        let ex = extractor();
        assert_eq!(ex.normalize("a  b\nc  d"), "a b\nc d");
    }

    #[test]
    fn test_normalize_empty() {
        let ex = extractor();
        assert_eq!(ex.normalize(""), "");
        assert_eq!(ex.normalize("   \t  "), "");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(extract("one two  three\nfour").word_count, 4);
        assert_eq!(extract("").word_count, 0);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(extract("One. Two! Three?").sentence_count, 3);
        assert_eq!(extract("Hello!!! World").sentence_count, 2);
        assert_eq!(extract("no punctuation here").sentence_count, 1);
        assert_eq!(extract("...").sentence_count, 0);
        assert_eq!(extract("").sentence_count, 0);
    }

    #[test]
    fn test_paragraph_and_line_count() {
        let m = extract("first\n\nsecond\nthird\n");
        assert_eq!(m.paragraph_count, 3);
        assert_eq!(m.line_count, 5);
    }

    #[test]
    fn test_single_line_is_one_paragraph() {
        let m = extract("just one line");
        assert_eq!(m.paragraph_count, 1);
        assert_eq!(m.line_count, 1);
    }

    #[test]
    fn test_question_count() {
        assert_eq!(extract("What? Really?? Ok.").question_count, 3);
    }

    #[test]
    fn test_link_count() {
        let m = extract("see https://example.com/a?x=1 and http://foo.bar");
        assert_eq!(m.link_count, 2);
        assert_eq!(extract("no links here").link_count, 0);
    }

    #[test]
    fn test_uppercase_count() {
        let m = extract("FREE MONEY from A Nice Person, OK?");
        assert_eq!(m.uppercase_count, 3);
    }

    #[test]
    fn test_personalization_tags() {
        assert_eq!(extract("Hi [Name], from [Company Name]").personalization_tag_count, 2);
        assert_eq!(extract("empty [] brackets").personalization_tag_count, 0);
    }

    #[test]
    fn test_spam_words_vocabulary_order_and_dedup() {
        let m = extract("This offer is free, completely free");
        assert_eq!(m.spam_words, vec!["free", "offer"]);
    }

    #[test]
    fn test_spam_words_case_insensitive() {
        let m = extract("CLICK HERE for a PRIZE");
        assert_eq!(m.spam_words, vec!["click here", "prize"]);
    }

    #[test]
    fn test_negative_words() {
        let m = extract("Sorry about the problem, we can't fix it");
        assert_eq!(m.negative_words, vec!["problem", "can't", "sorry", "fix"]);
    }

    #[test]
    fn test_subject_length_explicit() {
        let ex = extractor();
        let m = ex.extract("Héllo", "Héllo", "Héllo", "body");
        assert_eq!(m.subject_length, 5);
    }

    #[test]
    fn test_subject_length_falls_back_to_body() {
        let ex = extractor();
        let m = ex.extract("x", "x", "", "\n\n  First real line  \nsecond");
        assert_eq!(m.subject_length, "First real line".chars().count());
    }

    #[test]
    fn test_subject_length_blank_body() {
        let ex = extractor();
        let m = ex.extract("", "", "", "   \n\t\n");
        assert_eq!(m.subject_length, 0);
    }

    #[test]
    fn test_readability_clamped() {
        // 10 words in 1 sentence: 100 - (10 - 10) * 2 = 100
        let m = extract("one two three four five six seven eight nine ten");
        assert_eq!(m.readability_score, 100.0);

        // 60 words, one sentence: 100 - 100 = 0 after clamping
        let long = "word ".repeat(60);
        assert_eq!(extract(&long).readability_score, 0.0);
    }

    #[test]
    fn test_read_time_minimum_one() {
        assert_eq!(extract("").read_time_minutes, 1);
        assert_eq!(extract("short note").read_time_minutes, 1);
    }

    #[test]
    fn test_read_time_scales_with_words() {
        let long = "word ".repeat(400);
        assert_eq!(extract(&long).read_time_minutes, 2);
    }
}
