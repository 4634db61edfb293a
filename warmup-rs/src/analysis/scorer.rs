//! Health scoring
//!
//! Combines the classifier probability with the lexical spam signals into
//! a single bounded score. Only these three inputs affect the score.

/// Compute the 0-100 health score.
///
/// `100 - trunc(p * 50) - 5 per trigger word - 1 per uppercase word`,
/// clamped to the valid range.
pub fn health_score(spam_probability: f64, spam_word_count: usize, uppercase_count: usize) -> u8 {
    let base = 100
        - (spam_probability * 50.0).trunc() as i64
        - spam_word_count as i64 * 5
        - uppercase_count as i64;

    base.clamp(0, 100) as u8
}

/// Status sentence for a health score
pub fn health_status(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent - Your template is ready for sending!"
    } else if score >= 60 {
        "Good - Minor improvements recommended"
    } else {
        "Needs Work - Review content carefully"
    }
}
