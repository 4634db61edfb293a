//! Classifier artifact types

use serde::{Deserialize, Serialize};

/// Per-token class counts from the offline training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCounts {
    /// Stemmed token
    pub token: String,
    /// Occurrences in spam training messages
    pub spam: u32,
    /// Occurrences in ham training messages
    pub ham: u32,
}

/// On-disk model artifact
///
/// The persisted state of a trained Bayesian text classifier: the token
/// vocabulary with class counts plus how many messages of each class it
/// was trained on. Produced offline; this crate only loads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Spam messages seen during training
    pub spam_messages: u32,
    /// Ham messages seen during training
    pub ham_messages: u32,
    /// Token vocabulary with per-class counts
    pub tokens: Vec<TokenCounts>,
}
