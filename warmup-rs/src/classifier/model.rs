//! Pre-trained Bayesian spam model
//!
//! Wraps the vocabulary and class counts produced by the offline training
//! run. Loaded eagerly at startup and immutable afterwards, so it can be
//! shared read-only across concurrent analyses.

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashMap;
use std::path::Path;

use super::types::ModelArtifact;
use crate::error::{Result, WarmupError};

/// Spam probability model, the injection seam for the analyzer
pub trait SpamModel: Send + Sync {
    /// Probability in [0, 1] that the text is spam
    fn predict_proba(&self, text: &str) -> f64;
}

/// Naive-Bayes text classifier over a stemmed token vocabulary
pub struct BayesianModel {
    spam_tokens: HashMap<String, u32>,
    ham_tokens: HashMap<String, u32>,
    spam_messages: u32,
    ham_messages: u32,
    stemmer: Stemmer,
}

impl std::fmt::Debug for BayesianModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesianModel")
            .field("spam_tokens", &self.spam_tokens)
            .field("ham_tokens", &self.ham_tokens)
            .field("spam_messages", &self.spam_messages)
            .field("ham_messages", &self.ham_messages)
            .finish_non_exhaustive()
    }
}

impl BayesianModel {
    /// Load and validate a model artifact from disk.
    ///
    /// A missing or malformed artifact is fatal here so a mis-deployed
    /// service fails at boot, not on the first request.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WarmupError::Model(format!("cannot read artifact {}: {}", path.display(), e))
        })?;

        let artifact: ModelArtifact = serde_json::from_str(&content).map_err(|e| {
            WarmupError::Model(format!("invalid artifact {}: {}", path.display(), e))
        })?;

        Self::from_artifact(artifact)
    }

    /// Build a model from an in-memory artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.spam_messages == 0 || artifact.ham_messages == 0 {
            return Err(WarmupError::Model(
                "artifact must contain training counts for both classes".to_string(),
            ));
        }
        if artifact.tokens.is_empty() {
            return Err(WarmupError::Model(
                "artifact vocabulary is empty".to_string(),
            ));
        }

        let mut spam_tokens = HashMap::new();
        let mut ham_tokens = HashMap::new();
        for entry in artifact.tokens {
            if entry.spam > 0 {
                spam_tokens.insert(entry.token.clone(), entry.spam);
            }
            if entry.ham > 0 {
                ham_tokens.insert(entry.token, entry.ham);
            }
        }

        Ok(Self {
            spam_tokens,
            ham_tokens,
            spam_messages: artifact.spam_messages,
            ham_messages: artifact.ham_messages,
            stemmer: Stemmer::create(Algorithm::English),
        })
    }

    /// Unique tokens in the vocabulary
    pub fn vocabulary_size(&self) -> usize {
        let mut count = self.spam_tokens.len();
        count += self
            .ham_tokens
            .keys()
            .filter(|t| !self.spam_tokens.contains_key(*t))
            .count();
        count
    }

    /// Training message counts (spam, ham)
    pub fn training_counts(&self) -> (u32, u32) {
        (self.spam_messages, self.ham_messages)
    }

    /// Tokenize text into stemmed words
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 3 && s.len() <= 25)
            .map(|s| self.stemmer.stem(s).to_string())
            .collect()
    }
}

impl SpamModel for BayesianModel {
    fn predict_proba(&self, text: &str) -> f64 {
        let tokens = self.tokenize(text);

        let mut spam_sum = 0.0f64;
        let mut ham_sum = 0.0f64;
        let mut count = 0u32;

        for token in &tokens {
            let spam_count = self.spam_tokens.get(token).copied().unwrap_or(0) as f64;
            let ham_count = self.ham_tokens.get(token).copied().unwrap_or(0) as f64;

            // Laplace smoothing
            let p_spam = (spam_count + 1.0) / (self.spam_messages as f64 + 2.0);
            let p_ham = (ham_count + 1.0) / (self.ham_messages as f64 + 2.0);

            spam_sum += p_spam.ln();
            ham_sum += p_ham.ln();
            count += 1;
        }

        // No recognizable tokens: neutral
        if count == 0 {
            return 0.5;
        }

        let avg_spam = spam_sum / count as f64;
        let avg_ham = ham_sum / count as f64;

        // Logistic of the mean log-likelihood difference
        let diff = avg_spam - avg_ham;
        1.0 / (1.0 + (-diff).exp())
    }
}
