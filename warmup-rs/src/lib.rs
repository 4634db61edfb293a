//! warmup-rs: Email content health analyzer
//!
//! Scores outbound email drafts for deliverability and engagement risk
//! before they are sent.
//!
//! # Features
//!
//! - **Content Metrics**: Word, sentence, paragraph, link, question and
//!   uppercase counts plus trigger-word detection over the raw draft
//! - **Spam Prediction**: Pre-trained Bayesian text classifier, loaded
//!   once at startup and shared read-only across requests
//! - **Health Score**: Single 0-100 score with categorized findings
//!   (critical issues, warnings, suggestions, passed checks)
//! - **HTTP API**: Async analyze endpoint with Axum
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use warmup_rs::analysis::EmailAnalyzer;
//! use warmup_rs::classifier::BayesianModel;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = Arc::new(BayesianModel::load("models/spam_model.json")?);
//!     let analyzer = EmailAnalyzer::new(model)?;
//!
//!     let report = analyzer.analyze("Quick question", "Hi [FirstName], do you have time this week?");
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`analysis`]: Metric extraction, scoring and report generation
//! - [`classifier`]: Pre-trained spam probability model
//! - [`api`]: HTTP API surface
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod analysis;
pub mod api;
pub mod classifier;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use analysis::{AnalysisReport, EmailAnalyzer};
pub use classifier::{BayesianModel, SpamModel};
pub use config::Config;
pub use error::{Result, WarmupError};
