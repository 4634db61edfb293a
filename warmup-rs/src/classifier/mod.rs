//! Spam classification
//!
//! Adapter around a pre-trained Bayesian text classifier. The model is an
//! opaque dependency of the analysis pipeline: given normalized text it
//! returns a spam probability in [0, 1]. Training happens offline.

pub mod model;
pub mod types;

pub use model::{BayesianModel, SpamModel};
pub use types::{ModelArtifact, TokenCounts};
