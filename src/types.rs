//! Core types for recserve

use serde::{Deserialize, Serialize};

/// Fallback substituted for an absent or empty path parameter.
pub const DEFAULT_KEY: &str = "x";

/// Upper bound on key length; longer keys are rejected.
pub const MAX_KEY_LEN: usize = 256;

/// A validated (user, product) lookup pair, built per request and discarded
/// after the response is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub user_key: String,
    pub product_key: String,
}

/// The resolver's answer for one pair. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub score: f64,
}

impl RecommendationResult {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

impl std::fmt::Display for RecommendationResult {
    /// Plain-text body form: `0.42` prints as `"0.42"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.score)
    }
}
