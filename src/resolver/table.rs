//! In-memory score table backend
//!
//! Loads a JSON score table from local disk at startup. Pairs not present in
//! the table fall back to the configured default score, keeping the serving
//! path's permissive posture.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

use crate::types::{RecommendationRequest, RecommendationResult};
use crate::Result;

use super::Resolver;

/// One row of the on-disk score table.
#[derive(Debug, Deserialize)]
struct ScoreEntry {
    user_key: String,
    product_key: String,
    score: f64,
}

/// Local score table resolver
pub struct TableResolver {
    scores: HashMap<(String, String), f64>,
    default_score: f64,
}

impl TableResolver {
    pub fn new(default_score: f64) -> Self {
        Self {
            scores: HashMap::new(),
            default_score,
        }
    }

    /// Load the table from a JSON file of `{user_key, product_key, score}` rows.
    pub async fn from_file(path: impl AsRef<Path>, default_score: f64) -> Result<Self> {
        let data = fs::read(path.as_ref()).await?;
        let entries: Vec<ScoreEntry> = serde_json::from_slice(&data)?;

        let mut resolver = Self::new(default_score);
        for entry in entries {
            resolver.insert(entry.user_key, entry.product_key, entry.score);
        }

        tracing::info!(
            rows = resolver.scores.len(),
            path = %path.as_ref().display(),
            "Loaded score table",
        );

        Ok(resolver)
    }

    pub fn insert(&mut self, user_key: String, product_key: String, score: f64) {
        self.scores.insert((user_key, product_key), score);
    }
}

#[async_trait]
impl Resolver for TableResolver {
    async fn resolve(&self, req: &RecommendationRequest) -> Result<RecommendationResult> {
        let key = (req.user_key.clone(), req.product_key.clone());
        let score = self.scores.get(&key).copied().unwrap_or(self.default_score);
        Ok(RecommendationResult::new(score))
    }
}
