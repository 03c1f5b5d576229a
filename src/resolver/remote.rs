//! Remote scoring service backend

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::types::{RecommendationRequest, RecommendationResult};
use crate::{Error, Result};

use super::Resolver;

#[derive(Debug, Deserialize)]
struct ScorePayload {
    score: f64,
}

/// HTTP upstream resolver
///
/// Expects the scoring service to answer
/// `GET {endpoint}/scores/{user_key}/{product_key}` with `{"score": <f64>}`.
pub struct RemoteResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteResolver {
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Resolver for RemoteResolver {
    async fn resolve(&self, req: &RecommendationRequest) -> Result<RecommendationResult> {
        let url = format!(
            "{}/scores/{}/{}",
            self.endpoint, req.user_key, req.product_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::unavailable(format!("scoring service unreachable: {}", e)))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(Error::unavailable(format!(
                "scoring service returned {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(Error::internal(format!(
                "unexpected scoring service status {}",
                status
            )));
        }

        let payload: ScorePayload = response
            .json()
            .await
            .map_err(|e| Error::internal(format!("undecodable scoring response: {}", e)))?;

        Ok(RecommendationResult::new(payload.score))
    }
}
