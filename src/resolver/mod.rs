//! Recommendation resolver boundary
//!
//! The scoring system behind a recommendation (model inference, database
//! join, ...) lives outside this service; the serving path only depends on
//! this trait. Backends must be safe to call concurrently for distinct
//! requests and must not require any ordering across calls.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::types::{RecommendationRequest, RecommendationResult};
use crate::Result;

pub mod remote;
pub mod table;

/// Resolver backend trait
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Produce a score for the validated (user, product) pair.
    ///
    /// Fails with `Error::ResolverUnavailable` when the external data source
    /// cannot be reached and `Error::Internal` on unexpected failure.
    async fn resolve(&self, req: &RecommendationRequest) -> Result<RecommendationResult>;
}

/// Resolver configuration
#[derive(Debug, Clone)]
pub enum ResolverConfig {
    Table {
        scores_path: Option<PathBuf>,
        default_score: f64,
    },
    Remote {
        endpoint: String,
        timeout_secs: u64,
    },
}

/// Create a resolver backend from config
pub async fn create_resolver(config: ResolverConfig) -> Result<Box<dyn Resolver>> {
    match config {
        ResolverConfig::Table {
            scores_path,
            default_score,
        } => {
            let backend = match scores_path {
                Some(path) => table::TableResolver::from_file(&path, default_score).await?,
                None => table::TableResolver::new(default_score),
            };
            Ok(Box::new(backend))
        }
        ResolverConfig::Remote {
            endpoint,
            timeout_secs,
        } => {
            let backend = remote::RemoteResolver::new(endpoint, timeout_secs)?;
            Ok(Box::new(backend))
        }
    }
}
