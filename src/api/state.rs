//! API server state

use std::sync::Arc;

use crate::resolver::Resolver;

/// API server state
///
/// The resolver is injected at construction time so tests can substitute
/// failing or canned backends.
#[derive(Clone)]
pub struct AppState {
    /// Recommendation resolver backend
    pub resolver: Arc<dyn Resolver>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self { resolver }
    }
}
