//! Recserve - a recommendation-lookup HTTP service
//!
//! Recserve answers one question over HTTP: what is the recommendation
//! score for a (user, product) pair? The serving path is:
//! - Path parameter validation with permissive sentinel defaults
//! - Score resolution behind a pluggable `Resolver` boundary
//! - A single encoder mapping results and failures to HTTP responses

pub mod api;
pub mod config;
pub mod error;
pub mod resolver;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
