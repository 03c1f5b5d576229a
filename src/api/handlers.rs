//! API handlers

use axum::extract::{Path, State};
use axum::response::Response;

use crate::api::encode::encode;
use crate::api::AppState;
use crate::validate::validate;

/// Recommendation lookup: validate the pair, resolve, encode.
///
/// Validation failures never reach the resolver; resolver errors pass to the
/// encoder unchanged.
pub async fn recommend(
    State(state): State<AppState>,
    Path((user_key, product_key)): Path<(String, String)>,
) -> Response {
    let result = match validate(Some(&user_key), Some(&product_key)) {
        Ok(req) => state.resolver.resolve(&req).await,
        Err(err) => Err(err),
    };

    encode(result)
}

/// Fixed diagnostic response, independent of the serving pipeline.
pub async fn probe() -> &'static str {
    "size"
}
