//! Path parameter validation
//!
//! Absent or empty keys fall back to the `"x"` sentinel rather than failing;
//! the length bound is a hardening addition on top of that permissive policy.

use crate::types::{RecommendationRequest, DEFAULT_KEY, MAX_KEY_LEN};
use crate::{Error, Result};

/// Normalize and validate the two path parameters into a request.
pub fn validate(
    raw_user_key: Option<&str>,
    raw_product_key: Option<&str>,
) -> Result<RecommendationRequest> {
    Ok(RecommendationRequest {
        user_key: validate_key(raw_user_key, "userKey")?,
        product_key: validate_key(raw_product_key, "productKey")?,
    })
}

fn validate_key(raw: Option<&str>, name: &str) -> Result<String> {
    match raw {
        None | Some("") => Ok(DEFAULT_KEY.to_string()),
        Some(key) if key.chars().count() > MAX_KEY_LEN => Err(Error::invalid_key(format!(
            "{} exceeds {} characters",
            name, MAX_KEY_LEN
        ))),
        Some(key) => Ok(key.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_ordinary_keys() {
        let req = validate(Some("u1"), Some("p1")).unwrap();
        assert_eq!(req.user_key, "u1");
        assert_eq!(req.product_key, "p1");
    }

    #[test]
    fn substitutes_sentinel_for_missing_or_empty() {
        let req = validate(None, Some("")).unwrap();
        assert_eq!(req.user_key, "x");
        assert_eq!(req.product_key, "x");
    }

    #[test]
    fn empty_key_behaves_like_sentinel_key() {
        let via_empty = validate(Some(""), Some("foo")).unwrap();
        let via_sentinel = validate(Some("x"), Some("foo")).unwrap();
        assert_eq!(via_empty, via_sentinel);
    }

    #[test]
    fn rejects_oversized_keys() {
        let long = "k".repeat(MAX_KEY_LEN + 1);
        let result = validate(Some(&long), Some("p1"));
        assert!(matches!(result, Err(Error::InvalidKey(_))));
    }

    #[test]
    fn accepts_keys_at_the_bound() {
        let exact = "k".repeat(MAX_KEY_LEN);
        assert!(validate(Some(&exact), Some("p1")).is_ok());
    }

    #[test]
    fn bound_counts_characters_not_bytes() {
        let multibyte = "é".repeat(MAX_KEY_LEN);
        assert!(validate(Some(&multibyte), Some("p1")).is_ok());
    }
}
