//! Canonical URL derivation from routing state.
//!
//! Pages (and subpages) declare a canonical URL for search indexing by
//! running an ordered rule set against the current request. The rules are
//! fully optional and evaluated in a fixed order; the first applicable rule
//! determines the result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Router, coerce_int};

/// Rule set driving canonical URL derivation.
///
/// Fields hold raw values and are coerced with best-effort integer
/// conversion at evaluation time, so rule sets can come from loosely typed
/// page configuration without validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalRules {
    /// Highest path-segment index to include. When the segment at this
    /// index exists, the canonical URL is the path truncated after it,
    /// query string discarded.
    pub url_go_max: Option<Value>,
    /// When the number of query parameters exceeds this, fall back to the
    /// full current URL.
    pub query_count_max: Option<Value>,
}

impl CanonicalRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url_go_max(mut self, max: impl Into<Value>) -> Self {
        self.url_go_max = Some(max.into());
        self
    }

    pub fn query_count_max(mut self, max: impl Into<Value>) -> Self {
        self.query_count_max = Some(max.into());
        self
    }
}

/// Commit behavior for [`Page::canonical`](crate::Page::canonical).
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalOptions {
    /// Only return the result, never write `rel_canonical`.
    pub return_only: bool,
    /// Overwrite an existing `rel_canonical` value (lets a subpage override
    /// settings inherited from its parent page).
    pub rewrite: bool,
}

impl CanonicalOptions {
    pub fn return_only() -> Self {
        Self {
            return_only: true,
            rewrite: false,
        }
    }

    pub fn rewrite() -> Self {
        Self {
            return_only: false,
            rewrite: true,
        }
    }
}

/// Evaluate `rules` against `router`. `None` means no rule fired and no
/// canonical override was computed.
///
/// Single pass, first match wins:
/// 1. `url_go_max = n`: when segment `n` exists, rebuild the path from
///    segments `0..=n`. A negative `n` behaves as "segment missing".
/// 2. `query_count_max = m`: when the query parameter count exceeds `m`,
///    the full current URL is the canonical value.
pub fn derive(rules: &CanonicalRules, router: &dyn Router) -> Option<String> {
    if let Some(raw) = &rules.url_go_max {
        let max = coerce_int(raw);
        if max >= 0 && router.url_part(max as usize).is_some() {
            let mut canonical = String::new();
            for index in 0..=max as usize {
                canonical.push('/');
                canonical.push_str(router.url_part(index).unwrap_or_default());
            }
            return Some(canonical);
        }
    }

    if let Some(raw) = &rules.query_count_max {
        let max = coerce_int(raw);
        if router.query().len() as i64 > max {
            return Some(router.url().to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RequestUrl;
    use serde_json::json;

    #[test]
    fn test_url_go_max_truncates_path() {
        let router = RequestUrl::parse("/shop/cat/item?page=2");
        let rules = CanonicalRules::new().url_go_max(1);
        assert_eq!(derive(&rules, &router), Some("/shop/cat".to_string()));
    }

    #[test]
    fn test_url_go_max_full_depth() {
        let router = RequestUrl::parse("/shop/cat/item");
        let rules = CanonicalRules::new().url_go_max(2);
        assert_eq!(derive(&rules, &router), Some("/shop/cat/item".to_string()));
    }

    #[test]
    fn test_url_go_max_missing_segment_does_not_fire() {
        let router = RequestUrl::parse("/shop");
        let rules = CanonicalRules::new().url_go_max(3);
        assert_eq!(derive(&rules, &router), None);
    }

    #[test]
    fn test_url_go_max_negative_does_not_fire() {
        let router = RequestUrl::parse("/shop/cat");
        let rules = CanonicalRules::new().url_go_max(-1);
        assert_eq!(derive(&rules, &router), None);
    }

    #[test]
    fn test_url_go_max_coerced_from_string() {
        let router = RequestUrl::parse("/shop/cat/item");
        let rules = CanonicalRules::new().url_go_max("1");
        assert_eq!(derive(&rules, &router), Some("/shop/cat".to_string()));
    }

    #[test]
    fn test_query_count_max_exceeded_falls_back_to_full_url() {
        let router = RequestUrl::parse("/shop?a=1&b=2&c=3");
        let rules = CanonicalRules::new().query_count_max(2);
        assert_eq!(derive(&rules, &router), Some("/shop?a=1&b=2&c=3".to_string()));
    }

    #[test]
    fn test_query_count_max_not_exceeded_stays_undetermined() {
        let router = RequestUrl::parse("/shop?a=1");
        let rules = CanonicalRules::new().query_count_max(2);
        assert_eq!(derive(&rules, &router), None);
    }

    #[test]
    fn test_url_go_max_wins_over_query_rule() {
        let router = RequestUrl::parse("/shop/cat?a=1&b=2&c=3");
        let rules = CanonicalRules::new().url_go_max(0).query_count_max(0);
        assert_eq!(derive(&rules, &router), Some("/shop".to_string()));
    }

    #[test]
    fn test_missing_segment_falls_through_to_query_rule() {
        let router = RequestUrl::parse("/shop?a=1&b=2&c=3");
        let rules = CanonicalRules::new().url_go_max(5).query_count_max(2);
        assert_eq!(derive(&rules, &router), Some("/shop?a=1&b=2&c=3".to_string()));
    }

    #[test]
    fn test_empty_ruleset_is_undetermined() {
        let router = RequestUrl::parse("/shop/cat?a=1");
        assert_eq!(derive(&CanonicalRules::new(), &router), None);
    }

    #[test]
    fn test_ruleset_deserializes_from_loose_config() {
        let rules: CanonicalRules =
            serde_json::from_value(json!({"url_go_max": "2", "query_count_max": 1.0}))
                .unwrap();
        assert_eq!(rules.url_go_max, Some(json!("2")));

        let router = RequestUrl::parse("/a/b/c/d");
        assert_eq!(derive(&rules, &router), Some("/a/b/c".to_string()));
    }

    #[test]
    fn test_ruleset_deserializes_from_toml() {
        let rules: CanonicalRules = toml::from_str("url_go_max = 1").unwrap();
        let router = RequestUrl::parse("/shop/cat/item");
        assert_eq!(derive(&rules, &router), Some("/shop/cat".to_string()));
    }
}
