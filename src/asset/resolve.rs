//! Static asset URL resolution.

/// Default directory for stylesheet URLs.
pub const CSS_DIR: &str = "/style/css/";

/// Default directory for script URLs.
pub const JS_DIR: &str = "/style/js/";

/// Build the final URL for a static resource.
///
/// A URL containing `//:` is taken as already protocol-qualified and
/// returned unmodified. Otherwise a relative URL (no leading `/`) is joined
/// onto `default_dir`, and then a non-empty CDN prefix is prepended.
/// Prefixing happens strictly after the default-directory join.
pub fn resolve(url: &str, default_dir: &str, cdn_prefix: Option<&str>) -> String {
    if url.contains("//:") {
        return url.to_string();
    }

    let mut resolved = if url.starts_with('/') {
        url.to_string()
    } else {
        format!("{default_dir}{url}")
    };

    if let Some(prefix) = cdn_prefix
        && !prefix.is_empty()
    {
        resolved = format!("{prefix}{resolved}");
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_joins_default_dir() {
        assert_eq!(resolve("a.js", JS_DIR, None), "/style/js/a.js");
        assert_eq!(resolve("main.css", CSS_DIR, None), "/style/css/main.css");
    }

    #[test]
    fn test_absolute_path_skips_default_dir() {
        assert_eq!(resolve("/abs/a.js", JS_DIR, None), "/abs/a.js");
    }

    #[test]
    fn test_cdn_prefix_applied_last() {
        assert_eq!(
            resolve("a.js", JS_DIR, Some("https://cdn.x")),
            "https://cdn.x/style/js/a.js"
        );
        assert_eq!(
            resolve("/abs/a.js", JS_DIR, Some("https://cdn.x")),
            "https://cdn.x/abs/a.js"
        );
    }

    #[test]
    fn test_empty_cdn_prefix_ignored() {
        assert_eq!(resolve("a.js", JS_DIR, Some("")), "/style/js/a.js");
    }

    #[test]
    fn test_protocol_qualified_untouched() {
        assert_eq!(
            resolve("http://x//:y", JS_DIR, Some("https://cdn.x")),
            "http://x//:y"
        );
    }

    #[test]
    fn test_plain_scheme_url_is_not_protocol_qualified() {
        // The marker is `//:`, not `://` - a scheme-only URL does not match
        // it and goes through the join step like any relative URL.
        assert_eq!(
            resolve("http://other.host/a.js", JS_DIR, None),
            "/style/js/http://other.host/a.js"
        );
    }
}
