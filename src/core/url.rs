//! Router seam and parsed request URL.
//!
//! The assembly buffer only ever *reads* routing state: path segments by
//! index, parsed query parameters, and the full current URL. That contract
//! is the [`Router`] trait; [`RequestUrl`] is the provided implementation,
//! parsed once and stable for the duration of one render.

use std::sync::OnceLock;

use percent_encoding::percent_decode_str;
use url::Url;

/// Read-only routing state for one render pass.
pub trait Router {
    /// Decoded path segment at `index`, or `None` past the end of the path.
    fn url_part(&self, index: usize) -> Option<&str>;

    /// Parsed query parameters, in request order.
    fn query(&self) -> &[(String, String)];

    /// The full current URL as constructed by the router.
    fn url(&self) -> &str;
}

/// A request URL parsed into segments and query parameters.
///
/// Accepts a path (`/shop/cat?page=2`), a path-relative form (`shop/cat`),
/// or an absolute URL. Segments are percent-decoded; invalid UTF-8 in a
/// segment is kept encoded.
#[derive(Debug, Clone)]
pub struct RequestUrl {
    raw: String,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl RequestUrl {
    pub fn parse(input: &str) -> Self {
        // Dummy base so path-only inputs parse as URLs
        static BASE: OnceLock<Url> = OnceLock::new();
        let base = BASE.get_or_init(|| Url::parse("http://x").expect("static base URL"));

        let (segments, query) = match base.join(input) {
            Ok(parsed) => {
                let segments = parsed
                    .path()
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(decode_segment)
                    .collect();
                let query = parsed
                    .query_pairs()
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect();
                (segments, query)
            }
            // Fallback for inputs the url crate rejects
            Err(_) => {
                let path = input.split(['?', '#']).next().unwrap_or(input);
                let segments = path
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                (segments, Vec::new())
            }
        };

        Self {
            raw: input.to_string(),
            segments,
            query,
        }
    }

    /// All decoded path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

/// Percent-decode one path segment, keeping it as-is on invalid UTF-8.
fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

impl Router for RequestUrl {
    fn url_part(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    fn query(&self) -> &[(String, String)] {
        &self.query
    }

    fn url(&self) -> &str {
        &self.raw
    }
}
