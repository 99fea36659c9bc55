//! Per-render registry of already-emitted asset URLs.

use rustc_hash::FxHashSet;

/// Tracks which resolved asset URLs have been registered this render.
///
/// Membership is exact string equality on the *resolved* URL, after
/// default-directory joining and CDN prefixing. Append-only for the life of
/// the render; discarded with the page.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    seen: FxHashSet<String>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolved URL. Returns `true` on first registration,
    /// `false` when the URL was already seen (caller must skip emission).
    pub fn register(&mut self, url: &str) -> bool {
        self.seen.insert(url.to_string())
    }

    /// Check membership without registering.
    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
