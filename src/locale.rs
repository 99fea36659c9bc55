//! Locale collaborator, exposed verbatim through the page.

use rustc_hash::FxHashMap;

/// Language tag plus a phrase table.
///
/// The assembly buffer adds no behavior on top; [`crate::Page::locale`] is a
/// plain pass-through so view code can reach the translation service it was
/// constructed with.
#[derive(Debug, Clone)]
pub struct Locale {
    lang: String,
    phrases: FxHashMap<String, String>,
}

impl Locale {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            phrases: FxHashMap::default(),
        }
    }

    /// Attach a phrase table.
    pub fn with_phrases<I, K, V>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.phrases
            .extend(phrases.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Language tag, e.g. `en` or `ru-RU`.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Translated phrase for `key`, or `None` when the table has no entry.
    pub fn phrase(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }
}
