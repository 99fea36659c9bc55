//! The page assembly buffer.
//!
//! A [`Page`] is created once per render pass and borrows its collaborators
//! (locale, router, config) for that pass. Controllers and views write named
//! parts and register assets while building the page; the canonical-URL rule
//! set runs near the end; the rendering step reads the assembled mapping
//! back out with [`Page::parts`].

mod error;
mod parts;

pub use error::PartsError;
pub use parts::Parts;

pub use crate::asset::ScriptOptions;

use serde_json::{Map, Value};

use crate::asset::{self, AssetRegistry, CSS_DIR, JS_DIR};
use crate::config::ConfigSource;
use crate::core::{Router, is_empty};
use crate::debug;
use crate::locale::Locale;
use crate::seo::{self, CanonicalOptions, CanonicalRules};

/// Conventional part receiving `<head>` fragments.
pub const HEAD: &str = "head";

/// Conventional part receiving end-of-body fragments.
pub const BOTTOM: &str = "bottom";

/// Conventional part holding the canonical URL (or the falsy sentinel).
pub const REL_CANONICAL: &str = "rel_canonical";

/// Config key for the CDN prefix applied to resolved asset URLs.
const CDN_PREFIX_KEY: &str = "cdn_prefix";

/// Per-render page assembly buffer.
pub struct Page<'a> {
    parts: Parts,
    settings: Map<String, Value>,
    assets: AssetRegistry,
    locale: &'a Locale,
    router: &'a dyn Router,
    config: &'a dyn ConfigSource,
}

impl<'a> Page<'a> {
    pub fn new(
        locale: &'a Locale,
        router: &'a dyn Router,
        config: &'a dyn ConfigSource,
    ) -> Self {
        Self {
            parts: Parts::new(),
            settings: Map::new(),
            assets: AssetRegistry::new(),
            locale,
            router,
            config,
        }
    }

    // ------------------------------------------------------------------
    // Parts store
    // ------------------------------------------------------------------

    /// Overwrite one part. Returns the stored value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &Value {
        self.parts.set(name, value)
    }

    /// Overwrite every listed part with a clone of `value`.
    pub fn set_all(&mut self, names: &[&str], value: impl Into<Value>) {
        self.parts.set_all(names, value);
    }

    /// (Re)initialize a part as an empty list.
    pub fn push_init(&mut self, name: &str) {
        self.parts.push_init(name);
    }

    /// (Re)initialize a part as a list seeded with `first` (unless empty).
    pub fn push_init_with(&mut self, name: &str, first: impl Into<Value>) {
        self.parts.push_init_with(name, first);
    }

    /// Append a non-empty value to the list at `name`.
    pub fn push(&mut self, name: &str, value: impl Into<Value>) {
        self.parts.push(name, value);
    }

    /// Concatenate onto the string at `name`.
    ///
    /// # Errors
    ///
    /// [`PartsError::TypeMismatch`] when the part holds a non-string value.
    pub fn append(&mut self, name: &str, value: &str) -> Result<&str, PartsError> {
        self.parts.append(name, value)
    }

    /// The assembled mapping, in insertion order.
    pub fn parts(&self) -> &Map<String, Value> {
        self.parts.all()
    }

    /// One part, or `None` if never written.
    pub fn part(&self, name: &str) -> Option<&Value> {
        self.parts.part(name)
    }

    /// Mapping restricted to `names`; absent names map to `Value::Null`.
    pub fn select(&self, names: &[&str]) -> Map<String, Value> {
        self.parts.select(names)
    }

    // ------------------------------------------------------------------
    // Instance settings (separate namespace from parts)
    // ------------------------------------------------------------------

    /// Read an ancillary instance setting.
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Write an ancillary instance setting.
    pub fn set_setting(&mut self, key: &str, value: impl Into<Value>) {
        self.settings.insert(key.to_string(), value.into());
    }

    // ------------------------------------------------------------------
    // Collaborators
    // ------------------------------------------------------------------

    /// Pass-through to the locale service.
    pub fn locale(&self) -> &Locale {
        self.locale
    }

    // ------------------------------------------------------------------
    // Assets
    // ------------------------------------------------------------------

    /// Register a stylesheet and push its `<link>` fragment onto `head`.
    ///
    /// Idempotent per resolved URL: repeated registrations of the same
    /// stylesheet emit exactly one fragment.
    pub fn css(&mut self, url: &str) {
        let href = asset::resolve(url, CSS_DIR, self.config.get(CDN_PREFIX_KEY));

        if !self.assets.register(&href) {
            debug!("asset"; "skipping duplicate stylesheet: {href}");
            return;
        }

        self.parts.push(HEAD, asset::stylesheet(&href));
    }

    /// Register a script with default options (`head` placement, no
    /// attributes).
    pub fn js(&mut self, url: &str) {
        self.js_with(url, ScriptOptions::default());
    }

    /// Register a script and push its `<script>` fragment onto `head` (or
    /// `bottom` when `options.top` is false).
    pub fn js_with(&mut self, url: &str, options: ScriptOptions) {
        let src = asset::resolve(url, JS_DIR, self.config.get(CDN_PREFIX_KEY));

        if !self.assets.register(&src) {
            debug!("asset"; "skipping duplicate script: {src}");
            return;
        }

        let target = if options.top { HEAD } else { BOTTOM };
        self.parts.push(target, asset::script(&src, options));
    }

    // ------------------------------------------------------------------
    // Canonical URL
    // ------------------------------------------------------------------

    /// Derive the canonical URL from `rules` and conditionally commit it
    /// under [`REL_CANONICAL`].
    ///
    /// The commit happens unless `options.return_only` is set, and only
    /// when the existing `rel_canonical` part is empty or `options.rewrite`
    /// forces an override (a subpage replacing inherited parent settings).
    /// An undetermined result commits the falsy sentinel `false`, so a
    /// forced rewrite can also clear an inherited value. Returns the
    /// derivation result regardless of whether it was committed.
    pub fn canonical(
        &mut self,
        rules: &CanonicalRules,
        options: CanonicalOptions,
    ) -> Option<String> {
        let result = seo::derive(rules, self.router);

        if !options.return_only {
            let unset = self.part(REL_CANONICAL).is_none_or(is_empty);
            if unset || options.rewrite {
                let committed = match &result {
                    Some(url) => Value::String(url.clone()),
                    None => Value::Bool(false),
                };
                debug!("canonical"; "{REL_CANONICAL} <- {committed}");
                self.parts.set(REL_CANONICAL, committed);
            }
        }

        result
    }
}
