//! Key/value configuration collaborator.
//!
//! The assembly buffer reads ambient configuration (currently just the CDN
//! prefix) through the [`ConfigSource`] seam. [`StaticConfig`] is the
//! provided implementation: an in-memory table, optionally loaded from a
//! flat TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashMap;

/// Read-only key lookup.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<&str>;
}

/// In-memory configuration table.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    entries: FxHashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Load a flat TOML table from `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a flat table of scalar
    /// values.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file `{}`", path.display()))?;
        Self::from_toml(&raw)
            .with_context(|| format!("invalid config file `{}`", path.display()))
    }

    /// Parse a flat TOML table. Scalar values are stringified; nested
    /// tables and arrays are rejected.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(raw)?;

        let mut entries = FxHashMap::default();
        for (key, value) in table {
            let rendered = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => bail!(
                    "config key `{key}`: expected a scalar value, got {}",
                    other.type_str()
                ),
            };
            entries.insert(key, rendered);
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigSource for StaticConfig {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
