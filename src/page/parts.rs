//! The parts store: named slots filled in during page construction.
//!
//! A slot holds whatever the caller last wrote: a scalar, an ordered list
//! built up with `push`, or a string built up with `append`. The store does
//! not tag slots with a type; using one name consistently with one access
//! pattern is the caller's side of the contract. The single enforced rule is
//! that `append` only works against strings.

use serde_json::{Map, Value};

use super::PartsError;
use crate::core::{is_empty, value_kind};

/// Ordered mapping from part name to value, scoped to one render pass.
#[derive(Debug, Clone, Default)]
pub struct Parts {
    slots: Map<String, Value>,
}

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite `name` with `value`. Returns the stored value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &Value {
        let slot = self.slots.entry(name.to_string()).or_insert(Value::Null);
        *slot = value.into();
        slot
    }

    /// Overwrite every listed slot with a clone of `value`.
    pub fn set_all(&mut self, names: &[&str], value: impl Into<Value>) {
        let value = value.into();
        for name in names {
            self.slots.insert((*name).to_string(), value.clone());
        }
    }

    /// (Re)initialize `name` as an empty list, destroying prior content.
    pub fn push_init(&mut self, name: &str) {
        self.slots.insert(name.to_string(), Value::Array(Vec::new()));
    }

    /// As [`push_init`](Self::push_init), then seed with `first` unless it
    /// is empty.
    pub fn push_init_with(&mut self, name: &str, first: impl Into<Value>) {
        let first = first.into();
        let seed = if is_empty(&first) { Vec::new() } else { vec![first] };
        self.slots.insert(name.to_string(), Value::Array(seed));
    }

    /// Append `value` to the list at `name`.
    ///
    /// Empty values are dropped silently (skip-empty-contributions policy).
    /// An absent slot becomes a one-element list; so does a slot holding a
    /// non-list value, consistent with `push_init` + `push`.
    pub fn push(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        if is_empty(&value) {
            return;
        }

        match self.slots.get_mut(name) {
            Some(Value::Array(list)) => list.push(value),
            _ => {
                self.slots.insert(name.to_string(), Value::Array(vec![value]));
            }
        }
    }

    /// Concatenate `value` onto the string at `name`.
    ///
    /// An absent slot is initialized to the empty string first. Returns the
    /// new concatenated string.
    ///
    /// # Errors
    ///
    /// [`PartsError::TypeMismatch`] when the slot holds a non-string value.
    pub fn append(&mut self, name: &str, value: &str) -> Result<&str, PartsError> {
        let slot = self
            .slots
            .entry(name.to_string())
            .or_insert_with(|| Value::String(String::new()));

        match slot {
            Value::String(s) => {
                s.push_str(value);
                Ok(s)
            }
            other => Err(PartsError::TypeMismatch {
                name: name.to_string(),
                found: value_kind(other),
            }),
        }
    }

    /// The entire mapping, in insertion order.
    pub fn all(&self) -> &Map<String, Value> {
        &self.slots
    }

    /// Value at `name`, or `None` if the slot was never written.
    pub fn part(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    /// Mapping restricted to `names`; absent names map to `Value::Null`.
    pub fn select(&self, names: &[&str]) -> Map<String, Value> {
        names
            .iter()
            .map(|name| {
                let value = self.slots.get(*name).cloned().unwrap_or(Value::Null);
                ((*name).to_string(), value)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
