//! Parts store error types.

use thiserror::Error;

/// Errors from the parts store.
///
/// The store is deliberately forgiving: missing slots read as null, empty
/// pushes are dropped. The one hard failure is misusing a slot across two
/// access patterns, which is a programmer error and must propagate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartsError {
    /// `append` was called on a slot that holds a non-string value.
    #[error("appending is supported only against strings (`{name}` holds {found})")]
    TypeMismatch {
        /// Slot name the caller tried to append to.
        name: String,
        /// Kind of the value currently stored there.
        found: &'static str,
    },
}
