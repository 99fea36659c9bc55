//! Search-engine concerns: canonical URL derivation.

mod canonical;

pub use canonical::{CanonicalOptions, CanonicalRules, derive};
