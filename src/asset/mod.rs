//! Static asset handling: URL resolution, per-render dedup, tag fragments.

mod registry;
mod resolve;
mod tag;

pub use registry::AssetRegistry;
pub use resolve::{CSS_DIR, JS_DIR, resolve};
pub use tag::{ScriptOptions, script, stylesheet};
