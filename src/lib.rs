//! Pagina - page assembly buffer for server-side rendering.
//!
//! A `Page` accumulates named parts (HTML fragments, flags, strings) during
//! one render pass, registers CSS/JS asset tags exactly once each, and
//! derives a canonical URL from routing state. The assembled parts map is
//! handed to the template-rendering step at the end of the pass.
//!
//! ```
//! use pagina::{Locale, Page, RequestUrl, StaticConfig};
//!
//! let locale = Locale::new("en");
//! let router = RequestUrl::parse("/shop/cat/item?page=2");
//! let config = StaticConfig::new().set("cdn_prefix", "https://cdn.example.com");
//!
//! let mut page = Page::new(&locale, &router, &config);
//! page.set("title", "Catalog");
//! page.css("main.css");
//!
//! let parts = page.parts();
//! assert_eq!(parts["title"], "Catalog");
//! ```

pub mod asset;
pub mod config;
pub mod core;
pub mod locale;
pub mod logger;
pub mod page;
pub mod seo;
pub mod utils;

pub use config::{ConfigSource, StaticConfig};
pub use locale::Locale;
pub use self::core::{RequestUrl, Router};
pub use page::{BOTTOM, HEAD, Page, Parts, PartsError, REL_CANONICAL, ScriptOptions};
pub use seo::{CanonicalOptions, CanonicalRules};
