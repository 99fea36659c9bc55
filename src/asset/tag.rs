//! Tag fragment builders for registered assets.

use crate::utils::html::escape_attr;

/// Emission options for a script tag.
#[derive(Debug, Clone, Copy)]
pub struct ScriptOptions {
    /// Add the `async` attribute.
    pub r#async: bool,
    /// Add the `defer` attribute.
    pub defer: bool,
    /// Place the tag in the `head` part; `false` targets the `bottom` part.
    pub top: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            r#async: false,
            defer: false,
            top: true,
        }
    }
}

impl ScriptOptions {
    /// `async`, placed at the top.
    pub fn asynchronous() -> Self {
        Self {
            r#async: true,
            ..Self::default()
        }
    }

    /// `defer`, placed at the top.
    pub fn deferred() -> Self {
        Self {
            defer: true,
            ..Self::default()
        }
    }

    /// No attributes, placed in the `bottom` part.
    pub fn at_bottom() -> Self {
        Self {
            top: false,
            ..Self::default()
        }
    }
}

/// Stylesheet link fragment for a resolved URL.
pub fn stylesheet(href: &str) -> String {
    format!(
        r#"<link rel="stylesheet" type="text/css" href="{}">"#,
        escape_attr(href)
    )
}

/// Script tag fragment for a resolved URL.
pub fn script(src: &str, options: ScriptOptions) -> String {
    let mut attrs = String::new();
    if options.r#async {
        attrs.push_str(" async");
    }
    if options.defer {
        attrs.push_str(" defer");
    }
    format!(r#"<script src="{}"{attrs}></script>"#, escape_attr(src))
}
