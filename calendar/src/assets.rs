//! Static asset resolution.
//!
//! Icon and avatar URLs are produced by a resolver the host injects, so
//! core logic never hardcodes an asset base path.

use std::fmt;

/// Navigation and chrome icon filenames the widget asks the resolver for.
pub mod icons {
    pub const PREVIOUS: &str = "lb.svg";
    pub const NEXT: &str = "rb.svg";
    pub const EXPAND: &str = "top.svg";
    pub const COLLAPSE: &str = "bottom.svg";
    pub const EVENT_BULLET: &str = "line.svg";
}

/// Injected filename-to-URL resolver.
pub struct AssetResolver {
    resolve: Box<dyn Fn(&str) -> String + Send + Sync>,
}

impl AssetResolver {
    pub fn new(resolve: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            resolve: Box::new(resolve),
        }
    }

    /// Resolver that joins filenames onto a base URL.
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Self::new(move |filename| format!("{}/{}", base, filename))
    }

    /// URL for an asset filename.
    pub fn url(&self, filename: &str) -> String {
        (self.resolve)(filename)
    }
}

impl fmt::Debug for AssetResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetResolver").finish_non_exhaustive()
    }
}
