// SPDX-License-Identifier: MPL-2.0
//! Site-relative asset path resolution.
//!
//! Catalog entries store paths relative to the site root. When the site
//! is deployed under a sub-path, every path gets the configured base
//! prefixed; this mirrors how the static bundler rewrote URLs, so the
//! same data serves both deployments.

/// Joins catalog asset paths onto a deployment base URL.
///
/// # Example
///
/// ```
/// use araucarias::assets::AssetResolver;
///
/// let resolver = AssetResolver::new("/araucarias/");
/// assert_eq!(
///     resolver.resolve("/images/gallery/edificio/edificio-001-landscape.webp"),
///     "/araucarias/images/gallery/edificio/edificio-001-landscape.webp",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    base_url: String,
}

impl AssetResolver {
    /// Creates a resolver for the given base URL.
    ///
    /// `"/"` (the default deployment) resolves paths unchanged.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Returns the configured base URL as given.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves an asset path against the base URL.
    ///
    /// The empty path resolves to the empty string so that optional
    /// image fields pass through untouched. Exactly one separator ends
    /// up between base and path, whatever each side brought along.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(crate::config::defaults::ASSET_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_base_leaves_absolute_paths_alone() {
        let resolver = AssetResolver::new("/");
        assert_eq!(
            resolver.resolve("/images/gallery/edificio/edificio-001-landscape.webp"),
            "/images/gallery/edificio/edificio-001-landscape.webp"
        );
    }

    #[test]
    fn root_base_anchors_relative_paths() {
        let resolver = AssetResolver::new("/");
        assert_eq!(
            resolver.resolve("images/suites/confort/confort-001.webp"),
            "/images/suites/confort/confort-001.webp"
        );
    }

    #[test]
    fn sub_path_base_is_prefixed_once() {
        for base in ["/araucarias", "/araucarias/"] {
            let resolver = AssetResolver::new(base);
            assert_eq!(
                resolver.resolve("/images/logo.webp"),
                "/araucarias/images/logo.webp"
            );
            assert_eq!(
                resolver.resolve("images/logo.webp"),
                "/araucarias/images/logo.webp"
            );
        }
    }

    #[test]
    fn empty_path_resolves_to_empty() {
        let resolver = AssetResolver::new("/araucarias/");
        assert_eq!(resolver.resolve(""), "");
    }

    #[test]
    fn absolute_base_urls_work_for_cdn_deployments() {
        let resolver = AssetResolver::new("https://cdn.example.com/site/");
        assert_eq!(
            resolver.resolve("images/logo.webp"),
            "https://cdn.example.com/site/images/logo.webp"
        );
    }

    #[test]
    fn default_uses_the_root_deployment() {
        assert_eq!(AssetResolver::default().base_url(), "/");
    }
}
