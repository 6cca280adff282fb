//! Namespace resolver
//!
//! WXR queries go through namespace URIs, not prefixes. The prefixes come
//! from the root element; `wp` and `excerpt` get default URIs when the
//! document does not declare them, so later lookups never have to check.

use std::collections::HashMap;

use roxmltree::Document;

pub const WP_PREFIX: &str = "wp";
pub const EXCERPT_PREFIX: &str = "excerpt";

pub const DEFAULT_WP_URI: &str = "http://wordpress.org/export/1.1/";
pub const DEFAULT_EXCERPT_URI: &str = "http://wordpress.org/export/1.1/excerpt/";

/// Dublin Core, used for `dc:creator`
pub const DC_URI: &str = "http://purl.org/dc/elements/1.1/";
/// RSS content module, used for `content:encoded`
pub const CONTENT_URI: &str = "http://purl.org/rss/1.0/modules/content/";

/// Effective prefix to URI bindings for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceMap {
    bindings: HashMap<String, String>,
}

impl NamespaceMap {
    /// Bindings declared on the root element, plus the `wp`/`excerpt` defaults
    pub fn resolve(doc: &Document) -> Self {
        let mut bindings: HashMap<String, String> = doc
            .root_element()
            .namespaces()
            .filter_map(|ns| ns.name().map(|prefix| (prefix.to_string(), ns.uri().to_string())))
            .collect();

        for (prefix, uri) in [(WP_PREFIX, DEFAULT_WP_URI), (EXCERPT_PREFIX, DEFAULT_EXCERPT_URI)] {
            if !bindings.contains_key(prefix) {
                log::debug!("namespace '{}' not declared, defaulting to {}", prefix, uri);
                bindings.insert(prefix.to_string(), uri.to_string());
            }
        }

        Self { bindings }
    }

    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// URI bound to `wp`; always present after [`NamespaceMap::resolve`]
    pub fn wp(&self) -> &str {
        self.uri(WP_PREFIX).unwrap_or(DEFAULT_WP_URI)
    }

    /// URI bound to `excerpt`; always present after [`NamespaceMap::resolve`]
    pub fn excerpt(&self) -> &str {
        self.uri(EXCERPT_PREFIX).unwrap_or(DEFAULT_EXCERPT_URI)
    }
}
