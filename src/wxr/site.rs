//! Format version and site URLs from the channel header

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::{DecodeError, DecodeResult};
use super::nodes::Fields;

/// `<int>.<int>`, ASCII digits only
static VERSION_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("version pattern is valid"));

/// Channel-level facts read before any collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub version: String,
    pub base_url: String,
    pub base_blog_url: String,
}

/// Read `wp:wxr_version`, `wp:base_site_url` and `wp:base_blog_url`
///
/// `channel` must be the channel viewed through the `wp` namespace.
pub fn extract_site_metadata(channel: Fields) -> DecodeResult<SiteMetadata> {
    let version = channel
        .optional_text("wxr_version")
        .map(|v| v.trim().to_string())
        .ok_or_else(|| DecodeError::MissingOrInvalidVersion("no wp:wxr_version element".to_string()))?;

    if !VERSION_SHAPE.is_match(&version) {
        return Err(DecodeError::MissingOrInvalidVersion(format!(
            "'{}' is not of the form <major>.<minor>",
            version
        )));
    }

    let base_url = channel.text("base_site_url").trim().to_string();
    let base_blog_url = channel
        .optional_text("base_blog_url")
        .map(|url| url.trim().to_string())
        .unwrap_or_else(|| base_url.clone());

    log::debug!("WXR version {} from {}", version, base_url);

    Ok(SiteMetadata {
        version,
        base_url,
        base_blog_url,
    })
}
