//! WXR (WordPress eXtended RSS) decoder
//!
//! # Architecture
//!
//! ```text
//! WXR bytes
//!   ↓ [loader: roxmltree, DTD refused]
//! XML tree
//!   ↓ [namespaces: root bindings + wp/excerpt defaults]
//! NamespaceMap
//!   ↓ [site: wxr_version check, base URLs]
//!   ↓ [taxonomy, authors, posts]
//! ExportDocument
//! ```
//!
//! Only a malformed document or a missing/invalid version fails the decode.
//! Every other absent or odd value degrades to an empty string, zero, an
//! empty sequence or an unset optional field.

pub mod authors;
pub mod errors;
pub mod loader;
pub mod namespaces;
pub mod nodes;
pub mod options;
pub mod posts;
pub mod site;
pub mod taxonomy;

pub use errors::{DecodeError, DecodeResult};
pub use namespaces::NamespaceMap;
pub use options::DecodeOptions;
pub use taxonomy::TermKind;

use crate::models::ExportDocument;

use nodes::Fields;

/// Decode a complete WXR document with default options
///
/// # Example
///
/// ```ignore
/// let xml = br#"<rss version="2.0" xmlns:wp="http://wordpress.org/export/1.2/">
///   <channel><wp:wxr_version>1.2</wp:wxr_version></channel>
/// </rss>"#;
///
/// let export = wxr_wasm::decode(xml)?;
/// assert_eq!(export.version, "1.2");
/// ```
pub fn decode(bytes: &[u8]) -> DecodeResult<ExportDocument> {
    decode_with_options(bytes, &DecodeOptions::default())
}

/// Decode a complete WXR document
///
/// # Arguments
///
/// * `bytes` - The whole document, already read by the caller
/// * `options` - Source name for diagnostics and reader limits
///
/// # Returns
///
/// * `Ok(ExportDocument)` - Everything the export contains, in document order
/// * `Err(DecodeError)` - The document is malformed or is not a WXR file
pub fn decode_with_options(bytes: &[u8], options: &DecodeOptions) -> DecodeResult<ExportDocument> {
    log::debug!("decoding WXR document ({} bytes)", bytes.len());

    let doc = loader::load_document(bytes, options).map_err(|diagnostics| {
        log::warn!("WXR document rejected with {} diagnostic(s)", diagnostics.len());
        DecodeError::MalformedDocument { diagnostics }
    })?;

    let namespaces = NamespaceMap::resolve(&doc);

    let root = doc.root_element();
    let channel = Some(root)
        .filter(|r| r.tag_name().name() == "rss")
        .and_then(|r| nodes::get_child(r, r.tag_name().namespace(), "channel"))
        .map(Fields::own)
        .ok_or_else(|| DecodeError::MissingOrInvalidVersion("no <rss><channel> element".to_string()))?;

    let wp_channel = channel.within(Some(namespaces.wp()));
    let site = site::extract_site_metadata(wp_channel)?;

    let export = ExportDocument {
        version: site.version,
        base_url: site.base_url,
        base_blog_url: site.base_blog_url,
        authors: authors::extract_authors(wp_channel),
        categories: taxonomy::extract_terms(wp_channel, TermKind::Category),
        tags: taxonomy::extract_terms(wp_channel, TermKind::Tag),
        terms: taxonomy::extract_terms(wp_channel, TermKind::Term),
        posts: posts::extract_posts(channel, &namespaces),
    };

    log::debug!(
        "decoded WXR {}: {} authors, {} categories, {} tags, {} terms, {} posts, {} comments",
        export.version,
        export.authors.len(),
        export.categories.len(),
        export.tags.len(),
        export.terms.len(),
        export.posts.len(),
        export.comment_count()
    );

    Ok(export)
}
