//! Taxonomy records: categories, tags and generic terms
//!
//! All three kinds share the [`Term`] shape. Fields that a kind does not carry
//! in the export (a tag's parent, a category's taxonomy) stay empty.

use serde::{Deserialize, Serialize};

/// An arbitrary key/value annotation attached to a term, post or comment
///
/// Sequences of meta pairs mirror document order and keep duplicates.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaPair {
    pub key: String,
    pub value: String,
}

impl MetaPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A category, tag or custom-taxonomy term
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Term {
    /// `wp:term_id`
    pub id: i64,

    /// `wp:category_nicename`, `wp:tag_slug` or `wp:term_slug`
    pub slug: String,

    /// Parent reference, kept as opaque text (may be a slug or an id)
    pub parent: String,

    /// `wp:cat_name`, `wp:tag_name` or `wp:term_name`
    pub name: String,

    pub description: String,

    /// `wp:term_taxonomy`, only populated for generic terms
    pub taxonomy: String,

    /// Term meta in document order
    pub meta: Vec<MetaPair>,
}

impl Term {
    /// Look up the first meta value stored under `key`
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        find_meta(&self.meta, key)
    }
}

/// First value for `key` in a meta sequence
pub(crate) fn find_meta<'a>(meta: &'a [MetaPair], key: &str) -> Option<&'a str> {
    meta.iter()
        .find(|pair| pair.key == key)
        .map(|pair| pair.value.as_str())
}
