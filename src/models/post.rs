//! Posts, their term assignments and comments

use serde::{Deserialize, Serialize};

use super::taxonomy::{find_meta, MetaPair};

/// A term assignment taken from an item's `<category>` element
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PostTerm {
    /// Element text (the human-readable term name)
    pub name: String,
    /// `nicename` attribute
    pub slug: String,
    /// `domain` attribute (`category`, `post_tag`, or a custom taxonomy)
    pub taxonomy_domain: String,
}

/// A comment nested under a post
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub author_name: String,
    pub author_email: String,
    pub author_ip: String,
    pub author_url: String,
    pub date: String,
    pub date_gmt: String,
    pub content: String,
    pub approved: String,
    #[serde(rename = "type")]
    pub comment_type: String,
    /// Parent comment reference, kept as text
    pub parent_id: String,
    pub user_id: i64,
    pub meta: Vec<MetaPair>,
}

/// A channel item: post, page, attachment, menu item or any custom post type
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub guid: String,

    /// `dc:creator`; not checked against the decoded authors
    pub author_login: String,

    pub content: String,
    pub excerpt: String,
    pub date: String,
    pub date_gmt: String,
    pub comment_status: String,
    pub ping_status: String,

    /// Post slug (`wp:post_name`)
    pub name: String,

    pub status: String,
    pub post_type: String,
    pub password: String,
    pub parent_id: i64,
    pub menu_order: i64,
    pub is_sticky: i64,

    /// `None` when the item has no `wp:attachment_url` element at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,

    pub assigned_terms: Vec<PostTerm>,
    pub meta: Vec<MetaPair>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// True when the item carried a `wp:attachment_url` element, even an empty one
    pub fn is_attachment(&self) -> bool {
        self.attachment_url.is_some()
    }

    pub fn is_sticky(&self) -> bool {
        self.is_sticky != 0
    }

    /// Look up the first post meta value stored under `key`
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        find_meta(&self.meta, key)
    }

    /// Terms assigned in a given taxonomy domain, in document order
    pub fn terms_in<'a>(&'a self, domain: &'a str) -> impl Iterator<Item = &'a PostTerm> + 'a {
        self.assigned_terms
            .iter()
            .filter(move |term| term.taxonomy_domain == domain)
    }
}

impl Comment {
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        find_meta(&self.meta, key)
    }
}
