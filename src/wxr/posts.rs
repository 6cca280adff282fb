//! Channel items: posts, pages, attachments and custom post types

use crate::models::{Comment, Post, PostTerm};

use super::namespaces::{NamespaceMap, CONTENT_URI, DC_URI};
use super::nodes::{get_text, Fields};

/// Decode every `<item>` of the channel, in document order
///
/// `channel` is read in its own (RSS) namespace.
pub fn extract_posts(channel: Fields, namespaces: &NamespaceMap) -> Vec<Post> {
    channel
        .each("item")
        .into_iter()
        .map(|item| decode_post(item, namespaces))
        .collect()
}

fn decode_post(item: Fields, namespaces: &NamespaceMap) -> Post {
    let dc = item.within(Some(DC_URI));
    let content = item.within(Some(CONTENT_URI));
    let excerpt = item.within(Some(namespaces.excerpt()));
    let wp = item.within(Some(namespaces.wp()));

    Post {
        id: wp.int("post_id"),
        title: item.text("title"),
        guid: item.text("guid"),
        author_login: dc.text("creator"),
        content: content.text("encoded"),
        excerpt: excerpt.text("encoded"),
        date: wp.text("post_date"),
        date_gmt: wp.text("post_date_gmt"),
        comment_status: wp.text("comment_status"),
        ping_status: wp.text("ping_status"),
        name: wp.text("post_name"),
        status: wp.text("status"),
        post_type: wp.text("post_type"),
        password: wp.text("post_password"),
        parent_id: wp.int("post_parent"),
        menu_order: wp.int("menu_order"),
        is_sticky: wp.int("is_sticky"),
        attachment_url: wp.optional_text("attachment_url"),
        assigned_terms: assigned_terms(item),
        meta: wp.meta("postmeta"),
        comments: wp.each("comment").into_iter().map(decode_comment).collect(),
    }
}

/// `<category domain=".." nicename="..">Name</category>` children of an item
///
/// Elements without a `nicename` attribute are skipped.
fn assigned_terms(item: Fields) -> Vec<PostTerm> {
    item.all("category")
        .into_iter()
        .filter_map(|category| {
            let slug = category.attribute("nicename")?;
            Some(PostTerm {
                name: get_text(category),
                slug: slug.to_string(),
                taxonomy_domain: category.attribute("domain").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

fn decode_comment(c: Fields) -> Comment {
    Comment {
        id: c.int("comment_id"),
        author_name: c.text("comment_author"),
        author_email: c.text("comment_author_email"),
        author_ip: c.text("comment_author_IP"),
        author_url: c.text("comment_author_url"),
        date: c.text("comment_date"),
        date_gmt: c.text("comment_date_gmt"),
        content: c.text("comment_content"),
        approved: c.text("comment_approved"),
        comment_type: c.text("comment_type"),
        parent_id: c.text("comment_parent"),
        user_id: c.int("comment_user_id"),
        meta: c.meta("commentmeta"),
    }
}
