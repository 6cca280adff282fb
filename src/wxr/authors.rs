//! Authors declared on the channel

use crate::models::{Author, AuthorMap};

use super::nodes::Fields;

/// Decode every `wp:author` element into a login-keyed map
///
/// A repeated login replaces the earlier record wholesale; fields are never
/// merged between the two.
pub fn extract_authors(wp: Fields) -> AuthorMap {
    let mut authors = AuthorMap::new();

    for a in wp.each("author") {
        let login = a.text("author_login");
        let author = Author {
            id: a.int("author_id"),
            login,
            email: a.text("author_email"),
            display_name: a.text("author_display_name"),
            first_name: a.text("author_first_name"),
            last_name: a.text("author_last_name"),
        };

        if let Some(previous) = authors.insert(author) {
            log::warn!("duplicate author login '{}', keeping the later entry", previous.login);
        }
    }

    authors
}
