//! The decoded export and its author mapping

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::post::Post;
use super::taxonomy::Term;

/// A site user listed in the export
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}

/// Authors keyed by login
///
/// Iteration follows the position at which a login was first seen. Inserting
/// an author whose login is already present replaces the stored record
/// entirely, in place. Serializes as a `{login: Author}` object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AuthorMap {
    entries: IndexMap<String, Author>,
}

impl AuthorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keyed by `author.login`, returning the record it replaced
    pub fn insert(&mut self, author: Author) -> Option<Author> {
        self.entries.insert(author.login.clone(), author)
    }

    pub fn get(&self, login: &str) -> Option<&Author> {
        self.entries.get(login)
    }

    pub fn contains_key(&self, login: &str) -> bool {
        self.entries.contains_key(login)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, String, Author> {
        self.entries.values()
    }

    pub fn logins(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl std::ops::Index<&str> for AuthorMap {
    type Output = Author;

    fn index(&self, login: &str) -> &Author {
        match self.get(login) {
            Some(author) => author,
            None => panic!("no author with login '{}'", login),
        }
    }
}

impl<'a> IntoIterator for &'a AuthorMap {
    type Item = &'a Author;
    type IntoIter = indexmap::map::Values<'a, String, Author>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<Author> for AuthorMap {
    fn from_iter<I: IntoIterator<Item = Author>>(iter: I) -> Self {
        let mut map = AuthorMap::new();
        for author in iter {
            map.insert(author);
        }
        map
    }
}

/// Everything decoded from one WXR document
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportDocument {
    /// `wp:wxr_version`, always of the form `<int>.<int>`
    pub version: String,
    pub base_url: String,
    /// Falls back to `base_url` when the export has no `wp:base_blog_url`
    pub base_blog_url: String,
    pub authors: AuthorMap,
    pub categories: Vec<Term>,
    pub tags: Vec<Term>,
    pub terms: Vec<Term>,
    pub posts: Vec<Post>,
}

impl ExportDocument {
    /// Resolve a post's `author_login` against the decoded authors
    pub fn author_of(&self, post: &Post) -> Option<&Author> {
        self.authors.get(&post.author_login)
    }

    pub fn posts_of_type<'a>(&'a self, post_type: &'a str) -> impl Iterator<Item = &'a Post> + 'a {
        self.posts.iter().filter(move |p| p.post_type == post_type)
    }

    /// Total number of comments across all posts
    pub fn comment_count(&self) -> usize {
        self.posts.iter().map(|p| p.comments.len()).sum()
    }
}
