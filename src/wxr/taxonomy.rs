//! Categories, tags and generic terms declared on the channel

use crate::models::Term;

use super::nodes::Fields;

/// The three term element kinds and the `wp:` children each one uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Category,
    Tag,
    Term,
}

impl TermKind {
    /// Element name directly under the channel
    pub fn element(self) -> &'static str {
        match self {
            TermKind::Category => "category",
            TermKind::Tag => "tag",
            TermKind::Term => "term",
        }
    }

    fn slug_field(self) -> &'static str {
        match self {
            TermKind::Category => "category_nicename",
            TermKind::Tag => "tag_slug",
            TermKind::Term => "term_slug",
        }
    }

    fn parent_field(self) -> Option<&'static str> {
        match self {
            TermKind::Category => Some("category_parent"),
            TermKind::Tag => None,
            TermKind::Term => Some("term_parent"),
        }
    }

    fn name_field(self) -> &'static str {
        match self {
            TermKind::Category => "cat_name",
            TermKind::Tag => "tag_name",
            TermKind::Term => "term_name",
        }
    }

    fn description_field(self) -> &'static str {
        match self {
            TermKind::Category => "category_description",
            TermKind::Tag => "tag_description",
            TermKind::Term => "term_description",
        }
    }
}

/// Decode every `wp:<kind>` element under the channel, in document order
///
/// `wp` must be the channel viewed through the `wp` namespace.
pub fn extract_terms(wp: Fields, kind: TermKind) -> Vec<Term> {
    wp.each(kind.element())
        .into_iter()
        .map(|t| decode_term(t, kind))
        .collect()
}

fn decode_term(t: Fields, kind: TermKind) -> Term {
    Term {
        id: t.int("term_id"),
        slug: t.text(kind.slug_field()),
        parent: kind.parent_field().map(|f| t.text(f)).unwrap_or_default(),
        name: t.text(kind.name_field()),
        description: t.text(kind.description_field()),
        taxonomy: match kind {
            TermKind::Term => t.text("term_taxonomy"),
            _ => String::new(),
        },
        meta: t.meta("termmeta"),
    }
}
