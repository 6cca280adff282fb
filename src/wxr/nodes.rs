//! Typed helpers over roxmltree nodes
//!
//! Every "read an optional child, fall back to a default" rule used by the
//! extractors lives here, so the permissive coercions are defined once.

use roxmltree::Node;

use crate::models::MetaPair;

/// Find the first element child with the given namespace and local name
pub fn get_child<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: Option<&str>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_named(*n, namespace, name))
}

/// All element children with the given namespace and local name, in order
pub fn get_children<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: Option<&str>,
    name: &str,
) -> Vec<Node<'a, 'input>> {
    node.children().filter(|n| is_named(*n, namespace, name)).collect()
}

fn is_named(node: Node, namespace: Option<&str>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == namespace
}

/// Direct text content of an element (text and CDATA children joined)
///
/// Text inside nested child elements is not included.
pub fn get_text(node: Node) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Permissive integer cast
///
/// Leading ASCII whitespace and an optional sign are accepted, then the
/// longest run of digits is read. Anything else yields 0. Values beyond the
/// `i64` range saturate.
pub fn coerce_int(text: &str) -> i64 {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\u{0B}');
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = match value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) })
        {
            Some(v) => v,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }
    value
}

/// Children of one element, all read from a single namespace
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a, 'input, 'ns> {
    node: Node<'a, 'input>,
    namespace: Option<&'ns str>,
}

impl<'a, 'input, 'ns> Fields<'a, 'input, 'ns> {
    pub fn new(node: Node<'a, 'input>, namespace: Option<&'ns str>) -> Self {
        Self { node, namespace }
    }

    /// Fields in the same namespace as the element itself (plain RSS children)
    pub fn own(node: Node<'a, 'input>) -> Self
    where
        'a: 'ns,
    {
        Self {
            node,
            namespace: node.tag_name().namespace(),
        }
    }

    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }

    /// The same element, read through another namespace
    pub fn within<'other>(&self, namespace: Option<&'other str>) -> Fields<'a, 'input, 'other> {
        Fields::new(self.node, namespace)
    }

    pub fn child(&self, name: &str) -> Option<Node<'a, 'input>> {
        get_child(self.node, self.namespace, name)
    }

    pub fn all(&self, name: &str) -> Vec<Node<'a, 'input>> {
        get_children(self.node, self.namespace, name)
    }

    /// Every matching child, viewed through the same namespace
    pub fn each(&self, name: &str) -> Vec<Self> {
        self.all(name)
            .into_iter()
            .map(|node| Self::new(node, self.namespace))
            .collect()
    }

    /// Text of the child, or `None` when the element is absent
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.child(name).map(get_text)
    }

    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.optional_text(name).unwrap_or_else(|| default.to_string())
    }

    /// Text of the child, empty when absent
    pub fn text(&self, name: &str) -> String {
        self.text_or(name, "")
    }

    /// Integer value of the child, 0 when absent or not numeric
    pub fn int(&self, name: &str) -> i64 {
        self.child(name).map(|n| coerce_int(&get_text(n))).unwrap_or(0)
    }

    /// Key/value records stored as `<name><meta_key/><meta_value/></name>`
    pub fn meta(&self, name: &str) -> Vec<MetaPair> {
        self.each(name)
            .into_iter()
            .map(|record| MetaPair::new(record.text("meta_key"), record.text("meta_value")))
            .collect()
    }
}
