// src/extract/node.rs
// =============================================================================
// This module defines the Node tree that the extraction engine walks.
//
// The engine does NOT parse HTML itself. An external parser (see src/dom/)
// builds one of these trees per document, and everything in src/extract/
// operates on the finished tree. That keeps the core testable: tests can
// build tiny trees by hand without going through a parser at all.
//
// Three kinds of node:
// - Element: a tag like <a> or <div>, with attributes and child nodes
// - Text: raw character data between tags
// - Other: everything else (comments, doctypes, the document container).
//   We never pull text or links out of these, but we DO walk through their
//   children, because the document root itself is one of them.
//
// Rust concepts:
// - Enums with data: each variant can carry its own fields
// - Ownership: a node owns its children outright (no back-references,
//   no cycles, no reference counting needed)
// - Slices: returning &[Node] lets callers iterate without caring which
//   variant they got
// =============================================================================

// One node of a parsed document tree
//
// Attributes are deliberately a Vec of (name, value) pairs instead of a
// HashMap. HTML allows duplicate attributes, and the rule is that the first
// occurrence in source order wins - a map would silently lose that ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element like <a href="/home">, with tag name, attributes, children
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    /// Raw text between tags (whitespace and all - trimming happens later)
    Text { content: String },
    /// Comments, doctypes, document containers: walked, never extracted from
    Other { children: Vec<Node> },
}

impl Node {
    // Builds an Element node
    //
    // Takes &str pairs and converts them to owned Strings so that test code
    // can write Node::element("a", &[("href", "/x")], vec![...]) without
    // littering .to_string() everywhere.
    pub fn element(tag: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
        Node::Element {
            tag: tag.to_string(),
            attrs: attrs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            children,
        }
    }

    // Builds a Text node from raw character data
    pub fn text(content: &str) -> Node {
        Node::Text {
            content: content.to_string(),
        }
    }

    // Builds an Other node (comment, doctype, document container)
    pub fn other(children: Vec<Node>) -> Node {
        Node::Other { children }
    }

    // Returns this node's children as a slice
    //
    // Text nodes are leaves, so they return an empty slice. This is what
    // lets the walkers treat every node uniformly: visit it, then push
    // whatever children() gives back.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Other { children } => children,
            Node::Text { .. } => &[],
        }
    }

    // Looks up an attribute by name, first occurrence wins
    //
    // Returns None for non-elements and for elements without that attribute.
    // A linear scan over the ordered pairs is exactly the semantics we want:
    // if the markup said <a href="/first" href="/second">, we report /first,
    // the same way a browser's attribute scan would.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(attr_name, _)| attr_name == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    // Returns true if this element is an anchor (<a> tag)
    //
    // The comparison is an exact match against "a". That is safe because
    // html5ever (our external parser) lower-cases HTML element names while
    // building the tree, so <A HREF="..."> reaches us with tag == "a".
    // Hand-built trees in tests must follow the same convention.
    pub fn is_anchor(&self) -> bool {
        matches!(self, Node::Element { tag, .. } if tag == "a")
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an enum instead of a struct with a "kind" field?
//    - Each kind of node carries different data (elements have attributes,
//      text has content)
//    - Rust enums let each variant hold exactly its own fields
//    - match forces us to handle every kind, so nothing falls through
//
// 2. What does matches! do?
//    - A macro that tests whether a value fits a pattern
//    - matches!(self, Node::Element { tag, .. } if tag == "a") reads as:
//      "is this an Element whose tag equals 'a'?"
//    - Shorter than a full match when you only need a bool
//
// 3. Why &[Node] instead of Vec<Node> from children()?
//    - &[Node] borrows the existing children, no copying
//    - The caller only needs to iterate, not own
//    - Text nodes can return &[] (a static empty slice) for free
//
// 4. What is .find() doing in attr()?
//    - Iterator method that returns the FIRST item matching a predicate
//    - Combined with ordered pairs, this gives first-occurrence-wins
//      for duplicate attribute names
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_found() {
        let node = Node::element("a", &[("href", "/home")], vec![]);
        assert_eq!(node.attr("href"), Some("/home"));
    }

    #[test]
    fn test_attr_missing() {
        let node = Node::element("a", &[("class", "nav")], vec![]);
        assert_eq!(node.attr("href"), None);
    }

    #[test]
    fn test_attr_first_occurrence_wins() {
        let node = Node::element("a", &[("href", "/first"), ("href", "/second")], vec![]);
        assert_eq!(node.attr("href"), Some("/first"));
    }

    #[test]
    fn test_attr_on_text_node() {
        let node = Node::text("hello");
        assert_eq!(node.attr("href"), None);
    }

    #[test]
    fn test_text_node_has_no_children() {
        let node = Node::text("hello");
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_is_anchor() {
        assert!(Node::element("a", &[], vec![]).is_anchor());
        assert!(!Node::element("div", &[], vec![]).is_anchor());
        assert!(!Node::text("a").is_anchor());
    }
}
