// src/extract/walker.rs
// =============================================================================
// This module is the heart of the engine: the tree walk that finds anchors.
//
// It visits every node of a document tree exactly once, in pre-order
// (parent before children, children left to right), and emits one Link per
// anchor element in the order the anchors are first visited. That order is
// what people mean by "document order" - the order the tags appear in the
// source.
//
// Two deliberate behaviors worth calling out:
// - The walk does NOT stop at an anchor. It keeps descending into the
//   anchor's children, so an anchor nested inside another anchor (invalid
//   HTML, but parsers will hand it to us anyway) gets its own Link AND
//   contributes its text to the outer anchor's label.
// - The walk never fails and never skips. An anchor without an href gets
//   href == "", an anchor without text gets text == "".
//
// Rust concepts:
// - Pure functions: same tree in, same links out, nothing mutated
// - Pattern matching with guards
// - Borrowing: the walk only needs &Node, the caller keeps the tree
// =============================================================================

use super::link::Link;
use super::node::Node;
use super::text::collect_text;

// The attribute that holds an anchor's target
const HREF_ATTR: &str = "href";

// Extracts every link from a document tree, in document order
//
// Parameters:
//   root: the document tree to walk (any Node is fine - a Text or Other
//         root just yields an empty or near-empty result)
//
// Returns: one Link per anchor element, ordered by first visit. Calling
// this twice on the same tree returns equal sequences - there is no hidden
// state between calls.
//
// Example:
//   <a href="/x">Go <b>Here</b></a>
//   -> [Link { href: "/x", text: "Go Here" }]
pub fn extract_links(root: &Node) -> Vec<Link> {
    let mut links = Vec::new();

    // Pre-order walk with an explicit stack. Children go on in reverse so
    // the leftmost child is visited first; see text.rs for the same trick.
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_anchor() {
            links.push(link_from_anchor(node));
        }

        // Descend regardless of whether this node was an anchor - nested
        // anchors still count.
        for child in node.children().iter().rev() {
            stack.push(child);
        }
    }

    links
}

// Builds the Link record for one anchor element
//
// First attribute named "href" wins (the attribute list is ordered, so
// duplicates resolve the same way a left-to-right scan of the source
// would). A missing href degrades to the empty string rather than an
// error - the anchor still happened, it just points nowhere.
fn link_from_anchor(anchor: &Node) -> Link {
    let href = anchor.attr(HREF_ATTR).unwrap_or("").to_string();
    let text = collect_text(anchor);
    Link::new(href, text)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the result Vec live outside the loop?
//    - It's the ONLY accumulator in the whole walk
//    - Each call builds a fresh one and hands it to the caller, so two
//      documents can never bleed links into each other
//
// 2. What does unwrap_or("") do?
//    - attr() returns Option<&str>: Some(value) or None
//    - unwrap_or supplies a default for the None case
//    - Here the default is the documented "no href -> empty string" rule
//
// 3. Why visit the anchor BEFORE its children?
//    - Pre-order is what gives us document order
//    - An outer anchor's <a> tag appears in the source before anything
//      nested inside it, so its Link must come first too
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // Shorthand for a Link literal in asserts
    fn link(href: &str, text: &str) -> Link {
        Link::new(href.to_string(), text.to_string())
    }

    #[test]
    fn test_no_anchors_yields_empty() {
        let tree = Node::element(
            "div",
            &[],
            vec![Node::text("hello"), Node::element("p", &[], vec![])],
        );
        assert_eq!(extract_links(&tree), vec![]);
    }

    #[test]
    fn test_text_root_yields_empty() {
        let tree = Node::text("just words");
        assert_eq!(extract_links(&tree), vec![]);
    }

    #[test]
    fn test_other_root_yields_empty() {
        let tree = Node::other(vec![]);
        assert_eq!(extract_links(&tree), vec![]);
    }

    #[test]
    fn test_single_anchor() {
        let tree = Node::element(
            "a",
            &[("href", "/x")],
            vec![
                Node::text("Go "),
                Node::element("b", &[], vec![Node::text("Here")]),
            ],
        );
        assert_eq!(extract_links(&tree), vec![link("/x", "Go Here")]);
    }

    #[test]
    fn test_missing_href_yields_empty_href() {
        let tree = Node::element("a", &[], vec![Node::text("nowhere")]);
        assert_eq!(extract_links(&tree), vec![link("", "nowhere")]);
    }

    #[test]
    fn test_duplicate_href_first_wins() {
        let tree = Node::element("a", &[("href", "/first"), ("href", "/second")], vec![]);
        assert_eq!(extract_links(&tree), vec![link("/first", "")]);
    }

    #[test]
    fn test_document_order_is_preserved() {
        let tree = Node::element(
            "body",
            &[],
            vec![
                Node::element("a", &[("href", "/one")], vec![Node::text("one")]),
                Node::element(
                    "div",
                    &[],
                    vec![Node::element(
                        "a",
                        &[("href", "/two")],
                        vec![Node::text("two")],
                    )],
                ),
                Node::element("a", &[("href", "/three")], vec![Node::text("three")]),
            ],
        );
        assert_eq!(
            extract_links(&tree),
            vec![
                link("/one", "one"),
                link("/two", "two"),
                link("/three", "three"),
            ]
        );
    }

    #[test]
    fn test_link_count_matches_anchor_count_at_any_depth() {
        // Five anchors at assorted depths: the result length must be five,
        // nesting depth makes no difference.
        let deep = Node::element(
            "div",
            &[],
            vec![Node::element(
                "div",
                &[],
                vec![Node::element("a", &[("href", "/deep")], vec![])],
            )],
        );
        let tree = Node::element(
            "body",
            &[],
            vec![
                Node::element("a", &[("href", "/1")], vec![]),
                Node::element("a", &[("href", "/2")], vec![]),
                deep,
                Node::element("a", &[("href", "/4")], vec![]),
            ],
        );
        assert_eq!(extract_links(&tree).len(), 4);
    }

    #[test]
    fn test_nested_anchor_reported_and_feeds_outer_text() {
        // <a href="/outer">out <a href="/inner">in</a></a>
        // Invalid markup, but the walk doesn't prune: both anchors are
        // reported (outer first), and the inner text shows up in the
        // outer label too.
        let tree = Node::element(
            "a",
            &[("href", "/outer")],
            vec![
                Node::text("out "),
                Node::element("a", &[("href", "/inner")], vec![Node::text("in")]),
            ],
        );
        assert_eq!(
            extract_links(&tree),
            vec![link("/outer", "out in"), link("/inner", "in")]
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let tree = Node::element(
            "body",
            &[],
            vec![
                Node::element("a", &[("href", "/a")], vec![Node::text("a")]),
                Node::element("a", &[("href", "/b")], vec![Node::text("b")]),
            ],
        );
        let first = extract_links(&tree);
        let second = extract_links(&tree);
        assert_eq!(first, second);
    }
}
