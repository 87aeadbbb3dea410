// src/extract/text.rs
// =============================================================================
// This module builds an anchor's text label from its subtree.
//
// The rule: walk the subtree in pre-order, and for every Text node, trim
// leading/trailing whitespace (spaces, tabs, newlines) and append it to a
// running buffer, with a single space inserted between contributions.
//
// One subtlety that IS part of the contract: the separator is appended
// whenever the buffer is already non-empty, BEFORE we look at what the next
// text node contributes. So a text node that trims down to nothing can
// still leave a trailing space behind it. That reproduces the original
// tool's output byte-for-byte; see the test at the bottom that pins the
// behavior down. Callers who need a tidy label can always .trim() the
// result themselves.
//
// Rust concepts:
// - String vs &str: we build an owned String from borrowed slices
// - str::trim(): strips all leading/trailing Unicode whitespace
// - Explicit stack: a Vec<&Node> instead of recursive function calls
// =============================================================================

use super::node::Node;

// Collects and normalizes all text beneath a node
//
// Parameters:
//   root: the subtree to collect from (usually an anchor element)
//
// Returns: the normalized label, empty string if the subtree holds no
// non-whitespace text. Never fails.
//
// Example:
//   <a>Go <b>Here</b></a>  ->  "Go Here"
//
// Elements and Other nodes contribute no text themselves but we still
// descend through them - the text we want usually sits inside a <b>, a
// <span>, or similar.
pub fn collect_text(root: &Node) -> String {
    let mut buffer = String::new();

    // Pre-order walk with an explicit stack instead of recursion.
    // Children are pushed in reverse so the leftmost child pops first,
    // keeping document order.
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if let Node::Text { content } = node {
            // Separator first (only once there is something to separate
            // from), then the trimmed contribution - even if it's empty.
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(content.trim());
        }

        for child in node.children().iter().rev() {
            stack.push(child);
        }
    }

    buffer
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an explicit stack instead of recursion?
//    - Each recursive call costs a stack frame, and the call stack is a
//      fixed-size resource
//    - A Vec lives on the heap and grows as needed, so even a tree nested
//      thousands of levels deep walks fine
//    - The traversal order is identical: pop a node, visit it, push its
//      children in reverse
//
// 2. What does .rev() do?
//    - Reverses an iterator
//    - A stack is last-in-first-out, so pushing children right-to-left
//      means we pop them left-to-right
//
// 3. What does content.trim() return?
//    - A &str borrowing the middle of the original string
//    - No allocation happens until push_str copies it into the buffer
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_text_node() {
        let tree = Node::element("a", &[], vec![Node::text("  Home  ")]);
        assert_eq!(collect_text(&tree), "Home");
    }

    #[test]
    fn test_text_inside_nested_element() {
        let tree = Node::element(
            "a",
            &[],
            vec![
                Node::text("Go "),
                Node::element("b", &[], vec![Node::text("Here")]),
            ],
        );
        assert_eq!(collect_text(&tree), "Go Here");
    }

    #[test]
    fn test_no_text_at_all() {
        let tree = Node::element("a", &[], vec![Node::element("img", &[], vec![])]);
        assert_eq!(collect_text(&tree), "");
    }

    #[test]
    fn test_text_on_bare_text_root() {
        let tree = Node::text("\n  hi  \n");
        assert_eq!(collect_text(&tree), "hi");
    }

    #[test]
    fn test_other_nodes_are_descended_not_read() {
        // A comment wrapper contributes nothing itself, but text below
        // an Other node is still reachable.
        let tree = Node::other(vec![Node::element(
            "a",
            &[],
            vec![Node::text("inner")],
        )]);
        assert_eq!(collect_text(&tree), "inner");
    }

    // Pins down the documented join rule, quirk included: once the buffer
    // is non-empty, every later text node gets a separator first, even one
    // that trims to empty. "  Home  ", then "Page" inside an element, then
    // a whitespace-only text node yields "Home Page " - trailing space kept.
    #[test]
    fn test_trailing_space_from_empty_contribution() {
        let tree = Node::element(
            "a",
            &[],
            vec![
                Node::text("  Home  "),
                Node::element("span", &[], vec![Node::text("Page")]),
                Node::text("   \n  "),
            ],
        );
        assert_eq!(collect_text(&tree), "Home Page ");
    }

    #[test]
    fn test_leading_empty_contribution_adds_no_separator() {
        // Empty contributions BEFORE any real text don't seed a separator:
        // the buffer is still empty, so nothing is appended.
        let tree = Node::element(
            "a",
            &[],
            vec![Node::text("  \n "), Node::text("Home")],
        );
        assert_eq!(collect_text(&tree), "Home");
    }
}
