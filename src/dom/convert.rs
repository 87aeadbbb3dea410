// src/dom/convert.rs
// =============================================================================
// This module is the bridge between the external HTML parser and our engine.
//
// We use the `scraper` crate (built on html5ever, Mozilla's HTML parser) to
// turn raw HTML into a DOM, then convert that DOM into our own Node model.
// The conversion buys us two things:
// - The extraction engine depends only on the Node shape, not on scraper's
//   types, so tests can build trees by hand and the parser could be swapped
//   without touching the engine
// - html5ever does the dirty work: it recovers from malformed markup,
//   lower-cases element names, and keeps only the first of duplicate
//   attributes - all before we ever see the tree
//
// Parsing here is total. html5ever never rejects input; the worst HTML in
// the world still becomes SOME tree. That is why parse_document returns a
// plain Node instead of a Result.
//
// Rust concepts:
// - Recursion over a borrowed tree (NodeRef is a cheap Copy handle)
// - Iterator chains: map + collect to convert child lists
// =============================================================================

use ego_tree::NodeRef;
use scraper::node::Node as DomNode;
use scraper::Html;

use crate::extract::Node;

// Parses an HTML document into the engine's Node model
//
// Parameters:
//   html: the raw HTML source (borrowed as &str)
//
// Returns: the root Node of the converted tree. The root is always an
// Other node (html5ever's document container), with the actual <html>
// element somewhere beneath it.
pub fn parse_document(html: &str) -> Node {
    let document = Html::parse_document(html);
    convert_node(document.tree.root())
}

// Converts one scraper DOM node (and, recursively, its subtree)
//
// Mapping:
//   Element -> Node::Element (tag, ordered attribute pairs, children)
//   Text    -> Node::Text (raw payload, untrimmed - trimming is the
//              normalizer's job, not the parser boundary's)
//   everything else (document/fragment containers, comments, doctypes,
//   processing instructions) -> Node::Other, children kept so the walk
//   can pass through them
//
// scraper's default `deterministic` feature stores attributes in insertion
// order, so the pairs we collect here preserve source order for the
// first-occurrence-wins lookup.
fn convert_node(dom: NodeRef<'_, DomNode>) -> Node {
    match dom.value() {
        DomNode::Element(element) => Node::Element {
            tag: element.name().to_string(),
            attrs: element
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            children: convert_children(dom),
        },
        DomNode::Text(text) => Node::text(&text.text),
        _ => Node::other(convert_children(dom)),
    }
}

// Converts all children of a DOM node, left to right
fn convert_children(dom: NodeRef<'_, DomNode>) -> Vec<Node> {
    dom.children().map(convert_node).collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is NodeRef?
//    - scraper stores its DOM in an `ego_tree` arena
//    - NodeRef is a small Copy handle (tree pointer + node id), so passing
//      it by value is free
//    - .value() gives the node's data, .children() iterates its child refs
//
// 2. Why is recursion OK here when the engine uses explicit stacks?
//    - This conversion runs once per document, directly over the tree the
//      parser just built - its depth is the parser's output depth
//    - The engine's walks are the hot path and the part that must stay
//      stack-safe; see src/extract/walker.rs and text.rs
//
// 3. Why Node::Other for Document and Fragment?
//    - Our model only distinguishes what extraction cares about: elements
//      (may be anchors), text (feeds labels), and "everything else"
//    - Containers, comments and doctypes all behave identically during the
//      walk: contribute nothing, but let the walk through to the children
// -----------------------------------------------------------------------------
