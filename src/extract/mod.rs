// src/extract/mod.rs
// =============================================================================
// This module is the extraction engine - the core of the whole tool.
//
// Submodules:
// - node: the Node tree model the engine walks (built by src/dom/)
// - link: the Link output record (href + normalized text)
// - walker: the pre-order tree walk that finds anchor elements
// - text: the text normalizer that builds each anchor's label
//
// The engine is deliberately boring from the outside: hand extract_links()
// a tree, get back a Vec<Link> in document order. No I/O, no errors, no
// state shared between calls.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod link;
mod node;
mod text;
mod walker;

// Re-export public items from submodules
// This lets users write `extract::extract_links()` instead of
// `extract::walker::extract_links()`
pub use link::Link;
pub use node::Node;
pub use walker::extract_links;
