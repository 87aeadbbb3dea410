// src/extract/link.rs
// =============================================================================
// This module defines the Link record - the output of the extraction engine.
//
// A Link pairs an anchor's href value with the normalized text label built
// from everything nested inside the anchor. Both fields are plain owned
// Strings, so once the engine hands a Link to the caller, the caller owns
// it completely and the source tree can be dropped.
//
// Rust concepts:
// - Derive macros: Debug, Clone, PartialEq, Serialize generated for free
// - The Display trait: how a type prints itself with {}
// =============================================================================

use serde::Serialize;
use std::fmt;

// One extracted hyperlink
//
// href is the raw attribute value - empty string when the anchor had no
// href attribute at all. text is the normalized label - empty string when
// the anchor contained no non-whitespace text.
//
// #[derive(Serialize)] lets the --json output mode serialize these directly.
// PartialEq/Eq make the idempotence tests a one-line assert_eq!.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The raw value of the anchor's href attribute ("" if absent)
    pub href: String,
    /// The normalized text label (may be empty)
    pub text: String,
}

impl Link {
    // Builds a Link from owned parts
    pub fn new(href: String, text: String) -> Link {
        Link { href, text }
    }
}

// How a Link prints in the text report: "Link: <href>, Text: <text>"
impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link: {}, Text: {}", self.href, self.text)
    }
}
