// src/report/format.rs
// =============================================================================
// This module renders per-document results for output.
//
// The key design rule (and the one the original tool got wrong): every
// document owns its own report. Nothing is accumulated across documents,
// so document three can never reprint or renumber the links of document
// one, and numbering restarts at 1 in every report.
//
// Two output shapes:
// - Text: a header naming the document, then "N. Link: <href>, Text: <text>"
//   per link with N starting at 1
// - JSON: serde_json over the whole Vec<DocumentReport>
//
// Rust concepts:
// - Structs with Option fields for "this part may be absent"
// - enumerate(): pairing items with their index while iterating
// - serde attributes for tidy JSON
// =============================================================================

use serde::Serialize;

use crate::extract::Link;

// The result of scanning a single document
//
// Either links is meaningful (the scan worked, possibly finding nothing)
// or error is Some (the document could not be read). Mirrors how each
// input file is handled independently: one bad file never hides the
// results of the good ones.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// The document's identifier - the path the user gave us
    pub document: String,
    /// The links found, in document order (empty on failure)
    pub links: Vec<Link>,
    /// Why the scan failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentReport {
    // Builds a report for a successfully scanned document
    pub fn success(document: String, links: Vec<Link>) -> DocumentReport {
        DocumentReport {
            document,
            links,
            error: None,
        }
    }

    // Builds a report for a document that could not be scanned
    pub fn failure(document: String, error: String) -> DocumentReport {
        DocumentReport {
            document,
            links: Vec::new(),
            error: Some(error),
        }
    }

    /// Helper method to check if the scan succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

// Renders one document's report as text
//
// Format:
//   <document>:
//   1. Link: <href>, Text: <text>
//   2. Link: <href>, Text: <text>
//
// The index is document-local: it ALWAYS starts at 1, no matter how many
// documents were scanned before this one.
pub fn render_text(report: &DocumentReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", report.document));

    if let Some(error) = &report.error {
        out.push_str(&format!("   (skipped: {})\n", error));
        return out;
    }

    for (index, link) in report.links.iter().enumerate() {
        // enumerate() counts from 0, people count from 1
        out.push_str(&format!("{}. {}\n", index + 1, link));
    }

    out
}

// Renders all reports as pretty-printed JSON
pub fn render_json(reports: &[DocumentReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why build a String instead of printing directly?
//    - A function that RETURNS the rendered text is trivially testable:
//      assert on the string, no stdout capturing needed
//    - main.rs decides where the text actually goes
//
// 2. What does skip_serializing_if do?
//    - A serde attribute: when error is None, the JSON simply has no
//      "error" key at all instead of "error": null
//    - Keeps the success case clean
//
// 3. Why Vec::new() in failure()?
//    - An empty Vec allocates nothing in Rust
//    - Having links always present (just empty on failure) keeps the
//      struct simple - no enum needed for two cases this small
// -----------------------------------------------------------------------------
