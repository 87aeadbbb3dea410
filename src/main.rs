// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Scan every given HTML file INDEPENDENTLY: read it, hand it to the
//    parser boundary, run the extraction engine over the resulting tree
// 3. Print one report per document (text or JSON)
// 4. Exit with proper code (0 = success, 1 = some files unreadable,
//    2 = error)
//
// The important architectural rule lives in step 2: every document gets a
// fresh result sequence. There is no accumulator that survives from one
// file to the next, so results can never leak or duplicate across
// documents - each report numbers its own links from 1.
//
// Rust concepts used:
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Ownership: each report owns its links outright
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod dom; // src/dom/ - external HTML parser boundary
mod extract; // src/extract/ - the link extraction engine
mod report; // src/report/ - per-document output rendering

// Import items we need from our modules
use cli::Cli;
use clap::Parser; // Parser trait enables the parse() method
use extract::Link;
use report::DocumentReport;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{anyhow, Result};

fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every document scanned
//   Ok(1) = at least one document could not be read
//   Err = unexpected error (exit code 2)
fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // One report per document, in the order the files were given.
    // This Vec of per-document results is the ONLY place results live -
    // scanning file N never sees anything from file N-1.
    let mut reports = Vec::new();

    for file in &cli.files {
        let report = match scan_document(file) {
            Ok(links) => DocumentReport::success(file.clone(), links),
            Err(e) => {
                // Per-document failure: warn on stderr, record it, and
                // keep going with the remaining files
                eprintln!("Warning: {}", e);
                DocumentReport::failure(file.clone(), e.to_string())
            }
        };
        reports.push(report);
    }

    // Print results and determine exit code
    print_reports(&reports, cli.json)?;

    // Count how many documents failed to scan
    let failed_count = reports.iter().filter(|r| !r.is_ok()).count();

    if failed_count > 0 {
        Ok(1) // Exit code 1 = some documents were skipped
    } else {
        Ok(0) // Exit code 0 = all good
    }
}

// Scans a single HTML document
//
// Parameters:
//   path: the file to read and scan
//
// Returns: the document's own Vec<Link>, freshly built - or an error if
// the file couldn't be read. Parsing itself cannot fail: html5ever makes
// SOME tree out of any input, and extraction over a tree is total.
fn scan_document(path: &str) -> Result<Vec<Link>> {
    let html = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Couldn't read file '{}': {}", path, e))?;

    let root = dom::parse_document(&html);

    Ok(extract::extract_links(&root))
}

// Prints the reports either as per-document text or as JSON
// Parameters:
//   reports: one DocumentReport per scanned file
//   json: whether to output JSON format
fn print_reports(reports: &[DocumentReport], json: bool) -> Result<()> {
    if json {
        // Serialize all reports to JSON and print
        // (stdout carries ONLY the JSON; warnings already went to stderr)
        println!("{}", report::render_json(reports)?);
    } else {
        // Human-readable: one block per document, blank line between them
        for report in reports {
            println!();
            print!("{}", report::render_text(report));
        }
        print_summary(reports);
    }
    Ok(())
}

// Prints the closing summary block in text mode
fn print_summary(reports: &[DocumentReport]) {
    let scanned = reports.iter().filter(|r| r.is_ok()).count();
    let skipped = reports.len() - scanned;
    let total_links: usize = reports.iter().map(|r| r.links.len()).sum();

    println!();
    println!("📊 Summary:");
    println!("   📄 Documents scanned: {}", scanned);
    if skipped > 0 {
        println!("   ⚠️  Documents skipped: {}", skipped);
    }
    println!("   🔗 Links found: {}", total_links);
}
