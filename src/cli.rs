// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// This tool has exactly one job - scan HTML files for links - so there are
// no subcommands, just positional file arguments and an output flag.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-harvester",
    version = "0.1.0",
    about = "A CLI tool to extract hyperlinks and their text from HTML documents",
    long_about = "link-harvester parses each given HTML file and lists every <a> tag it finds, \
                  together with the normalized text inside it. Each document gets its own \
                  report with numbering starting at 1."
)]
pub struct Cli {
    /// HTML files to scan, in order
    ///
    /// These are positional arguments (required, no flag needed).
    /// Each file is scanned independently: one unreadable file is
    /// reported and skipped, the rest are still processed.
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Output results in JSON format instead of per-document text reports
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[arg(required = true)] on a Vec do?
//    - A Vec field collects every remaining positional argument
//    - required = true means "at least one", so running with no files
//      prints usage instead of silently doing nothing
//
// 2. Where did the subcommands go?
//    - clap subcommands (an enum) are for tools with several modes
//    - One mode = plain arguments; reaching for an enum here would just
//      make the help text longer
//
// 3. Why String instead of PathBuf?
//    - The paths double as document identifiers in the reports, printed
//      and serialized as text
//    - Keeping them as the exact strings the user typed round-trips
//      cleanly into output
// -----------------------------------------------------------------------------
