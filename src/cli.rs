// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Unlike tools with several modes, link-dispatch does exactly one thing
// (scrape a page, send matching links to a download manager), so there are
// no subcommands - just one args struct.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - PathBuf: An owned filesystem path (like String, but for paths)
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-dispatch",
    version = "0.1.0",
    about = "Scrape a directory-listing page and send matching file links to a download manager",
    long_about = "link-dispatch fetches a directory-listing web page, collects every link that \
                  ends in a target file extension, and hands each one to an external \
                  download-manager executable. Handy for grabbing whole seasons or file sets \
                  from plain HTTP index pages."
)]
pub struct Cli {
    /// URL of the directory-listing page to scrape
    ///
    /// This is a positional argument (required, no flag needed)
    pub page_url: String,

    /// Path to the download-manager executable
    ///
    /// The program is invoked once per matching link as:
    ///   <downloader> /d <URL> /n
    #[arg(long)]
    pub downloader: PathBuf,

    /// File extension to match, case-insensitive (e.g. ".mkv")
    ///
    /// Only links whose href ends in this suffix are dispatched
    #[arg(long, default_value = ".mkv")]
    pub ext: String,

    /// Page-fetch timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Queue links in the download manager without starting them
    ///
    /// Appends the /a flag to each invocation
    #[arg(long)]
    pub queue: bool,

    /// List matching links without invoking the download manager
    #[arg(long)]
    pub dry_run: bool,

    /// Output dispatch results in JSON format instead of a table
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands here?
//    - Subcommands (like `git commit` vs `git push`) make sense when a tool
//      has several distinct actions
//    - This tool has one pipeline, so a flat struct keeps the CLI simple:
//      link-dispatch https://host/dir/ --downloader /opt/idm/IDMan.exe
//
// 2. What is PathBuf?
//    - The owned version of &Path, like String is to &str
//    - clap parses the --downloader value straight into it
//    - We use PathBuf (not String) so path methods like .exists() are at hand
//
// 3. How do defaults work?
//    - #[arg(long, default_value = ".mkv")] for string-like values
//    - #[arg(long, default_value_t = 30)] for values with a Display impl
//    - Flags (bool fields) default to false and need no default_value
//
// 4. Where does the help text come from?
//    - The /// doc comments on each field become the --help output
//    - First line = short help, rest = long help (shown with --help)
// -----------------------------------------------------------------------------
