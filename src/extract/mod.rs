// src/extract/mod.rs
// =============================================================================
// This module turns raw HTML into the list of links we care about.
//
// Submodules:
// - links: Finds anchors by extension and resolves them to absolute URLs
//
// This file (mod.rs) is the module root - it exports the public API that
// other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod links;

// Re-export the extraction function
pub use links::extract_matching_links;
