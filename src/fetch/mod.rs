// src/fetch/mod.rs
// =============================================================================
// This module fetches the directory-listing page.
//
// Features:
// - One GET request with a configurable timeout
// - Non-success HTTP status codes are treated as errors
// - Returns the page body as a String for parsing
//
// Rust concepts:
// - Async programming: reqwest's client API is async
// - Result: For error handling
// =============================================================================

mod page;

// Re-export the main fetching function
pub use page::fetch_page;
