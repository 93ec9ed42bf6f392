// src/fetch/page.rs
// =============================================================================
// This module performs the single page fetch at the start of a run.
//
// Strategy:
// - Build a reqwest Client with the user-supplied timeout
// - GET the listing page
// - Treat any non-2xx status as an error (a 404 listing has no links for us)
// - Decode the body to text and hand it to the extractor
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - The ? operator: Early-return on errors
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

// Fetches the listing page and returns its HTML content
//
// Parameters:
//   url: the page URL to fetch
//   timeout_secs: how long to wait before giving up on the request
//
// Returns: Result<String>
//   Success: the page body as text
//   Error: network failure, timeout, or non-success HTTP status
//
// Errors here are fatal to the run - there is nothing to dispatch without
// the page, so the caller propagates them straight up to main.
pub async fn fetch_page(url: &str, timeout_secs: u64) -> Result<String> {
    // Create an HTTP client with the configured timeout
    // One request per run, so no connection pooling concerns
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Failed to fetch {}: HTTP {}",
            url,
            response.status()
        ));
    }

    let html = response.text().await?;
    Ok(html)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is a non-success status an error here?
//    - For a link checker, a 404 is a *result* worth reporting
//    - For us, the listing page IS the input; without it the run is over
//    - So we turn bad statuses into errors and let ? bubble them up
//
// 2. What does .text().await do?
//    - Downloads the full response body
//    - Decodes it to a String using the charset from the headers
//    - It's async because the body arrives over the network in chunks
//
// 3. Why pass the timeout in rather than hard-coding it?
//    - Directory listings on slow mirrors can take a while
//    - The CLI exposes --timeout so the operator can tune it per run
// -----------------------------------------------------------------------------
