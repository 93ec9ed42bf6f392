// src/extract/links.rs
// =============================================================================
// This module extracts file links from the listing page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative URLs to absolute URLs
//
// The filter runs on the raw href text, BEFORE resolution: a link matches
// when its href ends in the target extension, compared case-insensitively.
// Matching links are then resolved against the page URL, in document order,
// duplicates included.
//
// Rust concepts:
// - Iterators: For processing collections
// - Option<T>: For hrefs that fail to resolve
// - String methods: to_lowercase() and ends_with() for the suffix test
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all links ending in the target extension from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base_url: the URL of the page (for resolving relative links)
//   extension: the target suffix, matched case-insensitively (e.g. ".mkv")
//
// Returns: Vec<String> containing the matching absolute URLs, in the order
// they appear in the document. Duplicate hrefs yield duplicate entries -
// if the page lists a file twice, the download manager hears about it twice.
//
// Example:
//   html = "<a href='part1.mkv'>Part 1</a>"
//   base_url = "https://host/dir/"
//   extension = ".mkv"
//   result = ["https://host/dir/part1.mkv"]
pub fn extract_matching_links(html: &str, base_url: &str, extension: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags that carry an href
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    // Parse the base URL once
    // We'll use this to resolve relative links
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => {
            // If base URL is invalid, we can't resolve relative links
            eprintln!("Warning: Invalid base URL: {}", base_url);
            return links;
        }
    };

    // Lowercase the extension once so the suffix test is case-insensitive
    // in both directions (".MKV" matches "part2.mkv" and vice versa)
    let wanted = extension.to_lowercase();

    // Select all <a> elements with href attributes, in document order
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            // An empty href points back at the page itself - skip it
            if href.is_empty() {
                continue;
            }

            // The extension test runs on the raw href, not the resolved URL
            if !href.to_lowercase().ends_with(&wanted) {
                continue;
            }

            // Try to convert this to an absolute URL
            if let Some(absolute_url) = resolve_url(&base, href) {
                links.push(absolute_url);
            }
        }
    }

    links
}

// Resolves a possibly-relative URL to an absolute URL
//
// Parameters:
//   base: the base URL (the listing page)
//   href: the href value (might be relative, might be absolute)
//
// Returns: Some(absolute_url) or None if invalid
//
// Examples:
//   base = "https://host/dir/"
//   href = "part1.mkv" -> Some("https://host/dir/part1.mkv")
//   href = "../other.mkv" -> Some("https://host/other.mkv")
//   href = "https://cdn.host/file.mkv" -> Some("https://cdn.host/file.mkv")
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    // Try to parse href as a URL
    // If it's already absolute (has a scheme), this works and it passes
    // through unchanged
    // If it's relative, this fails, so we join it with base
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => match base.join(href) {
            Ok(url) => Some(url.to_string()),
            Err(_) => None, // Invalid URL, skip it
        },
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why filter on the href instead of the resolved URL?
//    - The href is what the page author wrote: "part1.mkv"
//    - Resolution can add query strings or reorder nothing, but keeping the
//      test on the raw text keeps behavior predictable and easy to reason
//      about: what you see in the page source is what gets matched
//
// 2. Why no deduplication?
//    - Listing pages are generated, so duplicates usually mean the file
//      really is listed twice (e.g. a "latest" alias next to the file)
//    - The download manager dedupes on its side; dropping entries here
//      would silently change what the operator asked for
//
// 3. What does document.select() guarantee about order?
//    - scraper walks the DOM tree in document order
//    - So our output Vec preserves the order links appear on the page,
//      which is the order the dispatcher will send them in
//
// 4. Why Option<String> from resolve_url?
//    - Some hrefs are garbage and won't parse even against a valid base
//    - Returning Option lets the caller skip those without an error
//
// 5. Why unwrap() on the selector?
//    - Selector::parse can fail if the CSS selector is invalid
//    - Our selector "a[href]" is constant and known to be valid
//    - If it fails, the program should panic (programmer error)
//    - Generally avoid unwrap() on user input!
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_matching_extension() {
        // The canonical case: two matches (one upper-case), one non-match
        let html = r#"
            <a href="part1.mkv">Part 1</a>
            <a href="part2.MKV">Part 2</a>
            <a href="readme.txt">Readme</a>
        "#;
        let links = extract_matching_links(html, "https://host/dir/", ".mkv");
        assert_eq!(
            links,
            vec![
                "https://host/dir/part1.mkv".to_string(),
                "https://host/dir/part2.MKV".to_string(),
            ]
        );
    }

    #[test]
    fn test_relative_href_resolves_under_base() {
        let html = r#"<a href="../episode.mkv">Up one</a>"#;
        let links = extract_matching_links(html, "https://host/series/s02/", ".mkv");
        assert_eq!(links, vec!["https://host/series/episode.mkv"]);
    }

    #[test]
    fn test_absolute_href_passes_through() {
        let html = r#"<a href="https://cdn.example.com/dir/file.mkv">CDN</a>"#;
        let links = extract_matching_links(html, "https://host/dir/", ".mkv");
        assert_eq!(links, vec!["https://cdn.example.com/dir/file.mkv"]);
    }

    #[test]
    fn test_uppercase_target_extension() {
        // Case-insensitivity works in the other direction too
        let html = r#"<a href="movie.mkv">Movie</a>"#;
        let links = extract_matching_links(html, "https://host/", ".MKV");
        assert_eq!(links, vec!["https://host/movie.mkv"]);
    }

    #[test]
    fn test_missing_and_empty_hrefs_excluded() {
        let html = r#"
            <a>no href at all</a>
            <a href="">empty href</a>
            <a href="ok.mkv">real link</a>
        "#;
        let links = extract_matching_links(html, "https://host/dir/", ".mkv");
        assert_eq!(links, vec!["https://host/dir/ok.mkv"]);
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        let html = r#"
            <a href="a.mkv">A</a>
            <a href="b.mkv">B</a>
            <a href="a.mkv">A again</a>
        "#;
        let links = extract_matching_links(html, "https://host/dir/", ".mkv");
        assert_eq!(
            links,
            vec![
                "https://host/dir/a.mkv",
                "https://host/dir/b.mkv",
                "https://host/dir/a.mkv",
            ]
        );
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let html = r#"<a href="notes.txt">Notes</a> <a href="index.html">Home</a>"#;
        let links = extract_matching_links(html, "https://host/dir/", ".mkv");
        assert!(links.is_empty());
    }

    #[test]
    fn test_query_string_href_does_not_match() {
        // The suffix test runs on the raw href, so a trailing query string
        // keeps the link out even though the path part ends in .mkv
        let html = r#"<a href="file.mkv?dl=1">Tracked link</a>"#;
        let links = extract_matching_links(html, "https://host/dir/", ".mkv");
        assert!(links.is_empty());
    }
}
