// src/dispatch/mod.rs
// =============================================================================
// This module hands resolved URLs to the external download manager.
//
// Submodules:
// - runner: Spawns the download-manager process once per URL and records
//   each outcome
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod runner;

// Re-export public items from the runner
// This lets users write `dispatch::dispatch_links()` instead of
// `dispatch::runner::dispatch_links()`
pub use runner::{dispatch_links, downloader_exists, DispatchResult, DispatchStatus};

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is mod.rs?
//    - When you have a directory as a module (like src/dispatch/), the
//      mod.rs file inside it is the module root
//    - It's like index.js in JavaScript or __init__.py in Python
//
// 2. Why use 'pub use'?
//    - It re-exports items from submodules
//    - Makes the API cleaner for users of this module
//    - They don't need to know about our internal organization
// -----------------------------------------------------------------------------
