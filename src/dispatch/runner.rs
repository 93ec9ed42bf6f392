// src/dispatch/runner.rs
// =============================================================================
// This module invokes the download-manager executable, one process per URL.
//
// Key functionality:
// - Builds the fixed argument list the download manager expects
// - Runs invocations strictly in order, waiting for each to finish
// - Captures exit codes and stderr so failures can be reported
// - Never lets one failed invocation stop the rest of the batch
//
// The invocation contract (Internet Download Manager and compatibles):
//   <executable> /d <URL> /n [/a]
//   /d = download this URL
//   /n = silent mode, no confirmation prompts
//   /a = add to queue without starting (only with --queue)
//
// Rust concepts:
// - std::process::Command: For spawning external programs
// - Enums: To represent the different per-URL outcomes
// - Pattern matching: To handle spawn success vs failure
// =============================================================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

// The download manager's command-line flags. These are fixed by the
// external program's interface, not by us.
const DOWNLOAD_FLAG: &str = "/d";
const SILENT_FLAG: &str = "/n";
const QUEUE_FLAG: &str = "/a";

// Represents the outcome of dispatching a single URL
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
// #[derive(Debug, Clone)] enables debugging and cloning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchStatus {
    /// The download manager accepted the URL (exit code 0)
    Sent,
    /// The download manager ran but returned a non-zero exit code
    ExitNonZero { code: i32 },
    /// The process could not be started at all
    LaunchFailed,
}

// Represents the result of dispatching a single URL
//
// This struct holds everything we know about one invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    /// The URL that was dispatched
    pub url: String,
    /// The outcome of the invocation
    #[serde(flatten)] // This merges the DispatchStatus fields into DispatchResult
    pub status: DispatchStatus,
    /// Optional diagnostic text (stderr from the download manager, or the
    /// OS error when the process wouldn't start)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DispatchResult {
    /// Helper method to check if the dispatch succeeded
    pub fn is_ok(&self) -> bool {
        matches!(self.status, DispatchStatus::Sent)
    }
}

// Checks that the download-manager executable exists
//
// Called before any network work: if the executable isn't there, fetching
// and parsing the page would be wasted effort, so the run aborts up front.
pub fn downloader_exists(path: &Path) -> bool {
    path.exists()
}

// Dispatches every URL to the download manager, in order
//
// This is the main entry point for dispatching.
//
// Parameters:
//   urls: the resolved URLs, in the order extraction produced them
//   downloader: path to the download-manager executable
//   queue_only: whether to append the /a flag (queue without starting)
//
// Returns: one DispatchResult per URL, in the same order
//
// Why sequential?
// - The download manager is a single local program with its own queue
// - Firing invocations at it concurrently gains nothing and can confuse
//   its IPC; one process at a time, each awaited, keeps behavior predictable
pub fn dispatch_links(urls: &[String], downloader: &Path, queue_only: bool) -> Vec<DispatchResult> {
    let total = urls.len();
    let mut results = Vec::with_capacity(total);

    for (index, url) in urls.iter().enumerate() {
        println!("  Sending ({}/{}): {}", index + 1, total, url);
        results.push(dispatch_single(url, downloader, queue_only));
    }

    results
}

// Dispatches a single URL
//
// Spawns the download manager, waits for it to exit, and categorizes
// the outcome. Failures are recorded, not propagated - the caller keeps
// going with the next URL either way.
fn dispatch_single(url: &str, downloader: &Path, queue_only: bool) -> DispatchResult {
    let mut command = Command::new(downloader);
    command.arg(DOWNLOAD_FLAG).arg(url).arg(SILENT_FLAG);
    if queue_only {
        command.arg(QUEUE_FLAG);
    }

    // .output() runs the command to completion and captures stdout/stderr
    match command.output() {
        Ok(output) => {
            if output.status.success() {
                DispatchResult {
                    url: url.to_string(),
                    status: DispatchStatus::Sent,
                    message: None,
                }
            } else {
                // The process ran but signaled failure; surface whatever it
                // wrote to stderr (often empty for GUI download managers)
                let code = output.status.code().unwrap_or(-1);
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = stderr.trim();

                DispatchResult {
                    url: url.to_string(),
                    status: DispatchStatus::ExitNonZero { code },
                    message: if stderr.is_empty() {
                        Some(format!("exit code {}", code))
                    } else {
                        Some(stderr.to_string())
                    },
                }
            }
        }
        Err(e) => DispatchResult {
            url: url.to_string(),
            status: DispatchStatus::LaunchFailed,
            message: Some(e.to_string()),
        },
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is std::process::Command?
//    - Rust's builder API for spawning external programs
//    - .arg() appends one argument; the OS receives them as an array, so
//      there's no shell involved and no quoting/injection worries
//    - .output() = run, wait, and capture stdout/stderr in one call
//
// 2. Why does a non-zero exit not return an Err?
//    - A grumpy download manager is a per-URL outcome, not a program error
//    - Encoding it in DispatchStatus lets the batch continue and the
//      report show exactly which URLs need another look
//
// 3. What is status.code() and why unwrap_or(-1)?
//    - On unix, a process killed by a signal has no exit code
//    - code() returns Option<i32>; -1 is our stand-in for "no code"
//
// 4. What is from_utf8_lossy?
//    - stderr bytes aren't guaranteed to be valid UTF-8
//    - lossy conversion replaces bad bytes with U+FFFD instead of failing
//
// 5. Why &[String] instead of Vec<String>?
//    - We only need to read the URLs, not own them
//    - A slice borrow lets the caller keep the Vec for reporting afterwards
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn urls(n: usize) -> Vec<String> {
        (1..=n)
            .map(|i| format!("https://host/dir/part{}.mkv", i))
            .collect()
    }

    #[test]
    fn test_downloader_exists_for_missing_path() {
        assert!(!downloader_exists(Path::new("/no/such/download-manager")));
    }

    #[cfg(unix)]
    #[test]
    fn test_downloader_exists_for_real_path() {
        assert!(downloader_exists(Path::new("/bin/true")));
    }

    #[cfg(unix)]
    #[test]
    fn test_dispatch_invokes_once_per_url_in_order() {
        // /bin/true ignores its arguments and exits 0, which is all we need
        // to observe the per-URL bookkeeping
        let urls = urls(3);
        let results = dispatch_links(&urls, Path::new("/bin/true"), false);

        assert_eq!(results.len(), 3);
        for (result, url) in results.iter().zip(&urls) {
            assert_eq!(&result.url, url);
            assert!(result.is_ok());
            assert!(result.message.is_none());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_does_not_stop_the_batch() {
        // /bin/false exits 1 every time; both URLs must still be attempted
        let urls = urls(2);
        let results = dispatch_links(&urls, Path::new("/bin/false"), false);

        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(!result.is_ok());
            assert!(matches!(
                result.status,
                DispatchStatus::ExitNonZero { code: 1 }
            ));
            assert!(result.message.is_some());
        }
    }

    #[test]
    fn test_launch_failure_does_not_stop_the_batch() {
        let urls = urls(2);
        let missing = PathBuf::from("/no/such/download-manager");
        let results = dispatch_links(&urls, &missing, false);

        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(result.status, DispatchStatus::LaunchFailed));
            assert!(result.message.is_some());
        }
    }

    #[test]
    fn test_result_serializes_with_flattened_status() {
        let result = DispatchResult {
            url: "https://host/dir/part1.mkv".to_string(),
            status: DispatchStatus::ExitNonZero { code: 2 },
            message: Some("exit code 2".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "exit_non_zero");
        assert_eq!(json["code"], 2);
        assert_eq!(json["url"], "https://host/dir/part1.mkv");
    }
}
