// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Check the download-manager executable exists (before touching the network)
// 3. Fetch the listing page and extract matching links
// 4. Hand each link to the download manager and print the results
// 5. Exit with proper code (0 = dispatched, 1 = nothing found, 2 = error)
//
// Rust concepts used:
// - async/await: The page fetch is async (reqwest)
// - Result<T, E>: For error handling (T = success type, E = error type)
// - The ? operator: To propagate fatal errors up to main
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod dispatch; // src/dispatch/ - download-manager invocation
mod extract; // src/extract/ - link extraction logic
mod fetch; // src/fetch/ - page fetching

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If a fatal error occurred (fetch failure etc.), print and exit 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = links dispatched (individual dispatch failures don't change this)
//   Ok(1) = no matching links found
//   Ok(2) = configuration error
//   Err = fetch or other fatal error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // The executable check comes first: if the download manager isn't where
    // the operator says it is, there's no point fetching anything.
    // A dry run never spawns it, so the check is skipped there.
    if !cli.dry_run && !dispatch::downloader_exists(&cli.downloader) {
        eprintln!(
            "❌ Download manager not found at: {}",
            cli.downloader.display()
        );
        eprintln!("   Pass the correct path with --downloader.");
        return Ok(2);
    }

    println!("🔍 Fetching page: {}", cli.page_url);
    let html = fetch::fetch_page(&cli.page_url, cli.timeout).await?;
    println!("📄 Page fetched ({} bytes)", html.len());

    // Extract the links we care about, in document order
    println!("🔗 Searching for links ending in {}...", cli.ext);
    let links = extract::extract_matching_links(&html, &cli.page_url, &cli.ext);
    for link in &links {
        println!("   Found: {}", link);
    }

    if links.is_empty() {
        println!("⚠️  No {} links found on the page.", cli.ext);
        return Ok(1);
    }

    println!("\n📦 Found {} matching file(s).", links.len());

    if cli.dry_run {
        println!("🚫 Dry run: nothing sent to the download manager.");
        return Ok(0);
    }

    println!(
        "\n📨 Sending {} link(s) to {}...\n",
        links.len(),
        cli.downloader.display()
    );

    // Dispatch each link, strictly in order; one failure never blocks the rest
    let results = dispatch::dispatch_links(&links, &cli.downloader, cli.queue);

    // Print results
    print_results(&results, cli.json)?;

    println!("\n🏁 Done. Check the download manager for the added downloads.");

    // Completion is success even when some invocations failed; the table
    // above tells the operator which URLs need another look
    Ok(0)
}

// Prints the results either as a table or JSON
// Parameters:
//   results: slice of DispatchResult structs
//   json: whether to output JSON format
fn print_results(results: &[dispatch::DispatchResult], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        // Print human-readable table
        print_table(results);
    }
    Ok(())
}

// Prints results as a human-readable table in the terminal
fn print_table(results: &[dispatch::DispatchResult]) {
    // Print table header
    println!("\n{:<60} {:<18} {:<30}", "URL", "STATUS", "MESSAGE");
    println!("{}", "=".repeat(108));

    // Print each result
    for result in results {
        let status_display = format_status(&result.status);
        let message = result.message.as_deref().unwrap_or("");

        // Truncate URL if too long for display
        let url_display = if result.url.len() > 57 {
            format!("{}...", &result.url[..57])
        } else {
            result.url.clone()
        };

        println!("{:<60} {:<18} {:<30}", url_display, status_display, message);
    }

    println!();

    // Print summary
    let sent_count = results.iter().filter(|r| r.is_ok()).count();
    let failed_count = results.len() - sent_count;

    println!("📊 Summary:");
    println!("   ✅ Sent: {}", sent_count);
    println!("   ❌ Failed: {}", failed_count);
    println!("   📋 Total: {}", results.len());
}

// Formats the status enum as a short display string
fn format_status(status: &dispatch::DispatchStatus) -> String {
    match status {
        dispatch::DispatchStatus::Sent => "✅ SENT".to_string(),
        dispatch::DispatchStatus::ExitNonZero { code } => format!("⚠️  EXIT {}", code),
        dispatch::DispatchStatus::LaunchFailed => "❌ LAUNCH FAILED".to_string(),
    }
}
