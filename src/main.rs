// src/main.rs
// =============================================================================
// Entry point of the htmlinspect CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so --json output stays clean)
// 3. Get the page (HTTP or file), extract its summary, check its links
// 4. Print the report and exit with the proper code
//    (0 = all links fine, 1 = inaccessible links, 2 = error)
// =============================================================================

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use url::Url;

use cli::{Cli, Commands};
use htmlinspect::fetch::{fetch_page, page_client, parse_page_url};
use htmlinspect::{inspect_page, InspectionReport, ReachabilityChecker};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logger(cli.log_level.into());

    let report = match cli.command {
        Commands::Url {
            page_url,
            json,
            timeout,
        } => {
            let report = handle_url(&page_url, Duration::from_secs(timeout)).await?;
            print_report(&report, json)?;
            report
        }
        Commands::File {
            path,
            base_url,
            json,
        } => {
            let html = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let base = parse_page_url(&base_url)?;
            let report = inspect(&html, &base).await?;
            print_report(&report, json)?;
            report
        }
    };

    if report.inaccessible_count() > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Handles the 'url' subcommand: download the page, then inspect it.
async fn handle_url(page_url: &str, timeout: Duration) -> Result<InspectionReport> {
    let url = parse_page_url(page_url)?;
    let client = page_client(timeout).context("failed to build HTTP client")?;

    log::info!("fetching {}", url);
    let html = fetch_page(&client, &url).await?;

    inspect(&html, &url).await
}

// Extracts the summary and checks its links against `base`.
async fn inspect(html: &str, base: &Url) -> Result<InspectionReport> {
    let summary = inspect_page(html).context("failed to extract page contents")?;

    log::info!("checking {} link(s)", summary.link_count());
    let invalid = ReachabilityChecker::new()
        .check_links(&summary.links, base)
        .await;

    Ok(InspectionReport::build(base, summary, invalid))
}

fn print_report(report: &InspectionReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_summary(report);
    }
    Ok(())
}

// Human readable rendition of the report.
fn print_summary(report: &InspectionReport) {
    let version = if report.version.is_empty() {
        "unknown"
    } else {
        report.version.as_str()
    };

    println!("📄 {}", report.title);
    println!("   HTML version: {}", version);
    println!("   Login form:   {}", if report.login_form { "yes" } else { "no" });

    if !report.headings.is_empty() {
        let headings: Vec<String> = report
            .headings
            .iter()
            .map(|h| format!("{} x{}", h.level, h.total))
            .collect();
        println!("   Headings:     {}", headings.join(", "));
    }

    println!();
    println!("{:<40} {:>8}", "DOMAIN", "LINKS");
    println!("{}", "=".repeat(49));

    if let Some(internal) = &report.internal {
        println!("{:<40} {:>8}", format!("{} (internal)", internal.domain), internal.total);
    }
    for group in &report.external {
        println!("{:<40} {:>8}", truncate(&group.domain, 40), group.total);
    }

    println!();

    if report.inaccessible.is_empty() {
        println!("✅ No inaccessible links");
        return;
    }

    println!("{:<60} {}", "INACCESSIBLE URL", "REASON");
    println!("{}", "=".repeat(105));
    for group in &report.inaccessible {
        for link in &group.links {
            println!("{:<60} {}", truncate(&link.url, 60), link.reason);
        }
    }

    println!();
    println!("❌ {} inaccessible link(s)", report.inaccessible_count());
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let head: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
