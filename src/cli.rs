// src/cli.rs
// =============================================================================
// Command-line interface, built with clap's derive API.
//
//   htmlinspect url https://example.com --json
//   htmlinspect file page.html --base-url https://example.com/
//   htmlinspect --log-level debug url https://example.com
// =============================================================================

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "htmlinspect",
    version,
    about = "Inspect an HTML page: version, title, headings, login form and inaccessible links",
    long_about = "htmlinspect parses an HTML page, reports its declared HTML version, title, \
                  heading counts and whether it has a login form, then checks every link on it \
                  and lists the ones that are unreachable or answer with a server error."
)]
pub struct Cli {
    /// Minimum log level written to stderr (overrides RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page over HTTP and inspect it
    ///
    /// Example: htmlinspect url https://example.com
    Url {
        /// Page to inspect; also the base for its relative links
        page_url: String,

        /// Output the report as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Seconds to wait for the page itself (link probes are not bounded)
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },

    /// Inspect an HTML file from disk
    ///
    /// Example: htmlinspect file index.html --base-url https://example.com/
    File {
        /// Path to the HTML file
        path: std::path::PathBuf,

        /// URL the page would be served from, used for relative links
        #[arg(long)]
        base_url: String,

        /// Output the report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_command() {
        let cli = Cli::parse_from(["htmlinspect", "url", "https://example.com", "--json"]);
        match cli.command {
            Commands::Url { page_url, json, timeout } => {
                assert_eq!(page_url, "https://example.com");
                assert!(json);
                assert_eq!(timeout, 10);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_parse_file_command() {
        let cli = Cli::parse_from([
            "htmlinspect",
            "file",
            "index.html",
            "--base-url",
            "https://example.com/",
            "--log-level",
            "debug",
        ]);
        match cli.command {
            Commands::File { path, base_url, json } => {
                assert_eq!(path, std::path::PathBuf::from("index.html"));
                assert_eq!(base_url, "https://example.com/");
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_file_requires_base_url() {
        assert!(Cli::try_parse_from(["htmlinspect", "file", "index.html"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
