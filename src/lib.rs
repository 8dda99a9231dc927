// src/lib.rs
// =============================================================================
// htmlinspect: inspect one HTML page and report its structure.
//
// - inspect: walks the parsed page once (version, title, headings, links,
//   login form)
// - checker: probes every link concurrently, one task per hostname
// - report: the JSON shape printed by the CLI
// - fetch: downloads the page
// =============================================================================

pub mod checker;
pub mod error;
pub mod fetch;
pub mod inspect;
pub mod report;

pub use checker::{check_links, InvalidLink, InvalidLinks, ReachabilityChecker};
pub use error::{InspectError, Result};
pub use inspect::{extract, inspect_page, HtmlVersion, LinkGroups, PageSummary};
pub use report::InspectionReport;
