// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - probe: one HTTP GET per link, decides whether the link is invalid
// - reachability: fans the probes out, one task per hostname group, and
//   collects the invalid links back by hostname
//
// Only network failures and 5xx answers are reported. A 404 is "reachable".
// =============================================================================

mod probe;
mod reachability;

pub use probe::{probe_link, InvalidLink};
pub use reachability::{check_links, combine, InvalidLinks, ReachabilityChecker};
