// src/inspect/mod.rs
// =============================================================================
// Document extraction: one pass over a parsed HTML tree producing a
// PageSummary (version, title, headings, links by host, login form).
//
// Submodules:
// - version: doctype -> HTML version
// - href: href value -> hostname (or a parse error)
// - page: the tree walk itself
// =============================================================================

mod href;
mod page;
mod version;

pub use href::{hostname, href_hostname};
pub use page::{extract, extract_tree, inspect_page, LinkGroups, PageSummary};
pub use version::HtmlVersion;
