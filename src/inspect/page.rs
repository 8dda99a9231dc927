// src/inspect/page.rs
// =============================================================================
// Walks a parsed HTML document once and collects a PageSummary:
//
//   - the declared HTML version (from the doctype)
//   - the page title
//   - how many h1..h6 headings there are
//   - every <a href>, grouped by hostname
//   - whether there is a login form (<input type="password"> inside a <form>)
//
// Parsing is scraper's job (html5ever underneath). We only walk the tree it
// builds, in document order (pre-order), and stop at the first href that is
// not a URL. A half-collected summary is never handed out.
// =============================================================================

use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::{Html, Node};
use std::collections::{BTreeMap, BTreeSet};

use super::href::href_hostname;
use super::version::HtmlVersion;
use crate::error::Result;

/// Links grouped by hostname. Relative links live under the "" key.
pub type LinkGroups = BTreeMap<String, BTreeSet<String>>;

/// What we learned about a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    /// Declared HTML version, `None` when the page has no doctype.
    pub version: Option<HtmlVersion>,
    /// Text of the first <title>, empty if there is none.
    pub title: String,
    /// Heading tag (h1..h6) to number of occurrences. Unseen tags are absent.
    pub headings: BTreeMap<String, usize>,
    /// Raw href values by hostname, deduplicated.
    pub links: LinkGroups,
    /// Whether the page contains a password input inside a form.
    pub has_login_form: bool,
}

impl PageSummary {
    /// The version as reported to users: "" when no doctype was seen.
    pub fn version_str(&self) -> &'static str {
        self.version.map(|v| v.as_str()).unwrap_or("")
    }

    /// Total number of distinct links across all hostname groups.
    pub fn link_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }
}

/// Parses `html` and extracts its summary.
pub fn inspect_page(html: &str) -> Result<PageSummary> {
    let document = Html::parse_document(html);
    extract(&document)
}

/// Extracts the summary of an already parsed document.
pub fn extract(document: &Html) -> Result<PageSummary> {
    extract_tree(document.tree.root())
}

/// Extracts the summary of the subtree rooted at `root`.
pub fn extract_tree(root: NodeRef<'_, Node>) -> Result<PageSummary> {
    let mut collector = Collector::default();

    // descendants() is a pre-order walk that includes `root` itself.
    for node in root.descendants() {
        collector.visit(node)?;
    }

    let summary = collector.finish();
    log::debug!(
        "extracted page: version={:?} title={:?} headings={} links={} login_form={}",
        summary.version_str(),
        summary.title,
        summary.headings.values().sum::<usize>(),
        summary.link_count(),
        summary.has_login_form
    );

    Ok(summary)
}

// Accumulator owned by a single extract_tree() call.
#[derive(Default)]
struct Collector {
    version: Option<HtmlVersion>,
    title: Option<String>,
    headings: BTreeMap<String, usize>,
    links: LinkGroups,
    has_login_form: bool,
}

impl Collector {
    fn visit(&mut self, node: NodeRef<'_, Node>) -> Result<()> {
        match node.value() {
            Node::Doctype(doctype) => {
                if self.version.is_none() {
                    self.version = Some(HtmlVersion::from_doctype(doctype));
                }
            }
            Node::Element(element) => self.visit_element(node, element)?,
            _ => {}
        }
        Ok(())
    }

    fn visit_element(&mut self, node: NodeRef<'_, Node>, element: &Element) -> Result<()> {
        let name = element.name();

        if name.eq_ignore_ascii_case("title") && self.title.is_none() {
            self.title = node
                .children()
                .find_map(|child| child.value().as_text().map(|text| String::from(&**text)));
        }

        if let Some(level) = heading_level(name) {
            *self.headings.entry(level).or_insert(0) += 1;
        }

        if name.eq_ignore_ascii_case("a") {
            for href in attr_values(element, "href") {
                let host = href_hostname(href)?;
                self.links.entry(host).or_default().insert(href.to_string());
            }
        }

        if !self.has_login_form && name.eq_ignore_ascii_case("input") && is_password_input(element) {
            self.has_login_form = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|parent| parent.name().eq_ignore_ascii_case("form"))
            });
        }

        Ok(())
    }

    fn finish(self) -> PageSummary {
        PageSummary {
            version: self.version,
            title: self.title.unwrap_or_default(),
            headings: self.headings,
            links: self.links,
            has_login_form: self.has_login_form,
        }
    }
}

// "h1".."h6" in any case, returned lowercased.
fn heading_level(name: &str) -> Option<String> {
    let lower = name.to_ascii_lowercase();
    match lower.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(lower),
        _ => None,
    }
}

fn attr_values<'a>(element: &'a Element, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    element
        .attrs()
        .filter(move |(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

fn is_password_input(element: &Element) -> bool {
    attr_values(element, "type").any(|value| value.eq_ignore_ascii_case("password"))
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why descendants() instead of recursion?
//    - ego-tree already gives us a pre-order iterator over the tree
//    - No recursion means no stack depth limit on deeply nested pages
//    - `?` inside the loop stops the walk at the first bad href
//
// 2. Why BTreeMap/BTreeSet?
//    - Set semantics for links: the same href twice is stored once
//    - Ordered iteration, so reports and probe order are stable
//
// 3. What is `&**text`?
//    - `text` is a `&Text`; `*text` is the `Text`, and `**text` derefs
//      that to a `str`. `&**text` is the `&str` we copy into a String.
// -----------------------------------------------------------------------------
