// src/report.rs
// =============================================================================
// Shapes a PageSummary plus the invalid links into the report we print:
//
// {
//   "version": "5",
//   "title": "Some title",
//   "login_form": true,
//   "headings": [{"level": "h1", "total": 2}],
//   "internal": {"domain": "example.com", "links": [...], "total": 3},
//   "external": [{"domain": "www.google.com", "links": [...], "total": 1}],
//   "inaccessible": [{"domain": "example.com", "links": [{"url": ..., "reason": ...}], "total": 1}]
// }
//
// Internal links are the relative ones (made absolute with the page url) and
// the ones pointing at the page's own host. Everything else is external.
// =============================================================================

use serde::Serialize;
use url::Url;

use crate::checker::{combine, InvalidLink, InvalidLinks};
use crate::inspect::{hostname, LinkGroups, PageSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingCount {
    pub level: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkGroup {
    pub domain: String,
    pub links: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InaccessibleGroup {
    pub domain: String,
    pub links: Vec<InvalidLink>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionReport {
    pub version: String,
    pub title: String,
    pub login_form: bool,
    pub headings: Vec<HeadingCount>,
    pub internal: Option<LinkGroup>,
    pub external: Vec<LinkGroup>,
    pub inaccessible: Vec<InaccessibleGroup>,
}

impl InspectionReport {
    /// Builds the report for the page found at `page_url`.
    pub fn build(page_url: &Url, summary: PageSummary, invalid: InvalidLinks) -> Self {
        let PageSummary {
            version,
            title,
            headings,
            mut links,
            has_login_form,
        } = summary;

        // A page without a <title> is named after its url.
        let title = if title.is_empty() {
            page_url.to_string()
        } else {
            title
        };

        let headings = headings
            .into_iter()
            .map(|(level, total)| HeadingCount { level, total })
            .collect();

        let internal_links = take_internal_links(page_url, &mut links);
        let internal = (!internal_links.is_empty()).then(|| LinkGroup {
            domain: hostname(page_url),
            total: internal_links.len(),
            links: internal_links,
        });

        let external = links
            .into_iter()
            .map(|(domain, links)| LinkGroup {
                domain,
                total: links.len(),
                links: links.into_iter().collect(),
            })
            .collect();

        let inaccessible = invalid
            .into_iter()
            .map(|(domain, links)| InaccessibleGroup {
                domain,
                total: links.len(),
                links,
            })
            .collect();

        InspectionReport {
            version: version.map(|v| v.as_str()).unwrap_or("").to_string(),
            title,
            login_form: has_login_form,
            headings,
            internal,
            external,
            inaccessible,
        }
    }

    /// Number of links reported as inaccessible.
    pub fn inaccessible_count(&self) -> usize {
        self.inaccessible.iter().map(|group| group.total).sum()
    }
}

// Removes the relative group and the page host's group from `links` and
// returns their links, relative ones made absolute.
fn take_internal_links(page_url: &Url, links: &mut LinkGroups) -> Vec<String> {
    let mut internal = Vec::new();

    if let Some(relative) = links.remove("") {
        internal.extend(relative.iter().map(|link| combine(page_url.as_str(), link)));
    }

    if let Some(own) = links.remove(&hostname(page_url)) {
        internal.extend(own);
    }

    internal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::inspect_page;

    const PAGE: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Some title</title></head>
        <body>
            <h1><p> test </p></h1>
            <a href="/some/relative/path/"><span>link 2</span></a>
            <h1><p> test 2</p></h1>
            <form>
                <input type="text" name="email">
                <input type="password" name="password">
            </form>
            <h3><p> test 3</p></h3>
            <a href="https://www.facebook.com"><span>link 8</span></a>
            <a href="http://example.com/about"><span>about</span></a>
        </body>
        </html>
    "#;

    #[test]
    fn test_build_report() {
        let page_url = Url::parse("http://example.com/").unwrap();
        let summary = inspect_page(PAGE).unwrap();
        let invalid = InvalidLinks::from([(
            "example.com".to_string(),
            vec![InvalidLink {
                url: "http://example.com/some/relative/path/".to_string(),
                reason: "server responded with status 500".to_string(),
            }],
        )]);

        let report = InspectionReport::build(&page_url, summary, invalid);

        assert_eq!(report.version, "5");
        assert_eq!(report.title, "Some title");
        assert!(report.login_form);
        assert_eq!(
            report.headings,
            vec![
                HeadingCount { level: "h1".to_string(), total: 2 },
                HeadingCount { level: "h3".to_string(), total: 1 },
            ]
        );
        assert_eq!(
            report.internal,
            Some(LinkGroup {
                domain: "example.com".to_string(),
                links: vec![
                    "http://example.com/some/relative/path/".to_string(),
                    "http://example.com/about".to_string(),
                ],
                total: 2,
            })
        );
        assert_eq!(
            report.external,
            vec![LinkGroup {
                domain: "www.facebook.com".to_string(),
                links: vec!["https://www.facebook.com".to_string()],
                total: 1,
            }]
        );
        assert_eq!(report.inaccessible_count(), 1);
    }

    #[test]
    fn test_title_defaults_to_url() {
        let page_url = Url::parse("http://example.com/page").unwrap();
        let summary = inspect_page("<p>untitled</p>").unwrap();

        let report = InspectionReport::build(&page_url, summary, InvalidLinks::new());

        assert_eq!(report.title, "http://example.com/page");
        assert_eq!(report.version, "");
        assert_eq!(report.internal, None);
        assert!(report.external.is_empty());
        assert!(report.inaccessible.is_empty());
    }

    #[test]
    fn test_report_json_shape() {
        let page_url = Url::parse("http://example.com/").unwrap();
        let summary = inspect_page(r#"<!DOCTYPE html><title>t</title><a href="/x">x</a>"#).unwrap();

        let report = InspectionReport::build(&page_url, summary, InvalidLinks::new());
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(
            json,
            r#"{"version":"5","title":"t","login_form":false,"headings":[],"internal":{"domain":"example.com","links":["http://example.com/x"],"total":1},"external":[],"inaccessible":[]}"#
        );
    }
}
