// src/checker/reachability.rs
// =============================================================================
// Checks every link of a page and reports the ones that are unreachable,
// grouped by hostname.
//
// How it works:
// 1. One tokio task per hostname group (the groups come from the extractor)
// 2. Inside a task the links are probed one after another
// 3. Each task sends its invalid links over a shared channel
// 4. The coordinator (the caller's task) drains the channel; it closes once
//    every task has dropped its sender, i.e. once every task is done
//
// Relative links (the "" group) are glued onto the base URL first and are
// reported under the base URL's hostname.
// =============================================================================

use futures::future::join_all;
use reqwest::Client;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::mpsc;
use url::Url;

use super::probe::{probe_link, InvalidLink};
use crate::inspect::{hostname, LinkGroups};

/// Invalid links by hostname.
pub type InvalidLinks = BTreeMap<String, Vec<InvalidLink>>;

/// Probes links for reachability. Cheap to clone; the client is shared.
#[derive(Debug, Clone, Default)]
pub struct ReachabilityChecker {
    client: Client,
}

impl ReachabilityChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (proxies, user agent, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Probes every link in `links` and returns the invalid ones by hostname.
    ///
    /// Never fails: a link that cannot be reached becomes an [`InvalidLink`]
    /// and has no effect on the other links or groups.
    pub async fn check_links(&self, links: &LinkGroups, base: &Url) -> InvalidLinks {
        let (tx, mut rx) = mpsc::unbounded_channel::<(String, InvalidLink)>();
        let mut workers = Vec::with_capacity(links.len());

        for (domain, group) in links {
            let work = GroupWork::new(domain, group, base);
            let client = self.client.clone();
            let tx = tx.clone();

            workers.push(tokio::spawn(async move {
                for url in work.urls {
                    if let Some(invalid) = probe_link(&client, &url).await {
                        // The receiver only goes away once we are all done.
                        let _ = tx.send((work.domain.clone(), invalid));
                    }
                }
            }));
        }

        // Only the workers hold senders now.
        drop(tx);

        let mut out = InvalidLinks::new();
        while let Some((domain, invalid)) = rx.recv().await {
            log::warn!("inaccessible link {} ({})", invalid.url, invalid.reason);
            out.entry(domain).or_default().push(invalid);
        }

        for result in join_all(workers).await {
            if let Err(e) = result {
                log::warn!("link checking task failed: {}", e);
            }
        }

        log::debug!(
            "checked {} group(s), {} inaccessible link(s)",
            links.len(),
            out.values().map(Vec::len).sum::<usize>()
        );

        out
    }
}

/// Checks `links` with a default client.
pub async fn check_links(links: &LinkGroups, base: &Url) -> InvalidLinks {
    ReachabilityChecker::new().check_links(links, base).await
}

// One worker's share of the input: the hostname its results are reported
// under and the absolute URLs it has to probe.
struct GroupWork {
    domain: String,
    urls: Vec<String>,
}

impl GroupWork {
    fn new(domain: &str, group: &BTreeSet<String>, base: &Url) -> Self {
        if domain.is_empty() {
            Self {
                domain: hostname(base),
                urls: group.iter().map(|link| combine(base.as_str(), link)).collect(),
            }
        } else {
            Self {
                domain: domain.to_string(),
                urls: group.iter().cloned().collect(),
            }
        }
    }
}

/// Appends `relative` to `base`, dropping base's trailing '/' when
/// `relative` already starts with one. Purely textual: no "..", no query
/// merging.
pub fn combine(base: &str, relative: &str) -> String {
    match base.strip_suffix('/') {
        Some(trimmed) if relative.starts_with('/') => format!("{}{}", trimmed, relative),
        _ => format!("{}{}", base, relative),
    }
}
