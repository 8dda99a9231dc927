// src/checker/probe.rs
// =============================================================================
// Probes a single link with an HTTP GET and decides whether it is invalid.
//
// A link is invalid when:
// - the request fails outright (DNS, refused connection, bad scheme, ...)
// - the server answers with a 5xx status
//
// Everything else, 4xx included, counts as reachable. We only report links
// the *server* failed to serve; a 404 is the page author's problem.
// =============================================================================

use reqwest::Client;
use serde::Serialize;
use std::error::Error as StdError;

/// A link that could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidLink {
    /// The address that was probed (already combined with the base URL).
    pub url: String,
    /// Why it is considered invalid.
    pub reason: String,
}

/// Probes `url`, returning `Some(InvalidLink)` when it is not reachable.
pub async fn probe_link(client: &Client, url: &str) -> Option<InvalidLink> {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            // Release the connection right away, we never read the body.
            drop(response);

            log::debug!("probed {} -> {}", url, status.as_u16());

            if status.is_server_error() {
                Some(InvalidLink {
                    url: url.to_string(),
                    reason: format!("server responded with status {}", status.as_u16()),
                })
            } else {
                None
            }
        }
        Err(e) => {
            log::debug!("probe of {} failed: {}", url, e);

            Some(InvalidLink {
                url: url.to_string(),
                reason: describe_error(&e),
            })
        }
    }
}

// reqwest's own message is just "error sending request for url (...)"; the
// useful part (refused, dns, tls) sits further down the source chain.
fn describe_error(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_error_is_invalid() {
        let mut server = mockito::Server::new_async().await;
        let _m = server.mock("GET", "/boom").with_status(500).create_async().await;

        let url = format!("{}/boom", server.url());
        let invalid = probe_link(&Client::new(), &url).await;

        assert_eq!(
            invalid,
            Some(InvalidLink {
                url,
                reason: "server responded with status 500".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_client_errors_are_reachable() {
        let mut server = mockito::Server::new_async().await;
        let _m404 = server.mock("GET", "/missing").with_status(404).create_async().await;
        let _m403 = server.mock("GET", "/forbidden").with_status(403).create_async().await;
        let _m200 = server.mock("GET", "/ok").with_status(200).with_body("hi").create_async().await;

        let client = Client::new();
        for path in ["/missing", "/forbidden", "/ok"] {
            let url = format!("{}{}", server.url(), path);
            assert_eq!(probe_link(&client, &url).await, None, "path: {}", path);
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_is_invalid() {
        // Nothing listens on port 1.
        let url = "http://127.0.0.1:1/nope";
        let invalid = probe_link(&Client::new(), url).await.unwrap();

        assert_eq!(invalid.url, url);
        assert!(
            invalid.reason.to_lowercase().contains("connect"),
            "reason: {}",
            invalid.reason
        );
    }

    #[tokio::test]
    async fn test_relative_url_is_invalid() {
        let invalid = probe_link(&Client::new(), "//cdn.example.com/lib.js").await.unwrap();
        assert_eq!(invalid.url, "//cdn.example.com/lib.js");
        assert!(!invalid.reason.is_empty());
    }
}
