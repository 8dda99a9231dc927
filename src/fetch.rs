// src/fetch.rs
// =============================================================================
// Downloads the page we are going to inspect.
//
// This is plain I/O glue for the CLI: GET the url, insist on a 2xx answer,
// hand back the body as text. The extractor never touches the network.
// =============================================================================

use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::error::{InspectError, Result};

/// Builds the client used to fetch pages, bounded by `timeout`.
pub fn page_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

/// Parses a user supplied page or base URL.
pub fn parse_page_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| InspectError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// Fetches `url` and returns the response body.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let fetch_err = |source| InspectError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url.clone()).send().await.map_err(fetch_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(InspectError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(fetch_err)?;
    log::debug!("fetched {} ({} bytes)", url, body.len());

    Ok(body)
}
