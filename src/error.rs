// src/error.rs
// =============================================================================
// Error type shared by the library modules.
//
// Only two things can go wrong in the core:
// - an href that is not a URL (the whole extraction is aborted)
// - fetching the page itself (CLI glue)
//
// A link that turns out to be unreachable is NOT an error: the checker turns
// it into an InvalidLink record instead (see checker/reachability.rs).
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    /// An `<a href>` value could not be parsed as a URL.
    #[error("unable to parse URL {href:?}: {reason}")]
    InvalidHref { href: String, reason: String },

    /// A page or base URL given by the user is not an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request for the page failed before a response arrived.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page answered, but not with a 2xx status.
    #[error("failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

pub type Result<T> = std::result::Result<T, InspectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_href_message() {
        let err = InspectError::InvalidHref {
            href: "%%2".to_string(),
            reason: "invalid URL escape \"%%2\"".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"unable to parse URL "%%2": invalid URL escape "%%2""#
        );
    }

    #[test]
    fn test_http_status_message() {
        let err = InspectError::HttpStatus {
            url: "http://example.com/".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "failed to fetch http://example.com/: HTTP 503");
    }
}
