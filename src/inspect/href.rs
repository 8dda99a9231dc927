// src/inspect/href.rs
// =============================================================================
// Turns the raw value of an <a href="..."> into the hostname it points at.
//
// href values come in three flavours:
//   1. full urls             https://www.google.com     -> "www.google.com"
//   2. relative urls         /some/relative/path/       -> ""
//   3. fragments             #top                       -> ""
// Scheme-relative urls (//cdn.example.com/x) still carry an authority, so
// they are grouped under that host.
//
// The url crate is very forgiving with percent signs, so broken escapes
// ("%%2", "%zz") are rejected here before it ever sees them.
// =============================================================================

use url::{Host, ParseError, Url};

use crate::error::{InspectError, Result};

/// Parses an href and returns its hostname, or "" when it has none.
pub fn href_hostname(href: &str) -> Result<String> {
    check_escapes(href)?;

    match Url::parse(href) {
        Ok(url) if has_authority(href) => Ok(hostname(&url)),
        // "http:foo" is an opaque reference; the url crate would still make
        // "foo" its host.
        Ok(_) => Ok(String::new()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            if href.trim_start().starts_with("//") {
                // Borrow a scheme just to read the authority.
                let url = Url::parse(&format!("http:{}", href.trim_start()))
                    .map_err(|e| invalid(href, e.to_string()))?;
                Ok(hostname(&url))
            } else {
                Ok(String::new())
            }
        }
        Err(e) => Err(invalid(href, e.to_string())),
    }
}

/// Hostname of a parsed URL without port or IPv6 brackets; "" if absent.
pub fn hostname(url: &Url) -> String {
    match url.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => String::new(),
    }
}

// The part after "scheme:" has to start with "//" to carry a host.
fn has_authority(href: &str) -> bool {
    href.split_once(':')
        .is_some_and(|(_, rest)| rest.trim_start().starts_with("//"))
}

// Every '%' in the path or the fragment has to start a two hex digit escape.
// The query is left alone, "?q=100%" is fine.
fn check_escapes(href: &str) -> Result<()> {
    let (before_fragment, fragment) = match href.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (href, None),
    };
    let path = before_fragment
        .split_once('?')
        .map_or(before_fragment, |(path, _)| path);

    check_part(href, path)?;
    if let Some(fragment) = fragment {
        check_part(href, fragment)?;
    }

    Ok(())
}

fn check_part(href: &str, part: &str) -> Result<()> {
    let bytes = part.as_bytes();

    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }

        let well_formed = bytes.len() > i + 2
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit();

        if !well_formed {
            let escape: String = part[i..].chars().take(3).collect();
            return Err(invalid(href, format!("invalid URL escape {:?}", escape)));
        }
    }

    Ok(())
}

fn invalid(href: &str, reason: String) -> InspectError {
    InspectError::InvalidHref {
        href: href.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_href() {
        assert_eq!(href_hostname("https://www.google.com").unwrap(), "www.google.com");
        assert_eq!(href_hostname("http://127.0.0.1:8080/x").unwrap(), "127.0.0.1");
        assert_eq!(href_hostname("http://[::1]:8080/x").unwrap(), "::1");
    }

    #[test]
    fn test_relative_hrefs_have_no_host() {
        for href in ["/some/relative/path/", "#", "#test", "page.html", "?q=1", ""] {
            assert_eq!(href_hostname(href).unwrap(), "", "href: {:?}", href);
        }
    }

    #[test]
    fn test_scheme_without_authority() {
        assert_eq!(href_hostname("mailto:someone@example.com").unwrap(), "");
        assert_eq!(href_hostname("javascript:void(0)").unwrap(), "");
    }

    #[test]
    fn test_scheme_relative_href() {
        assert_eq!(href_hostname("//cdn.example.com/lib.js").unwrap(), "cdn.example.com");
    }

    #[test]
    fn test_bad_escape() {
        let err = href_hostname("%%2").unwrap_err();
        assert!(matches!(err, InspectError::InvalidHref { ref href, .. } if href == "%%2"));
        assert!(err.to_string().contains("invalid URL escape"));

        assert!(href_hostname("/path/%zz").is_err());
        assert!(href_hostname("/trailing%2").is_err());
        assert!(href_hostname("/ok%20path").is_ok());
    }

    #[test]
    fn test_query_percent_is_not_an_escape() {
        assert_eq!(href_hostname("/x?q=100%").unwrap(), "");
        assert_eq!(href_hostname("https://example.com/search?q=100%&r=%zz").unwrap(), "example.com");
        assert!(href_hostname("/x#%zz").is_err());
        assert!(href_hostname("/x?q=1#frag%2").is_err());
        assert!(href_hostname("/%zz?q=1").is_err());
    }

    #[test]
    fn test_opaque_special_scheme_has_no_host() {
        assert_eq!(href_hostname("http:foo").unwrap(), "");
        assert_eq!(href_hostname("https:/example.com/x").unwrap(), "");
        assert_eq!(href_hostname("HTTPS://Example.com/x").unwrap(), "example.com");
    }

    #[test]
    fn test_unparsable_absolute_href() {
        assert!(href_hostname("http://example.com:99999/").is_err());
    }
}
