//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` headers. Absent headers and
//! non-bearer schemes both yield `None`; the caller decides how to answer.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from the Authorization header, if present.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)?
        .trim();

    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extracts_token() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with_auth("Bearer ");
        assert_eq!(extract_bearer(&headers), None);
    }
}
