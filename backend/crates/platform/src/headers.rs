//! Authorization header parsing
//!
//! Common functions for extracting client credentials from the
//! `Authorization` request header. Two schemes are supported:
//! `Basic <base64(email:password)>` and `Bearer <token>`.

use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose};

/// Credentials carried by a `Basic` Authorization header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

/// Error when extracting credentials from the Authorization header
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthHeaderError {
    #[error("Missing Authorization header")]
    Missing,

    #[error("Malformed Authorization header: {0}")]
    Malformed(&'static str),
}

/// Extract `Basic` credentials from request headers
///
/// Decodes the base64 payload and splits it at the first `:` into
/// email and password.
///
/// ## Returns
/// * `Ok(BasicCredentials)` - Successfully decoded credentials
/// * `Err(AuthHeaderError)` - Header missing or not a valid Basic payload
pub fn extract_basic(headers: &HeaderMap) -> Result<BasicCredentials, AuthHeaderError> {
    let value = authorization_value(headers)?;

    let encoded = value
        .strip_prefix("Basic ")
        .ok_or(AuthHeaderError::Malformed("expected Basic scheme"))?;

    let decoded = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthHeaderError::Malformed("invalid base64 payload"))?;

    let decoded = String::from_utf8(decoded)
        .map_err(|_| AuthHeaderError::Malformed("payload is not UTF-8"))?;

    let (email, password) = decoded
        .split_once(':')
        .ok_or(AuthHeaderError::Malformed("expected email:password"))?;

    Ok(BasicCredentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Extract a `Bearer` token from request headers
///
/// The token is returned verbatim; validation is up to the caller.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, AuthHeaderError> {
    let value = authorization_value(headers)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthHeaderError::Malformed("expected Bearer scheme"))?
        .trim();

    if token.is_empty() {
        return Err(AuthHeaderError::Malformed("empty bearer token"));
    }

    Ok(token.to_string())
}

fn authorization_value(headers: &HeaderMap) -> Result<&str, AuthHeaderError> {
    headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthHeaderError::Missing)?
        .to_str()
        .map_err(|_| AuthHeaderError::Malformed("header is not visible ASCII"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_basic() {
        // base64("author@example.com:hunter2hunter2")
        let headers = headers_with("Basic YXV0aG9yQGV4YW1wbGUuY29tOmh1bnRlcjJodW50ZXIy");
        let creds = extract_basic(&headers).unwrap();
        assert_eq!(creds.email, "author@example.com");
        assert_eq!(creds.password, "hunter2hunter2");
    }

    #[test]
    fn test_extract_basic_password_with_colon() {
        // base64("a@b.co:pa:ss") - only the first colon separates
        let headers = headers_with("Basic YUBiLmNvOnBhOnNz");
        let creds = extract_basic(&headers).unwrap();
        assert_eq!(creds.email, "a@b.co");
        assert_eq!(creds.password, "pa:ss");
    }

    #[test]
    fn test_extract_basic_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_basic(&headers), Err(AuthHeaderError::Missing));
    }

    #[test]
    fn test_extract_basic_wrong_scheme() {
        let headers = headers_with("Bearer some-token");
        assert!(matches!(
            extract_basic(&headers),
            Err(AuthHeaderError::Malformed(_))
        ));
    }

    #[test]
    fn test_extract_basic_invalid_base64() {
        let headers = headers_with("Basic !!!not-base64!!!");
        assert!(matches!(
            extract_basic(&headers),
            Err(AuthHeaderError::Malformed(_))
        ));
    }

    #[test]
    fn test_extract_basic_no_colon() {
        // base64("no-colon-here")
        let headers = headers_with("Basic bm8tY29sb24taGVyZQ==");
        assert!(matches!(
            extract_basic(&headers),
            Err(AuthHeaderError::Malformed(_))
        ));
    }

    #[test]
    fn test_extract_bearer() {
        let headers = headers_with("Bearer eyJhbGciOiJIUzI1NiJ9.payload.sig");
        let token = extract_bearer(&headers).unwrap();
        assert_eq!(token, "eyJhbGciOiJIUzI1NiJ9.payload.sig");
    }

    #[test]
    fn test_extract_bearer_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer(&headers), Err(AuthHeaderError::Missing));
    }

    #[test]
    fn test_extract_bearer_wrong_scheme() {
        let headers = headers_with("Basic YUBiLmNvOnBhc3M=");
        assert!(matches!(
            extract_bearer(&headers),
            Err(AuthHeaderError::Malformed(_))
        ));
    }

    #[test]
    fn test_extract_bearer_empty_token() {
        let headers = headers_with("Bearer    ");
        assert!(matches!(
            extract_bearer(&headers),
            Err(AuthHeaderError::Malformed(_))
        ));
    }
}
