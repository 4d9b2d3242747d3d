//! Session-token extraction from an incoming request.
//!
//! Responsibility:
//! - Turn a raw credential (Authorization header or a legacy session cookie)
//!   into the canonical token string used for the session-store lookup.
//! - No verification happens here: cookies carry a "token.signature" value,
//!   but the signature is not checked — the session table is the source of
//!   truth, so the lookup itself decides validity.
//!
//! Priority:
//! 1. `Authorization: Bearer <token>` (cross-origin API clients)
//! 2. The first configured cookie name that is present (same-origin browsers)
//!
//! Absent input is not an error; it yields `None`, which the caller must
//! treat as unauthenticated.

use axum::http::{HeaderMap, header};
use percent_encoding::percent_decode_str;

/// Canonicalize a session cookie value.
///
/// Cookie format: URL-encoded "token.signature". Only the token part is
/// matched against the store, so percent-decode and keep the left segment.
pub fn canonical_token_from_cookie(cookie_value: &str) -> String {
    let decoded = percent_decode_str(cookie_value).decode_utf8_lossy();

    match decoded.split_once('.') {
        Some((token, _signature)) => token.to_string(),
        None => decoded.into_owned(),
    }
}

/// Find a cookie by name in a raw `Cookie` header value.
fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header.split(';').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k.trim() == name).then_some(v.trim())
    })
}

/// Extract the canonical session token from request headers.
///
/// `cookie_names` come from configuration (deployment-specific accretion,
/// not a protocol contract) and are tried in order.
pub fn extract(headers: &HeaderMap, cookie_names: &[String]) -> Option<String> {
    // Authorization header takes precedence over cookies.
    if let Some(auth) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        && let Some(token) = auth.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        return Some(token.to_string());
    }

    for name in cookie_names {
        for cookie_header in headers.get_all(header::COOKIE) {
            if let Ok(raw) = cookie_header.to_str()
                && let Some(value) = cookie_value(raw, name)
            {
                let token = canonical_token_from_cookie(value);
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_credentials_yields_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract(&headers, &names(&["session_token"])), None);
    }

    #[test]
    fn bearer_header_is_used() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );
        assert_eq!(
            extract(&headers, &names(&["session_token"])),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn non_bearer_scheme_falls_back_to_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session_token=tok.sig"),
        );
        assert_eq!(
            extract(&headers, &names(&["session_token"])),
            Some("tok".to_string())
        );
    }

    #[test]
    fn header_takes_precedence_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session_token=from-cookie.sig"),
        );
        assert_eq!(
            extract(&headers, &names(&["session_token"])),
            Some("from-header".to_string())
        );
    }

    #[test]
    fn cookie_is_percent_decoded_and_signature_stripped() {
        let mut headers = HeaderMap::new();
        // "abc.def%2Fghi" → decoded "abc.def/ghi" → token "abc"
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("other=1; session_token=abc.def%2Fghi"),
        );
        assert_eq!(
            extract(&headers, &names(&["session_token"])),
            Some("abc".to_string())
        );
    }

    #[test]
    fn cookie_without_dot_is_kept_whole() {
        assert_eq!(canonical_token_from_cookie("plaintoken"), "plaintoken");
    }

    #[test]
    fn only_first_dot_splits() {
        assert_eq!(canonical_token_from_cookie("a.b.c"), "a");
    }

    #[test]
    fn cookie_names_are_tried_in_configured_order() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("legacy=old.sig; preferred=new.sig"),
        );
        assert_eq!(
            extract(&headers, &names(&["preferred", "legacy"])),
            Some("new".to_string())
        );
    }

    #[test]
    fn empty_bearer_token_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(extract(&headers, &names(&["session_token"])), None);
    }
}
