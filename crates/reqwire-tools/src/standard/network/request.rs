//! Header composition.
//!
//! Starts from an empty mapping, injects bearer authorization when a
//! non-empty token is supplied, overlays caller headers (caller wins),
//! and for JSON-encoded bodies adds `Content-Type: application/json`
//! unless the caller already set a content type.

use super::spec::RequestSpec;
use std::collections::HashMap;

pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";

/// Compose the outbound header mapping for one request.
pub(crate) fn compose_headers(spec: &RequestSpec, json_body: bool) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if let Some(token) = spec.token.as_deref().filter(|token| !token.is_empty()) {
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));
    }
    for (key, value) in &spec.headers {
        headers.insert(key.clone(), value.clone());
    }
    if json_body && !has_content_type(&headers) {
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
    }
    headers
}

fn has_content_type(headers: &HashMap<String, String>) -> bool {
    headers.keys().any(|key| key.eq_ignore_ascii_case("content-type"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_becomes_bearer_authorization() {
        let spec = RequestSpec::new("https://api.test").with_token("t0k3n");
        let headers = compose_headers(&spec, false);
        assert_eq!(headers.get("Authorization").unwrap(), "Bearer t0k3n");
    }

    #[test]
    fn empty_token_injects_nothing() {
        let spec = RequestSpec::new("https://api.test").with_token("");
        let headers = compose_headers(&spec, false);
        assert!(headers.is_empty());
    }

    #[test]
    fn caller_headers_override_authorization() {
        let spec = RequestSpec::new("https://api.test")
            .with_token("t0k3n")
            .with_header("Authorization", "Basic abc");
        let headers = compose_headers(&spec, false);
        assert_eq!(headers.get("Authorization").unwrap(), "Basic abc");
    }

    #[test]
    fn json_body_sets_content_type() {
        let spec = RequestSpec::new("https://api.test");
        let headers = compose_headers(&spec, true);
        assert_eq!(headers.get("Content-Type").unwrap(), CONTENT_TYPE_JSON);
    }

    #[test]
    fn caller_content_type_wins_case_insensitively() {
        let spec =
            RequestSpec::new("https://api.test").with_header("content-type", "application/xml");
        let headers = compose_headers(&spec, true);
        assert_eq!(headers.get("content-type").unwrap(), "application/xml");
        assert!(!headers.contains_key("Content-Type"));
    }

    #[test]
    fn no_content_type_without_json_body() {
        let spec = RequestSpec::new("https://api.test");
        let headers = compose_headers(&spec, false);
        assert!(headers.is_empty());
    }
}
