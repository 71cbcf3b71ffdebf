//! Request correlation IDs.
//!
//! Callers may supply an `X-Request-ID` header; otherwise a UUID v7
//! (time-sortable) is generated. The ID only feeds log events, it is
//! never part of a response body.

use axum::http::HeaderMap;
use uuid::Uuid;

/// Newtype wrapper for request correlation IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new UUID v7 request ID.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// View the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Extract `X-Request-ID` from the headers or generate a fresh ID.
pub fn extract_or_generate_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(RequestId::from)
        .unwrap_or_else(RequestId::generate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_header_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "req-42".parse().unwrap());

        let id = extract_or_generate_request_id(&headers);
        assert_eq!(id.as_str(), "req-42");
    }

    #[test]
    fn generates_when_header_missing() {
        let id = extract_or_generate_request_id(&HeaderMap::new());
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn generates_when_header_empty() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "".parse().unwrap());

        let id = extract_or_generate_request_id(&headers);
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(
            RequestId::generate().as_str(),
            RequestId::generate().as_str()
        );
    }
}
