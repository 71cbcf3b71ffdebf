use thiserror::Error;

/// Convenient result alias for the eventscout library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the Discovery API key is not configured.
    #[error("missing Discovery API key: set {env_var}")]
    MissingApiKey { env_var: &'static str },

    /// Raised when coordinates cannot be encoded into a geohash.
    #[error("geohash encoding failed: {message}")]
    Geocode { message: String },

    /// Raised when the upstream returned a body that is not valid JSON.
    /// Carries the upstream status code so the caller can echo it.
    #[error("upstream returned non-JSON content (status {status})")]
    NonJsonUpstream { status: u16 },

    /// Wrapper for HTTP client errors (connect failures, timeouts).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_error_includes_message() {
        let err = Error::Geocode {
            message: "latitude out of range".to_string(),
        };
        assert!(err.to_string().contains("latitude out of range"));
    }

    #[test]
    fn non_json_error_includes_status() {
        let err = Error::NonJsonUpstream { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}
