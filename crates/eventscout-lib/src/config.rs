//! Configuration for the upstream Discovery API.
//!
//! The API key is a secret and is only ever read from the environment;
//! the base URL can be overridden so tests can point the client at a
//! stub server.

use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default base URL for the Ticketmaster Discovery API.
pub const DEFAULT_BASE_URL: &str = "https://app.ticketmaster.com/discovery/v2";

/// Fixed timeout applied to every upstream request.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

const API_KEY_ENV: &str = "TICKETMASTER_API_KEY";
const BASE_URL_ENV: &str = "TICKETMASTER_BASE_URL";

/// Settings for [`DiscoveryClient`](crate::DiscoveryClient).
///
/// Constructed either from the environment (`from_env`) or explicitly
/// (`new`), and injected into the client rather than read from globals.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Base URL of the Discovery API, without a trailing slash.
    pub base_url: String,

    /// API key appended to every upstream request as the `apikey`
    /// query parameter.
    pub api_key: String,

    /// Per-request timeout for upstream calls.
    pub timeout: Duration,
}

impl DiscoveryConfig {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: UPSTREAM_TIMEOUT,
        }
    }

    /// Read configuration from the environment.
    ///
    /// - `TICKETMASTER_API_KEY` (required)
    /// - `TICKETMASTER_BASE_URL` (optional override, for example a stub
    ///   server in tests)
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey {
                env_var: API_KEY_ENV,
            })?;

        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url,
            api_key,
            timeout: UPSTREAM_TIMEOUT,
        })
    }

    /// Replace the base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Replace the upstream timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
