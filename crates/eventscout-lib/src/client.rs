//! Outbound HTTP client for the Discovery API.
//!
//! The client forwards assembled query parameters upstream and hands the
//! raw JSON body back together with the upstream status code, without any
//! translation. Transport failures and non-JSON bodies surface as typed
//! errors so the service layer can map them onto its wire contract.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::error::{Error, Result};

/// Raw reply from the Discovery API: the upstream status code and the
/// parsed JSON body, passed through unmodified.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    /// Upstream HTTP status, echoed by the service as its own.
    pub status: u16,

    /// Upstream response body, verbatim.
    pub body: Value,
}

/// Assembled parameters for an event search.
#[derive(Debug, Clone)]
pub struct EventSearchParams {
    /// Free-text search keyword.
    pub keyword: String,

    /// Search radius around the geohash, in miles.
    pub radius: i64,

    /// Geohash of the search center (see [`crate::encode_geopoint`]).
    pub geo_point: String,

    /// Optional Discovery API segment identifier (event category).
    pub segment_id: Option<String>,
}

/// HTTP client for the Discovery API.
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` pools
/// connections and carries the fixed upstream timeout.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    http: Client,
    config: DiscoveryConfig,
}

impl DiscoveryClient {
    /// Build a client from the given configuration.
    ///
    /// The configured timeout is applied at the `reqwest::Client` level
    /// and bounds every upstream call.
    pub fn new(config: DiscoveryConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Search for events around a geohash.
    ///
    /// Issues `GET {base}/events.json` with `keyword`, `radius`,
    /// `unit=miles`, `geoPoint`, and `segmentId` when present.
    pub async fn search_events(&self, params: &EventSearchParams) -> Result<UpstreamReply> {
        let mut query = vec![
            ("keyword", params.keyword.clone()),
            ("radius", params.radius.to_string()),
            ("unit", "miles".to_string()),
            ("geoPoint", params.geo_point.clone()),
        ];
        if let Some(segment_id) = &params.segment_id {
            query.push(("segmentId", segment_id.clone()));
        }
        self.get("events.json", &query).await
    }

    /// Fetch details for a single event by its Discovery API identifier.
    pub async fn event_details(&self, event_id: &str) -> Result<UpstreamReply> {
        self.get(&format!("events/{}.json", event_id), &[]).await
    }

    /// Search for venues matching a keyword.
    pub async fn search_venues(&self, keyword: &str) -> Result<UpstreamReply> {
        self.get("venues.json", &[("keyword", keyword.to_string())])
            .await
    }

    /// Issue a GET request against a Discovery API resource.
    ///
    /// The API key is appended here so callers never handle the secret.
    /// The status code is never translated: whatever the upstream
    /// returned is what the reply carries, as long as the body is JSON.
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<UpstreamReply> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);

        let mut query: Vec<(&str, &str)> = vec![("apikey", self.config.api_key.as_str())];
        query.extend(params.iter().map(|(name, value)| (*name, value.as_str())));

        debug!(url = %url, "forwarding request upstream");

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(UpstreamReply { status, body }),
            Err(_) => {
                debug!(status = status, "upstream body is not JSON");
                Err(Error::NonJsonUpstream { status })
            }
        }
    }
}
