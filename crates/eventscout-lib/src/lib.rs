//! Eventscout library entry points.
//!
//! This crate exposes the pieces the HTTP service is glued together from:
//! configuration for the upstream Discovery API, geohash encoding of
//! client coordinates, and the outbound HTTP client that forwards search
//! queries upstream. Higher-level consumers (the axum service) should only
//! depend on the items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod client;
pub mod config;
pub mod error;
pub mod geo;

pub use client::{DiscoveryClient, EventSearchParams, UpstreamReply};
pub use config::{DiscoveryConfig, DEFAULT_BASE_URL, UPSTREAM_TIMEOUT};
pub use error::{Error, Result};
pub use geo::{encode_geopoint, GEOHASH_PRECISION};
