//! Event discovery proxy HTTP service.
//!
//! A thin axum frontend over the Discovery API: it validates a handful of
//! scalar parameters, encodes client coordinates into a geohash, forwards
//! the query upstream through `eventscout-lib`, and relays the upstream
//! JSON (or a structured local error) back to the caller.
//!
//! # Endpoints
//!
//! - `GET /health` - liveness check
//! - `POST /api/search` - echo endpoint for the search form
//! - `GET /api/eventSearch` - keyword search around a coordinate
//! - `GET /api/eventDetails` - single event lookup by identifier
//! - `GET /api/venueDetails` - venue search by keyword
//!
//! All handlers are stateless and independent; the only shared resources
//! are the read-only configuration and the pooled upstream client.

#![deny(warnings)]

pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod params;
pub mod reply;
mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId};
pub use params::{resolve_params, EventSearchQuery};
pub use reply::{relay, ApiReply, ErrorReply};
pub use state::AppState;

/// Assemble the service router.
///
/// The CORS layer is permissive: the original deployment serves the
/// search form from a different origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/search", post(handlers::search_echo))
        .route("/api/eventSearch", get(handlers::event_search))
        .route("/api/eventDetails", get(handlers::event_details))
        .route("/api/venueDetails", get(handlers::venue_details))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
