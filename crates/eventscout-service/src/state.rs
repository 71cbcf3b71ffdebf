//! Application state shared across axum handlers.

use std::sync::Arc;

use eventscout_lib::{DiscoveryClient, DiscoveryConfig, Result};

/// Shared handler state: a handle on the upstream client.
///
/// Cheaply cloneable (`Arc` internally) and shared via axum's `State`
/// extractor. Read-only after startup; requests never mutate it.
#[derive(Debug, Clone)]
pub struct AppState {
    client: Arc<DiscoveryClient>,
}

impl AppState {
    /// Wrap an already-built client, e.g. one pointed at a stub server.
    pub fn new(client: DiscoveryClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Build the state from a configuration.
    pub fn from_config(config: DiscoveryConfig) -> Result<Self> {
        Ok(Self::new(DiscoveryClient::new(config)?))
    }

    /// Access the upstream client.
    pub fn client(&self) -> &DiscoveryClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_cheap_to_clone() {
        let config = DiscoveryConfig::new("test-key");
        let state = AppState::from_config(config).unwrap();
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.client, &cloned.client));
    }
}
