//! Application state for the build price estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PricingConfig;

/// Shared application state.
///
/// Holds the pricing configuration. It is never mutated after startup, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PricingConfig>,
}

impl AppState {
    /// Creates a new application state with the given pricing configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PricingConfig::standard())
    }
}
