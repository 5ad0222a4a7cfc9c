//! Configuration loading and management for the build price estimator.
//!
//! This module provides the pricing tables (constants, provincial factors,
//! foundation and container step tables), either embedded or loaded from
//! YAML files, plus the settings for the server binary.
//!
//! # Example
//!
//! ```no_run
//! use build_estimator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Base price: {}", config.config().constants().base_price);
//! ```

mod loader;
mod settings;
mod standard;
mod types;

pub use loader::ConfigLoader;
pub use settings::{DEFAULT_BIND_ADDR, LogFormat, ServerSettings};
pub use standard::{
    standard_constants, standard_container_steps, standard_foundation_steps, standard_provinces,
};
pub use types::{
    ContainerStep, CostBounds, DeliveryRates, FoundationRates, FoundationStep, PricingConfig,
    PricingConstants, ProvincialFactors,
};
