//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! tables from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ProvinceCode;

use super::types::{ContainerStep, FoundationStep, PricingConfig, PricingConstants, ProvincialFactors};

/// provinces.yaml file structure.
#[derive(Debug, Deserialize)]
struct ProvincesFile {
    provinces: BTreeMap<ProvinceCode, ProvincialFactors>,
}

/// foundation.yaml and containers.yaml file structure.
#[derive(Debug, Deserialize)]
struct StepsFile<S> {
    steps: Vec<S>,
}

/// Loads pricing tables from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── constants.yaml   # Base price, per-sqft rates, unit costs
/// ├── provinces.yaml   # Provincial factors, one entry per province
/// ├── foundation.yaml  # Pile quantities by main floor area
/// └── containers.yaml  # Shipping containers by main floor area
/// ```
///
/// # Example
///
/// ```no_run
/// use build_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard")?;
/// println!("Base price: ${}", loader.config().constants().base_price);
/// # Ok::<(), build_estimator::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tables fail validation (missing province, unsorted steps, ...)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let constants = Self::load_yaml::<PricingConstants>(&path.join("constants.yaml"))?;
        let provinces = Self::load_yaml::<ProvincesFile>(&path.join("provinces.yaml"))?;
        let foundation =
            Self::load_yaml::<StepsFile<FoundationStep>>(&path.join("foundation.yaml"))?;
        let containers =
            Self::load_yaml::<StepsFile<ContainerStep>>(&path.join("containers.yaml"))?;

        let config = PricingConfig::new(
            constants,
            provinces.provinces,
            foundation.steps,
            containers.steps,
        )?;

        debug!(
            path = %path.display(),
            foundation_steps = config.foundation_steps().len(),
            container_steps = config.container_steps().len(),
            "Loaded pricing configuration"
        );

        Ok(Self { config })
    }

    /// Wraps the embedded standard tables.
    pub fn standard() -> Self {
        Self {
            config: PricingConfig::standard(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Consumes the loader, returning the pricing configuration.
    pub fn into_config(self) -> PricingConfig {
        self.config
    }
}
