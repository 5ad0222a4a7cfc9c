//! Error types for the build price estimator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a build.

use thiserror::Error;

/// The main error type for the build price estimator.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use build_estimator::error::EngineError;
///
/// let error = EngineError::InvalidProvinceCode {
///     code: "XX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid province code: XX");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable pricing table.
    #[error("Invalid pricing configuration: {message}")]
    InvalidConfig {
        /// A description of what is wrong with the configuration.
        message: String,
    },

    /// Province code is not one of the supported provinces or territories,
    /// or has no provincial factors in the loaded configuration.
    #[error("Invalid province code: {code}")]
    InvalidProvinceCode {
        /// The code that could not be resolved.
        code: String,
    },

    /// A floor area was negative or not a finite number.
    #[error("Invalid area for '{field}' ({value}): {message}")]
    InvalidAreaValue {
        /// The input field holding the area.
        field: String,
        /// The rejected value, as given.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
