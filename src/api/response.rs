//! Response types for the build price estimator API.
//!
//! This module defines the success bodies for each endpoint, the error
//! response structure, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ProvincialFactors;
use crate::error::EngineError;
use crate::models::{AuditStep, DetailedPriceBreakdown, PriceInputs, ProvinceCode};

/// Body returned by `POST /estimate`.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateResponse {
    /// Unique identifier for this estimate.
    pub estimate_id: Uuid,
    /// When the estimate was produced.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the estimate.
    pub engine_version: String,
    /// The validated inputs that were priced.
    pub inputs: PriceInputs,
    /// The itemized breakdown.
    pub breakdown: DetailedPriceBreakdown,
    /// Base build price divided by total area, to the nearest dollar.
    pub price_per_sqft: Decimal,
    /// How the breakdown was reached.
    pub audit_trace: AuditTrace,
}

/// The ordered rule applications behind an estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTrace {
    /// One step per rule applied.
    pub steps: Vec<AuditStep>,
    /// Time spent in the engine, in microseconds.
    pub duration_us: u64,
}

/// Body returned by `POST /estimate/total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalPriceResponse {
    /// The rounded base build price.
    pub total_price: Decimal,
}

/// One entry of `GET /provinces`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceInfo {
    /// Two-letter code.
    pub code: ProvinceCode,
    /// Display name.
    pub name: String,
    /// Regional cost factors.
    pub factors: ProvincialFactors,
}

/// Body returned by `GET /provinces`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvincesResponse {
    /// Every supported province and territory, in [`ProvinceCode::ALL`] order.
    pub provinces: Vec<ProvinceInfo>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown province error response.
    pub fn invalid_province_code(code: &str) -> Self {
        Self::with_details(
            "INVALID_PROVINCE_CODE",
            format!("Invalid province code: {}", code),
            format!(
                "Supported codes are {}",
                ProvinceCode::ALL
                    .iter()
                    .map(ProvinceCode::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidProvinceCode { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_province_code(&code),
            },
            EngineError::InvalidAreaValue {
                field,
                value,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AREA_VALUE",
                    format!("Invalid area for '{}': {}", field, message),
                    format!("Received {}", value),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
