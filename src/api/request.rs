//! Request types for the build price estimator API.
//!
//! This module defines the JSON request body shared by the `/estimate` and
//! `/estimate/total` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{PriceInputs, ProvinceCode};

/// Request body for the `/estimate` endpoints.
///
/// The province is kept as a string here so that unknown codes are reported
/// as `INVALID_PROVINCE_CODE` rather than as a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Two-letter province or territory code.
    pub province: String,
    /// Gross main floor area in square feet.
    pub main_floor_area_sqft: Decimal,
    /// Gross second floor area in square feet.
    pub second_floor_area_sqft: Decimal,
    /// Whether the early adopter discount applies.
    #[serde(default)]
    pub early_adopter: bool,
}

impl TryFrom<EstimateRequest> for PriceInputs {
    type Error = EngineError;

    fn try_from(req: EstimateRequest) -> Result<Self, Self::Error> {
        let province: ProvinceCode = req.province.parse()?;
        PriceInputs::new(
            province,
            req.main_floor_area_sqft,
            req.second_floor_area_sqft,
            req.early_adopter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_areas() {
        let json = r#"{
            "province": "MB",
            "main_floor_area_sqft": 1040,
            "second_floor_area_sqft": 1040.5,
            "early_adopter": true
        }"#;

        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.province, "MB");
        assert_eq!(request.main_floor_area_sqft, Decimal::from(1040));
        assert_eq!(request.second_floor_area_sqft, Decimal::new(10405, 1));
        assert!(request.early_adopter);
    }

    #[test]
    fn test_deserialize_string_areas_and_default_flag() {
        let json = r#"{
            "province": "on",
            "main_floor_area_sqft": "960",
            "second_floor_area_sqft": "0"
        }"#;

        let request: EstimateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.main_floor_area_sqft, Decimal::from(960));
        assert!(!request.early_adopter);
    }

    #[test]
    fn test_conversion_parses_province() {
        let request = EstimateRequest {
            province: "on".to_string(),
            main_floor_area_sqft: Decimal::from(960),
            second_floor_area_sqft: Decimal::ZERO,
            early_adopter: false,
        };

        let inputs = PriceInputs::try_from(request).unwrap();
        assert_eq!(inputs.province, ProvinceCode::ON);
    }

    #[test]
    fn test_conversion_rejects_unknown_province() {
        let request = EstimateRequest {
            province: "ZZ".to_string(),
            main_floor_area_sqft: Decimal::from(960),
            second_floor_area_sqft: Decimal::ZERO,
            early_adopter: false,
        };

        let result = PriceInputs::try_from(request);
        assert!(matches!(result, Err(EngineError::InvalidProvinceCode { .. })));
    }

    #[test]
    fn test_conversion_rejects_negative_area() {
        let request = EstimateRequest {
            province: "MB".to_string(),
            main_floor_area_sqft: Decimal::from(960),
            second_floor_area_sqft: Decimal::from(-1),
            early_adopter: false,
        };

        match PriceInputs::try_from(request) {
            Err(EngineError::InvalidAreaValue { field, .. }) => {
                assert_eq!(field, "second_floor_area_sqft");
            }
            other => panic!("Expected InvalidAreaValue, got {:?}", other),
        }
    }
}
