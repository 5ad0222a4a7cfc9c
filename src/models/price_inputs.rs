//! Price inputs model.
//!
//! This module defines [`PriceInputs`], the validated tuple the pricing
//! engine prices: province, floor areas and the early adopter flag.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

use super::ProvinceCode;

/// Field name used in errors for the main floor area.
pub const MAIN_FLOOR_FIELD: &str = "main_floor_area_sqft";

/// Field name used in errors for the second floor area.
pub const SECOND_FLOOR_FIELD: &str = "second_floor_area_sqft";

/// Largest accepted area for either floor, in square feet.
///
/// Every pricing product stays far inside `Decimal` range below this.
pub const MAX_AREA_SQFT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// The inputs for a single price calculation.
///
/// Areas are gross square feet. [`PriceInputs::new`] and
/// [`PriceInputs::from_f64`] reject negative, oversized and non-finite
/// areas. The fields are public, so the engine checks the areas again
/// before pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceInputs {
    /// Where the home will be built.
    pub province: ProvinceCode,
    /// Gross main floor area in square feet.
    pub main_floor_area_sqft: Decimal,
    /// Gross second floor area in square feet.
    pub second_floor_area_sqft: Decimal,
    /// Whether the early adopter discount applies.
    pub early_adopter: bool,
}

impl PriceInputs {
    /// Creates validated price inputs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAreaValue`] if either area is negative
    /// or larger than [`MAX_AREA_SQFT`].
    ///
    /// # Example
    ///
    /// ```
    /// use build_estimator::models::{PriceInputs, ProvinceCode};
    /// use rust_decimal::Decimal;
    ///
    /// let inputs = PriceInputs::new(
    ///     ProvinceCode::MB,
    ///     Decimal::from(1040),
    ///     Decimal::from(1040),
    ///     false,
    /// )
    /// .unwrap();
    /// assert_eq!(inputs.total_area_sqft(), Decimal::from(2080));
    /// ```
    pub fn new(
        province: ProvinceCode,
        main_floor_area_sqft: Decimal,
        second_floor_area_sqft: Decimal,
        early_adopter: bool,
    ) -> EngineResult<Self> {
        validate_area(MAIN_FLOOR_FIELD, main_floor_area_sqft)?;
        validate_area(SECOND_FLOOR_FIELD, second_floor_area_sqft)?;

        Ok(Self {
            province,
            main_floor_area_sqft,
            second_floor_area_sqft,
            early_adopter,
        })
    }

    /// Creates validated price inputs from floating point areas.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAreaValue`] if either area is NaN,
    /// infinite, too large to represent, or negative.
    pub fn from_f64(
        province: ProvinceCode,
        main_floor_area_sqft: f64,
        second_floor_area_sqft: f64,
        early_adopter: bool,
    ) -> EngineResult<Self> {
        let main = area_from_f64(MAIN_FLOOR_FIELD, main_floor_area_sqft)?;
        let second = area_from_f64(SECOND_FLOOR_FIELD, second_floor_area_sqft)?;
        Self::new(province, main, second, early_adopter)
    }

    /// Checks both areas, for values built without [`PriceInputs::new`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAreaValue`] for the first area that is
    /// negative or larger than [`MAX_AREA_SQFT`].
    pub fn validate(&self) -> EngineResult<()> {
        validate_area(MAIN_FLOOR_FIELD, self.main_floor_area_sqft)?;
        validate_area(SECOND_FLOOR_FIELD, self.second_floor_area_sqft)
    }

    /// Returns the combined gross area of both floors.
    pub fn total_area_sqft(&self) -> Decimal {
        self.main_floor_area_sqft + self.second_floor_area_sqft
    }
}

/// Checks that an area is non-negative and at most [`MAX_AREA_SQFT`].
pub fn validate_area(field: &str, area: Decimal) -> EngineResult<()> {
    if area.is_sign_negative() && !area.is_zero() {
        return Err(EngineError::InvalidAreaValue {
            field: field.to_string(),
            value: area.to_string(),
            message: "area cannot be negative".to_string(),
        });
    }
    if area > MAX_AREA_SQFT {
        return Err(EngineError::InvalidAreaValue {
            field: field.to_string(),
            value: area.to_string(),
            message: format!("area cannot exceed {} sqft", MAX_AREA_SQFT),
        });
    }
    Ok(())
}

/// Converts a floating point area to a decimal, rejecting non-finite values.
pub fn area_from_f64(field: &str, value: f64) -> EngineResult<Decimal> {
    if !value.is_finite() {
        return Err(EngineError::InvalidAreaValue {
            field: field.to_string(),
            value: value.to_string(),
            message: "area must be a finite number".to_string(),
        });
    }

    Decimal::from_f64(value).ok_or_else(|| EngineError::InvalidAreaValue {
        field: field.to_string(),
        value: value.to_string(),
        message: "area is out of range".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs_are_accepted() {
        let inputs =
            PriceInputs::new(ProvinceCode::ON, Decimal::from(960), Decimal::ZERO, true).unwrap();
        assert_eq!(inputs.province, ProvinceCode::ON);
        assert_eq!(inputs.total_area_sqft(), Decimal::from(960));
        assert!(inputs.early_adopter);
    }

    #[test]
    fn test_negative_main_floor_is_rejected() {
        let result = PriceInputs::new(ProvinceCode::ON, Decimal::from(-1), Decimal::ZERO, false);
        match result {
            Err(EngineError::InvalidAreaValue { field, value, .. }) => {
                assert_eq!(field, MAIN_FLOOR_FIELD);
                assert_eq!(value, "-1");
            }
            other => panic!("Expected InvalidAreaValue, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_second_floor_is_rejected() {
        let result = PriceInputs::new(ProvinceCode::ON, Decimal::ZERO, Decimal::from(-96), false);
        match result {
            Err(EngineError::InvalidAreaValue { field, .. }) => {
                assert_eq!(field, SECOND_FLOOR_FIELD);
            }
            other => panic!("Expected InvalidAreaValue, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_area_is_rejected() {
        let huge = Decimal::from_str_exact("1000000000000000000000000000").unwrap();
        let result = PriceInputs::new(ProvinceCode::MB, huge, Decimal::ZERO, false);
        match result {
            Err(EngineError::InvalidAreaValue { field, message, .. }) => {
                assert_eq!(field, MAIN_FLOOR_FIELD);
                assert!(message.contains("exceed"));
            }
            other => panic!("Expected InvalidAreaValue, got {:?}", other),
        }

        let result = PriceInputs::from_f64(ProvinceCode::MB, 0.0, 1e27, false);
        assert!(matches!(
            result,
            Err(EngineError::InvalidAreaValue { ref field, .. }) if field == SECOND_FLOOR_FIELD
        ));
    }

    #[test]
    fn test_area_at_upper_bound_is_accepted() {
        assert!(validate_area(MAIN_FLOOR_FIELD, MAX_AREA_SQFT).is_ok());
        assert!(validate_area(MAIN_FLOOR_FIELD, MAX_AREA_SQFT + Decimal::new(1, 1)).is_err());
    }

    #[test]
    fn test_validate_catches_fields_set_directly() {
        let valid = PriceInputs::new(ProvinceCode::ON, Decimal::from(960), Decimal::ZERO, false).unwrap();
        assert!(valid.validate().is_ok());

        let tampered = PriceInputs {
            second_floor_area_sqft: Decimal::from(-96),
            ..valid
        };
        assert!(matches!(
            tampered.validate(),
            Err(EngineError::InvalidAreaValue { ref field, .. }) if field == SECOND_FLOOR_FIELD
        ));
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let mut negative_zero = Decimal::ZERO;
        negative_zero.set_sign_negative(true);
        assert!(validate_area(MAIN_FLOOR_FIELD, negative_zero).is_ok());
    }

    #[test]
    fn test_non_finite_areas_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = PriceInputs::from_f64(ProvinceCode::MB, value, 0.0, false);
            match result {
                Err(EngineError::InvalidAreaValue { message, .. }) => {
                    assert!(message.contains("finite"));
                }
                other => panic!("Expected InvalidAreaValue, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_from_f64_converts_areas() {
        let inputs = PriceInputs::from_f64(ProvinceCode::MB, 1040.0, 520.5, false).unwrap();
        assert_eq!(inputs.main_floor_area_sqft, Decimal::from(1040));
        assert_eq!(inputs.second_floor_area_sqft, Decimal::new(5205, 1));
    }
}
