//! Full price calculation.
//!
//! Runs every calculator in order, assembles the [`DetailedPriceBreakdown`]
//! and computes the rounded grand totals. Any failure aborts the whole
//! calculation.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::PricingConfig;
use crate::error::EngineResult;
use crate::models::{AdditionalCosts, AuditStep, DetailedPriceBreakdown, PriceInputs, PriceRange};

use super::appliances::calculate_appliance_cost;
use super::base_build::calculate_base_build_cost;
use super::delivery::calculate_delivery_cost;
use super::foundation::calculate_foundation_cost;
use super::rate_table::lookup_provincial_factors;
use super::rounding::round_to_nearest_thousand;
use super::utilities::{calculate_permit_fees, calculate_sewer_water_septic_cost};

/// A completed price calculation: the breakdown and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceCalculation {
    /// The inputs that were priced.
    pub inputs: PriceInputs,
    /// The itemized breakdown.
    pub breakdown: DetailedPriceBreakdown,
    /// One step per rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Prices a build and records every rule applied.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidAreaValue`] if either area is
/// negative or too large, and [`crate::error::EngineError::InvalidProvinceCode`]
/// if the configuration has no factors for the province.
///
/// # Examples
///
/// ```
/// use build_estimator::calculation::estimate_price;
/// use build_estimator::config::PricingConfig;
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
/// let calculation = estimate_price(&inputs, &PricingConfig::standard()).unwrap();
/// assert_eq!(calculation.breakdown.total_price, Decimal::from(728_000));
/// assert_eq!(calculation.audit_steps.len(), 9);
/// ```
pub fn estimate_price(inputs: &PriceInputs, config: &PricingConfig) -> EngineResult<PriceCalculation> {
    inputs.validate()?;

    let mut audit_steps = Vec::with_capacity(9);
    let mut step_number = 1;

    let factors_result = lookup_provincial_factors(config, inputs.province, step_number)?;
    let factors = factors_result.factors;
    audit_steps.push(factors_result.audit_step);
    step_number += 1;

    let base = calculate_base_build_cost(inputs, &factors, config, step_number);
    audit_steps.push(base.audit_step);
    step_number += 1;

    let foundation =
        calculate_foundation_cost(inputs.main_floor_area_sqft, &factors, config, step_number);
    audit_steps.push(foundation.audit_step);
    step_number += 1;

    let appliances = calculate_appliance_cost(config, step_number);
    audit_steps.push(appliances.audit_step);
    step_number += 1;

    let delivery =
        calculate_delivery_cost(inputs.main_floor_area_sqft, &factors, config, step_number);
    audit_steps.push(delivery.audit_step);
    step_number += 1;

    let electrical_hookup = config.constants().electrical_hookup;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "electrical_hookup".to_string(),
        rule_name: "Electrical Hookup".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "total": electrical_hookup.to_string()
        }),
        reasoning: format!("Flat electrical hookup charge of ${}", electrical_hookup),
    });
    step_number += 1;

    let sewer_water_septic = calculate_sewer_water_septic_cost(&factors, config, step_number);
    audit_steps.push(sewer_water_septic.audit_step);
    step_number += 1;

    let permit_fees =
        calculate_permit_fees(inputs.total_area_sqft(), &factors, config, step_number);
    audit_steps.push(permit_fees.audit_step);
    step_number += 1;

    let additional_costs = AdditionalCosts {
        foundation: foundation.cost,
        appliances: appliances.cost,
        delivery: delivery.cost,
        electrical_hookup,
        sewer_water_septic: sewer_water_septic.cost,
        permit_fees: permit_fees.cost,
    };

    let base_cost = base.cost;
    let fixed = base_cost.total_price
        + additional_costs.foundation.total
        + additional_costs.delivery.total
        + additional_costs.electrical_hookup
        + additional_costs.permit_fees.total;
    let sewer_total = additional_costs.sewer_water_septic.total;
    let unrounded = PriceRange {
        min: fixed + additional_costs.appliances.min_cost + sewer_total.min,
        max: fixed + additional_costs.appliances.max_cost + sewer_total.max,
        average: fixed + additional_costs.appliances.average_cost + sewer_total.average,
    };
    let grand_total = PriceRange {
        min: round_to_nearest_thousand(unrounded.min),
        max: round_to_nearest_thousand(unrounded.max),
        average: round_to_nearest_thousand(unrounded.average),
    };

    audit_steps.push(grand_total_step(step_number, fixed, &unrounded, &grand_total));

    Ok(PriceCalculation {
        inputs: *inputs,
        breakdown: DetailedPriceBreakdown {
            base_price: base_cost.base_price,
            main_floor_cost: base_cost.main_floor_cost,
            second_floor_cost: base_cost.second_floor_cost,
            provincial_multiplier: base_cost.provincial_multiplier,
            early_adopter_discount: base_cost.early_adopter_discount,
            total_price: base_cost.total_price,
            additional_costs,
            grand_total,
        },
        audit_steps,
    })
}

/// Prices a build and returns the itemized breakdown.
///
/// # Errors
///
/// See [`estimate_price`].
pub fn calculate_detailed_price(
    inputs: &PriceInputs,
    config: &PricingConfig,
) -> EngineResult<DetailedPriceBreakdown> {
    estimate_price(inputs, config).map(|calculation| calculation.breakdown)
}

/// Prices a build and returns only the rounded base build price.
///
/// # Errors
///
/// See [`estimate_price`].
pub fn calculate_price(inputs: &PriceInputs, config: &PricingConfig) -> EngineResult<Decimal> {
    calculate_detailed_price(inputs, config).map(|breakdown| breakdown.total_price)
}

fn grand_total_step(
    step_number: u32,
    fixed: Decimal,
    unrounded: &PriceRange,
    grand_total: &PriceRange,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "grand_total".to_string(),
        rule_name: "Grand Total".to_string(),
        input: serde_json::json!({
            "fixed_costs": fixed.normalize().to_string(),
            "unrounded_min": unrounded.min.normalize().to_string(),
            "unrounded_max": unrounded.max.normalize().to_string(),
            "unrounded_average": unrounded.average.normalize().to_string()
        }),
        output: serde_json::json!({
            "min": grand_total.min.normalize().to_string(),
            "max": grand_total.max.normalize().to_string(),
            "average": grand_total.average.normalize().to_string()
        }),
        reasoning: format!(
            "Grand total ${} to ${}, average ${}",
            grand_total.min.normalize(),
            grand_total.max.normalize(),
            grand_total.average.normalize()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::ProvinceCode;

    fn inputs(province: ProvinceCode, main: i64, second: i64, early: bool) -> PriceInputs {
        PriceInputs::new(province, Decimal::from(main), Decimal::from(second), early).unwrap()
    }

    #[test]
    fn test_negative_area_set_directly_is_rejected() {
        let tampered = PriceInputs {
            main_floor_area_sqft: Decimal::from(-5000),
            ..inputs(ProvinceCode::MB, 1040, 0, false)
        };

        match calculate_detailed_price(&tampered, &PricingConfig::standard()) {
            Err(EngineError::InvalidAreaValue { field, value, .. }) => {
                assert_eq!(field, "main_floor_area_sqft");
                assert_eq!(value, "-5000");
            }
            other => panic!("Expected InvalidAreaValue, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_area_set_directly_is_rejected() {
        let tampered = PriceInputs {
            second_floor_area_sqft: Decimal::from_str_exact("1000000000000000000000000000").unwrap(),
            ..inputs(ProvinceCode::MB, 1040, 0, false)
        };

        let result = estimate_price(&tampered, &PricingConfig::standard());
        assert!(matches!(result, Err(EngineError::InvalidAreaValue { .. })));
    }

    #[test]
    fn test_largest_accepted_area_prices_without_overflow() {
        let largest = crate::models::MAX_AREA_SQFT;
        let inputs = PriceInputs::new(ProvinceCode::NU, largest, largest, true).unwrap();
        let breakdown = calculate_detailed_price(&inputs, &PricingConfig::standard()).unwrap();
        assert!(breakdown.grand_total.min <= breakdown.grand_total.max);
    }

    #[test]
    fn test_manitoba_scenario_breakdown() {
        let breakdown = calculate_detailed_price(
            &inputs(ProvinceCode::MB, 1040, 1040, false),
            &PricingConfig::standard(),
        )
        .unwrap();

        assert_eq!(breakdown.main_floor_cost, Decimal::from(350_480));
        assert_eq!(breakdown.second_floor_cost, Decimal::from(172_640));
        assert_eq!(breakdown.provincial_multiplier, Decimal::ONE);
        assert_eq!(breakdown.total_price, Decimal::from(728_000));

        let extras = breakdown.additional_costs;
        // (12,000 + 3,200) x 1.00 + 3,000
        assert_eq!(extras.foundation.total, Decimal::from(18_200));
        assert_eq!(extras.delivery.total, Decimal::from(2645));
        assert_eq!(extras.electrical_hookup, Decimal::from(2500));
        // 2,080 / 2 + 750
        assert_eq!(extras.permit_fees.total, Decimal::from(1790));

        // 728,000 + 18,200 + 2,645 + 2,500 + 1,790 = 753,135
        assert_eq!(breakdown.grand_total.min, Decimal::from(772_000));
        assert_eq!(breakdown.grand_total.max, Decimal::from(803_000));
        assert_eq!(breakdown.grand_total.average, Decimal::from(787_000));
    }

    #[test]
    fn test_manitoba_scenario_early_adopter() {
        let price = calculate_price(
            &inputs(ProvinceCode::MB, 1040, 1040, true),
            &PricingConfig::standard(),
        )
        .unwrap();
        assert_eq!(price, Decimal::from(707_000));
    }

    #[test]
    fn test_nunavut_foundation_in_breakdown() {
        let breakdown = calculate_detailed_price(
            &inputs(ProvinceCode::NU, 1040, 0, false),
            &PricingConfig::standard(),
        )
        .unwrap();
        assert_eq!(
            breakdown.additional_costs.foundation.total,
            Decimal::from(31_576)
        );
    }

    #[test]
    fn test_grand_totals_are_ordered() {
        for province in ProvinceCode::ALL {
            let breakdown = calculate_detailed_price(
                &inputs(province, 1500, 600, true),
                &PricingConfig::standard(),
            )
            .unwrap();
            let total = breakdown.grand_total;
            assert!(total.min <= total.average, "{}", province);
            assert!(total.average <= total.max, "{}", province);
        }
    }

    #[test]
    fn test_audit_trail_is_numbered_in_order() {
        let calculation = estimate_price(
            &inputs(ProvinceCode::ON, 1200, 480, false),
            &PricingConfig::standard(),
        )
        .unwrap();

        let rule_ids: Vec<&str> = calculation
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "provincial_factors",
                "base_build",
                "foundation",
                "appliances",
                "delivery",
                "electrical_hookup",
                "sewer_water_septic",
                "permit_fees",
                "grand_total",
            ]
        );
        for (i, step) in calculation.audit_steps.iter().enumerate() {
            assert_eq!(step.step_number as usize, i + 1);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let config = PricingConfig::standard();
        let inputs = inputs(ProvinceCode::YT, 2000, 900, true);

        let first = estimate_price(&inputs, &config).unwrap();
        let second = estimate_price(&inputs, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
