//! Base build price calculation.
//!
//! The base build price is a fixed base plus per-square-foot rates for each
//! floor, scaled by the provincial base multiplier. The early adopter
//! discount is subtracted after scaling, and the result is rounded once to
//! the nearest 1,000.

use rust_decimal::Decimal;

use crate::config::{PricingConfig, ProvincialFactors};
use crate::models::{AuditStep, PriceInputs};

use super::rounding::round_to_nearest_thousand;

/// The base build figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseBuildCost {
    /// Fixed base price.
    pub base_price: Decimal,
    /// Main floor area x main floor rate.
    pub main_floor_cost: Decimal,
    /// Second floor area x second floor rate.
    pub second_floor_cost: Decimal,
    /// Provincial base multiplier applied.
    pub provincial_multiplier: Decimal,
    /// Discount subtracted after scaling; zero when not an early adopter.
    pub early_adopter_discount: Decimal,
    /// Rounded base build price.
    pub total_price: Decimal,
}

/// The result of a base build calculation, including the cost and audit step.
#[derive(Debug, Clone)]
pub struct BaseBuildResult {
    /// The base build figures.
    pub cost: BaseBuildCost,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the base build price.
///
/// # Examples
///
/// ```
/// use build_estimator::calculation::{calculate_base_build_cost, get_provincial_factors};
/// use build_estimator::config::PricingConfig;
/// use build_estimator::models::{PriceInputs, ProvinceCode};
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::standard();
/// let inputs = PriceInputs::new(
///     ProvinceCode::MB,
///     Decimal::from(1040),
///     Decimal::from(1040),
///     true,
/// )
/// .unwrap();
/// let factors = get_provincial_factors(&config, inputs.province).unwrap();
/// let result = calculate_base_build_cost(&inputs, factors, &config, 1);
/// assert_eq!(result.cost.total_price, Decimal::from(707_000));
/// ```
pub fn calculate_base_build_cost(
    inputs: &PriceInputs,
    factors: &ProvincialFactors,
    config: &PricingConfig,
    step_number: u32,
) -> BaseBuildResult {
    let constants = config.constants();

    let base_price = constants.base_price;
    let main_floor_cost = inputs.main_floor_area_sqft * constants.main_floor_rate;
    let second_floor_cost = inputs.second_floor_area_sqft * constants.second_floor_rate;
    let raw_total = base_price + main_floor_cost + second_floor_cost;

    let multiplier = factors.base_multiplier;
    let scaled_total = raw_total * multiplier;

    let early_adopter_discount = if inputs.early_adopter {
        inputs.total_area_sqft() * constants.early_adopter_discount_per_sqft
    } else {
        Decimal::ZERO
    };

    let total_price = round_to_nearest_thousand(scaled_total - early_adopter_discount);

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_build".to_string(),
        rule_name: "Base Build Price".to_string(),
        input: serde_json::json!({
            "main_floor_area_sqft": inputs.main_floor_area_sqft.normalize().to_string(),
            "second_floor_area_sqft": inputs.second_floor_area_sqft.normalize().to_string(),
            "base_multiplier": multiplier.to_string(),
            "early_adopter": inputs.early_adopter
        }),
        output: serde_json::json!({
            "raw_total": raw_total.normalize().to_string(),
            "scaled_total": scaled_total.normalize().to_string(),
            "early_adopter_discount": early_adopter_discount.normalize().to_string(),
            "total_price": total_price.normalize().to_string()
        }),
        reasoning: format!(
            "(${} + {} x ${} + {} x ${}) x {} - ${} = ${}, rounded to ${}",
            base_price,
            inputs.main_floor_area_sqft.normalize(),
            constants.main_floor_rate,
            inputs.second_floor_area_sqft.normalize(),
            constants.second_floor_rate,
            multiplier,
            early_adopter_discount.normalize(),
            (scaled_total - early_adopter_discount).normalize(),
            total_price.normalize()
        ),
    };

    BaseBuildResult {
        cost: BaseBuildCost {
            base_price,
            main_floor_cost,
            second_floor_cost,
            provincial_multiplier: multiplier,
            early_adopter_discount,
            total_price,
        },
        audit_step,
    }
}
