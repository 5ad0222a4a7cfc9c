//! Sewer, water and septic connection costs, and building permit fees.

use rust_decimal::Decimal;

use crate::config::{PricingConfig, ProvincialFactors};
use crate::models::{AuditStep, PermitFeesCost, PriceRange, SewerWaterSepticCost};

/// The result of a sewer, water and septic calculation.
#[derive(Debug, Clone)]
pub struct SewerWaterSepticResult {
    /// The cost range before and after the provincial multiplier.
    pub cost: SewerWaterSepticCost,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of a permit fee calculation.
#[derive(Debug, Clone)]
pub struct PermitFeesResult {
    /// The permit fee before and after the provincial multiplier.
    pub cost: PermitFeesCost,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the sewer, water and septic cost range.
///
/// Each of min, max and average is scaled by the provincial multiplier.
pub fn calculate_sewer_water_septic_cost(
    factors: &ProvincialFactors,
    config: &PricingConfig,
    step_number: u32,
) -> SewerWaterSepticResult {
    let bounds = config.constants().sewer_water_septic;
    let multiplier = factors.sewer_water_septic_multiplier;
    let average_cost = bounds.average();

    let total = PriceRange {
        min: bounds.min * multiplier,
        max: bounds.max * multiplier,
        average: average_cost * multiplier,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "sewer_water_septic".to_string(),
        rule_name: "Sewer, Water and Septic".to_string(),
        input: serde_json::json!({
            "min_cost": bounds.min.to_string(),
            "max_cost": bounds.max.to_string(),
            "sewer_water_septic_multiplier": multiplier.to_string()
        }),
        output: serde_json::json!({
            "min": total.min.normalize().to_string(),
            "max": total.max.normalize().to_string(),
            "average": total.average.normalize().to_string()
        }),
        reasoning: format!(
            "${}-${} (average ${}) x {} = ${}-${} (average ${})",
            bounds.min,
            bounds.max,
            average_cost.normalize(),
            multiplier,
            total.min.normalize(),
            total.max.normalize(),
            total.average.normalize()
        ),
    };

    SewerWaterSepticResult {
        cost: SewerWaterSepticCost {
            min_cost: bounds.min,
            max_cost: bounds.max,
            average_cost,
            provincial_multiplier: multiplier,
            total,
        },
        audit_step,
    }
}

/// Calculates building permit fees.
///
/// The base fee is half the total floor area in dollars plus a fixed offset,
/// scaled by the provincial multiplier.
///
/// # Examples
///
/// ```
/// use build_estimator::calculation::{calculate_permit_fees, get_provincial_factors};
/// use build_estimator::config::PricingConfig;
/// use build_estimator::models::ProvinceCode;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::standard();
/// let factors = get_provincial_factors(&config, ProvinceCode::BC).unwrap();
/// let result = calculate_permit_fees(Decimal::from(2080), factors, &config, 1);
/// // (2,080 / 2 + 750) x 3.00
/// assert_eq!(result.cost.total, Decimal::from(5370));
/// ```
pub fn calculate_permit_fees(
    total_area_sqft: Decimal,
    factors: &ProvincialFactors,
    config: &PricingConfig,
    step_number: u32,
) -> PermitFeesResult {
    let offset = config.constants().permit_fee_offset;
    let multiplier = factors.permit_fees_multiplier;

    let base_cost = total_area_sqft / Decimal::TWO + offset;
    let total = base_cost * multiplier;

    let audit_step = AuditStep {
        step_number,
        rule_id: "permit_fees".to_string(),
        rule_name: "Permit Fees".to_string(),
        input: serde_json::json!({
            "total_area_sqft": total_area_sqft.normalize().to_string(),
            "permit_fees_multiplier": multiplier.to_string()
        }),
        output: serde_json::json!({
            "base_cost": base_cost.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "({} sqft / 2 + ${}) x {} = ${}",
            total_area_sqft.normalize(),
            offset,
            multiplier,
            total.normalize()
        ),
    };

    PermitFeesResult {
        cost: PermitFeesCost {
            base_cost,
            provincial_multiplier: multiplier,
            total,
        },
        audit_step,
    }
}
