//! Foundation cost calculation.
//!
//! Pile counts come from the foundation step table keyed on main floor area.
//! Piles are scaled by the provincial foundation multiplier; crew
//! mobilization is a flat charge and is not scaled.

use rust_decimal::Decimal;

use crate::config::{PricingConfig, ProvincialFactors};
use crate::models::{AuditStep, FoundationCost, LineItem};

/// The result of a foundation calculation, including the cost and audit step.
#[derive(Debug, Clone)]
pub struct FoundationResult {
    /// The itemized foundation cost.
    pub cost: FoundationCost,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the foundation cost for a main floor footprint.
///
/// # Arguments
///
/// * `main_floor_area_sqft` - Gross main floor area; selects the pile row
/// * `factors` - The provincial factors for the build site
/// * `config` - The pricing configuration
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use build_estimator::calculation::{calculate_foundation_cost, get_provincial_factors};
/// use build_estimator::config::PricingConfig;
/// use build_estimator::models::ProvinceCode;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::standard();
/// let factors = get_provincial_factors(&config, ProvinceCode::NU).unwrap();
/// let result = calculate_foundation_cost(Decimal::from(1040), factors, &config, 1);
/// assert_eq!(result.cost.total, Decimal::from(31_576));
/// ```
pub fn calculate_foundation_cost(
    main_floor_area_sqft: Decimal,
    factors: &ProvincialFactors,
    config: &PricingConfig,
    step_number: u32,
) -> FoundationResult {
    let rates = &config.constants().foundation;
    let step = config.foundation_steps().lookup(main_floor_area_sqft);

    let bearing_piles = LineItem::new(step.bearing_pile_count, rates.bearing_pile_cost);
    let bracing_piles = LineItem::new(step.bracing_pile_count, rates.bracing_pile_cost);
    let mobilization = LineItem::new(step.mobilization_unit_count, rates.mobilization_cost);

    let multiplier = factors.foundation_multiplier;
    let piles = bearing_piles.subtotal + bracing_piles.subtotal;
    let total = piles * multiplier + mobilization.subtotal;

    let audit_step = AuditStep {
        step_number,
        rule_id: "foundation".to_string(),
        rule_name: "Foundation Piles".to_string(),
        input: serde_json::json!({
            "main_floor_area_sqft": main_floor_area_sqft.normalize().to_string(),
            "foundation_multiplier": multiplier.to_string()
        }),
        output: serde_json::json!({
            "module_count": step.module_count,
            "bearing_piles": bearing_piles.quantity,
            "bracing_piles": bracing_piles.quantity,
            "mobilizations": mobilization.quantity,
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "({} bearing x ${} + {} bracing x ${}) x {} + {} mobilization x ${} = ${}",
            bearing_piles.quantity,
            bearing_piles.unit_cost,
            bracing_piles.quantity,
            bracing_piles.unit_cost,
            multiplier,
            mobilization.quantity,
            mobilization.unit_cost,
            total.normalize()
        ),
    };

    FoundationResult {
        cost: FoundationCost {
            bearing_piles,
            bracing_piles,
            mobilization,
            provincial_multiplier: multiplier,
            total,
        },
        audit_step,
    }
}
