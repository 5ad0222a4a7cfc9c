//! Appliance package cost.

use crate::config::PricingConfig;
use crate::models::{ApplianceCost, AuditStep};

/// The result of an appliance calculation, including the cost and audit step.
#[derive(Debug, Clone)]
pub struct ApplianceResult {
    /// The appliance cost range.
    pub cost: ApplianceCost,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the appliance package range. The same in every province.
pub fn calculate_appliance_cost(config: &PricingConfig, step_number: u32) -> ApplianceResult {
    let bounds = config.constants().appliances;
    let cost = ApplianceCost {
        min_cost: bounds.min,
        max_cost: bounds.max,
        average_cost: bounds.average(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "appliances".to_string(),
        rule_name: "Appliance Package".to_string(),
        input: serde_json::json!({}),
        output: serde_json::json!({
            "min": cost.min_cost.to_string(),
            "max": cost.max_cost.to_string(),
            "average": cost.average_cost.normalize().to_string()
        }),
        reasoning: format!(
            "Appliance package ${}-${}, average ${}",
            cost.min_cost,
            cost.max_cost,
            cost.average_cost.normalize()
        ),
    };

    ApplianceResult { cost, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_standard_appliance_range() {
        let result = calculate_appliance_cost(&PricingConfig::standard(), 4);

        assert_eq!(result.cost.min_cost, Decimal::from(12_000));
        assert_eq!(result.cost.max_cost, Decimal::from(25_000));
        assert_eq!(result.cost.average_cost, Decimal::from(18_500));
        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.output["average"], "18500");
    }
}
