//! Delivery cost calculation.
//!
//! Delivery is a per-container handling charge plus freight over the
//! representative shipping distance for the province. Neither part is
//! scaled by a provincial multiplier.

use rust_decimal::Decimal;

use crate::config::{PricingConfig, ProvincialFactors};
use crate::models::{AuditStep, ContainerCharge, DeliveryCost, DistanceCharge};

/// The result of a delivery calculation, including the cost and audit step.
#[derive(Debug, Clone)]
pub struct DeliveryResult {
    /// The itemized delivery cost.
    pub cost: DeliveryCost,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the delivery cost for a main floor footprint.
///
/// The first container is charged at the first-container rate and every
/// further container at the additional-container rate.
///
/// # Examples
///
/// ```
/// use build_estimator::calculation::{calculate_delivery_cost, get_provincial_factors};
/// use build_estimator::config::PricingConfig;
/// use build_estimator::models::ProvinceCode;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::standard();
/// let factors = get_provincial_factors(&config, ProvinceCode::MB).unwrap();
/// let result = calculate_delivery_cost(Decimal::from(1040), factors, &config, 1);
/// // 550 + 4 x 475 + 150 km x 1.30
/// assert_eq!(result.cost.total, Decimal::from(2645));
/// ```
pub fn calculate_delivery_cost(
    main_floor_area_sqft: Decimal,
    factors: &ProvincialFactors,
    config: &PricingConfig,
    step_number: u32,
) -> DeliveryResult {
    let rates = &config.constants().delivery;
    let step = config.container_steps().lookup(main_floor_area_sqft);

    let quantity = step.container_count;
    let additional = quantity.saturating_sub(1);
    let additional_containers_cost = Decimal::from(additional) * rates.additional_container_cost;
    let containers = ContainerCharge {
        quantity,
        first_container_cost: rates.first_container_cost,
        additional_containers_cost,
        subtotal: rates.first_container_cost + additional_containers_cost,
    };

    let km = factors.shipping_distance_km;
    let distance = DistanceCharge {
        km,
        cost_per_km: rates.cost_per_km,
        subtotal: Decimal::from(km) * rates.cost_per_km,
    };

    let total = containers.subtotal + distance.subtotal;

    let audit_step = AuditStep {
        step_number,
        rule_id: "delivery".to_string(),
        rule_name: "Delivery".to_string(),
        input: serde_json::json!({
            "main_floor_area_sqft": main_floor_area_sqft.normalize().to_string(),
            "shipping_distance_km": km
        }),
        output: serde_json::json!({
            "module_count": step.module_count,
            "containers": quantity,
            "containers_subtotal": containers.subtotal.normalize().to_string(),
            "distance_subtotal": distance.subtotal.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "${} + {} x ${} for {} containers, plus {} km x ${} = ${}",
            containers.first_container_cost,
            additional,
            rates.additional_container_cost,
            quantity,
            km,
            distance.cost_per_km,
            total.normalize()
        ),
    };

    DeliveryResult {
        cost: DeliveryCost {
            containers,
            distance,
            total,
        },
        audit_step,
    }
}
