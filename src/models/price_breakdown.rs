//! Price breakdown models for the build price estimator.
//!
//! This module contains the [`DetailedPriceBreakdown`] type and its associated
//! structures that capture every figure produced by a price calculation,
//! along with the [`AuditStep`] records explaining how each figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quantity priced at a fixed unit cost.
///
/// # Example
///
/// ```
/// use build_estimator::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let item = LineItem::new(12, Decimal::from(1000));
/// assert_eq!(item.subtotal, Decimal::from(12000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// How many units are needed.
    pub quantity: u32,
    /// The cost of one unit.
    pub unit_cost: Decimal,
    /// quantity * unit_cost.
    pub subtotal: Decimal,
}

impl LineItem {
    /// Creates a line item, computing its subtotal.
    pub fn new(quantity: u32, unit_cost: Decimal) -> Self {
        Self {
            quantity,
            unit_cost,
            subtotal: Decimal::from(quantity) * unit_cost,
        }
    }
}

/// A low/high/midpoint triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// The low end of the range.
    pub min: Decimal,
    /// The high end of the range.
    pub max: Decimal,
    /// The midpoint of the range.
    pub average: Decimal,
}

/// Foundation costs: screw piles and crew mobilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationCost {
    /// Load-bearing piles.
    pub bearing_piles: LineItem,
    /// Lateral bracing piles.
    pub bracing_piles: LineItem,
    /// Crew and equipment mobilization.
    pub mobilization: LineItem,
    /// The provincial foundation multiplier applied to the piles.
    pub provincial_multiplier: Decimal,
    /// (bearing + bracing) * multiplier + mobilization.
    pub total: Decimal,
}

/// Appliance package cost range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplianceCost {
    /// Entry-level package.
    pub min_cost: Decimal,
    /// Premium package.
    pub max_cost: Decimal,
    /// Midpoint of the two packages.
    pub average_cost: Decimal,
}

/// Container charges for shipping the modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCharge {
    /// Number of shipping containers.
    pub quantity: u32,
    /// Charge for the first container.
    pub first_container_cost: Decimal,
    /// Combined charge for every container after the first.
    pub additional_containers_cost: Decimal,
    /// first_container_cost + additional_containers_cost.
    pub subtotal: Decimal,
}

/// Distance charge for shipping the modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceCharge {
    /// Representative shipping distance for the province.
    pub km: u32,
    /// Freight rate per kilometre.
    pub cost_per_km: Decimal,
    /// km * cost_per_km.
    pub subtotal: Decimal,
}

/// Delivery costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryCost {
    /// Container charges.
    pub containers: ContainerCharge,
    /// Distance charges.
    pub distance: DistanceCharge,
    /// containers.subtotal + distance.subtotal.
    pub total: Decimal,
}

/// Sewer, water and septic connection costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SewerWaterSepticCost {
    /// Unscaled low estimate.
    pub min_cost: Decimal,
    /// Unscaled high estimate.
    pub max_cost: Decimal,
    /// Unscaled midpoint.
    pub average_cost: Decimal,
    /// The provincial sewer/water/septic multiplier.
    pub provincial_multiplier: Decimal,
    /// Each estimate scaled by the provincial multiplier.
    pub total: PriceRange,
}

/// Building permit fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitFeesCost {
    /// total area / 2 + fixed offset.
    pub base_cost: Decimal,
    /// The provincial permit fee multiplier.
    pub provincial_multiplier: Decimal,
    /// base_cost * provincial_multiplier.
    pub total: Decimal,
}

/// Every cost on top of the base build price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalCosts {
    /// Foundation piles and mobilization.
    pub foundation: FoundationCost,
    /// Appliance package.
    pub appliances: ApplianceCost,
    /// Shipping containers and distance.
    pub delivery: DeliveryCost,
    /// Flat electrical hookup charge.
    pub electrical_hookup: Decimal,
    /// Sewer, water and septic connections.
    pub sewer_water_septic: SewerWaterSepticCost,
    /// Building permit fees.
    pub permit_fees: PermitFeesCost,
}

/// The full itemized price of a build.
///
/// Only `total_price` and the three `grand_total` figures are rounded
/// (to the nearest 1,000); every other figure is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedPriceBreakdown {
    /// Fixed base price for every build.
    pub base_price: Decimal,
    /// Main floor area * main floor rate.
    pub main_floor_cost: Decimal,
    /// Second floor area * second floor rate.
    pub second_floor_cost: Decimal,
    /// The provincial base multiplier.
    pub provincial_multiplier: Decimal,
    /// Early adopter discount (zero when not applicable).
    pub early_adopter_discount: Decimal,
    /// Base build price after multiplier and discount, rounded to 1,000.
    pub total_price: Decimal,
    /// Itemized costs outside the base build.
    pub additional_costs: AdditionalCosts,
    /// All-in estimate, each figure rounded to 1,000.
    pub grand_total: PriceRange,
}

/// A single step in the audit trail recording a pricing rule.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the figures.
    pub reasoning: String,
}
