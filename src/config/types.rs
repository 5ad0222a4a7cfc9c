//! Configuration types for build pricing.
//!
//! This module contains the strongly-typed pricing tables used by the
//! calculators. They are deserialized from YAML configuration files or built
//! from the embedded standard tables.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{StepTable, TableStep};
use crate::error::{EngineError, EngineResult};
use crate::models::ProvinceCode;

/// Regional cost factors for one province or territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvincialFactors {
    /// Multiplier on the base build price.
    pub base_multiplier: Decimal,
    /// Multiplier on foundation piles (mobilization is not scaled).
    pub foundation_multiplier: Decimal,
    /// Representative shipping distance from the factory.
    pub shipping_distance_km: u32,
    /// Multiplier on sewer, water and septic connections.
    pub sewer_water_septic_multiplier: Decimal,
    /// Multiplier on building permit fees.
    pub permit_fees_multiplier: Decimal,
}

/// Pile quantities for one module count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationStep {
    /// Number of modules on the main floor.
    pub module_count: u32,
    /// Largest main floor area this row covers.
    pub main_floor_area_threshold: Decimal,
    /// Load-bearing piles required.
    pub bearing_pile_count: u32,
    /// Bracing piles required.
    pub bracing_pile_count: u32,
    /// Crew mobilizations required.
    pub mobilization_unit_count: u32,
}

impl TableStep for FoundationStep {
    fn main_floor_area_threshold(&self) -> Decimal {
        self.main_floor_area_threshold
    }
}

/// Shipping container quantity for one module count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStep {
    /// Number of modules on the main floor.
    pub module_count: u32,
    /// Largest main floor area this row covers.
    pub main_floor_area_threshold: Decimal,
    /// Shipping containers required.
    pub container_count: u32,
}

impl TableStep for ContainerStep {
    fn main_floor_area_threshold(&self) -> Decimal {
        self.main_floor_area_threshold
    }
}

/// A low/high pair of flat costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBounds {
    /// Low estimate.
    pub min: Decimal,
    /// High estimate.
    pub max: Decimal,
}

impl CostBounds {
    /// Midpoint of the two estimates.
    pub fn average(&self) -> Decimal {
        (self.min + self.max) / Decimal::TWO
    }
}

/// Foundation unit costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationRates {
    /// Cost of one bearing pile.
    pub bearing_pile_cost: Decimal,
    /// Cost of one bracing pile.
    pub bracing_pile_cost: Decimal,
    /// Cost of one crew mobilization.
    pub mobilization_cost: Decimal,
}

/// Delivery unit costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRates {
    /// Charge for the first container.
    pub first_container_cost: Decimal,
    /// Charge for each container after the first.
    pub additional_container_cost: Decimal,
    /// Freight rate per kilometre.
    pub cost_per_km: Decimal,
}

/// Province-independent pricing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConstants {
    /// Fixed base price for every build.
    pub base_price: Decimal,
    /// Rate per square foot of main floor.
    pub main_floor_rate: Decimal,
    /// Rate per square foot of second floor.
    pub second_floor_rate: Decimal,
    /// Early adopter discount per square foot of total area.
    pub early_adopter_discount_per_sqft: Decimal,
    /// Foundation unit costs.
    pub foundation: FoundationRates,
    /// Appliance package range.
    pub appliances: CostBounds,
    /// Delivery unit costs.
    pub delivery: DeliveryRates,
    /// Flat electrical hookup charge.
    pub electrical_hookup: Decimal,
    /// Sewer, water and septic range before provincial scaling.
    pub sewer_water_septic: CostBounds,
    /// Fixed amount added to half the total area for permit fees.
    pub permit_fee_offset: Decimal,
}

/// The complete, validated pricing configuration.
///
/// Holds the constants, provincial factors and step tables. Every province
/// has factors, and both step tables are non-empty and sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    pub(super) constants: PricingConstants,
    pub(super) provinces: BTreeMap<ProvinceCode, ProvincialFactors>,
    pub(super) foundation_steps: StepTable<FoundationStep>,
    pub(super) container_steps: StepTable<ContainerStep>,
}

impl PricingConfig {
    /// Creates a validated pricing configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if a province is missing, a
    /// multiplier or distance is not positive, a cost range is inverted, or
    /// a step table is empty or unsorted.
    pub fn new(
        constants: PricingConstants,
        provinces: BTreeMap<ProvinceCode, ProvincialFactors>,
        foundation_steps: Vec<FoundationStep>,
        container_steps: Vec<ContainerStep>,
    ) -> EngineResult<Self> {
        validate_constants(&constants)?;
        validate_provinces(&provinces)?;

        Ok(Self {
            constants,
            provinces,
            foundation_steps: StepTable::new("foundation", foundation_steps)?,
            container_steps: StepTable::new("container", container_steps)?,
        })
    }

    /// Returns the pricing constants.
    pub fn constants(&self) -> &PricingConstants {
        &self.constants
    }

    /// Returns the factors of every province.
    pub fn provinces(&self) -> &BTreeMap<ProvinceCode, ProvincialFactors> {
        &self.provinces
    }

    /// Returns the foundation pile table.
    pub fn foundation_steps(&self) -> &StepTable<FoundationStep> {
        &self.foundation_steps
    }

    /// Returns the shipping container table.
    pub fn container_steps(&self) -> &StepTable<ContainerStep> {
        &self.container_steps
    }
}

fn validate_constants(constants: &PricingConstants) -> EngineResult<()> {
    for (name, bounds) in [
        ("appliances", constants.appliances),
        ("sewer_water_septic", constants.sewer_water_septic),
    ] {
        if bounds.min > bounds.max {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "{} range is inverted: min {} exceeds max {}",
                    name, bounds.min, bounds.max
                ),
            });
        }
    }
    Ok(())
}

fn validate_provinces(provinces: &BTreeMap<ProvinceCode, ProvincialFactors>) -> EngineResult<()> {
    if let Some(missing) = ProvinceCode::ALL
        .iter()
        .find(|code| !provinces.contains_key(code))
    {
        return Err(EngineError::InvalidConfig {
            message: format!("no provincial factors for {}", missing),
        });
    }

    for (code, factors) in provinces {
        let multipliers = [
            ("base_multiplier", factors.base_multiplier),
            ("foundation_multiplier", factors.foundation_multiplier),
            (
                "sewer_water_septic_multiplier",
                factors.sewer_water_septic_multiplier,
            ),
            ("permit_fees_multiplier", factors.permit_fees_multiplier),
        ];
        if let Some((name, value)) = multipliers.iter().find(|(_, v)| *v <= Decimal::ZERO) {
            return Err(EngineError::InvalidConfig {
                message: format!("{} for {} must be positive, got {}", name, code, value),
            });
        }
        if factors.shipping_distance_km == 0 {
            return Err(EngineError::InvalidConfig {
                message: format!("shipping_distance_km for {} must be positive", code),
            });
        }
    }
    Ok(())
}
