//! The standard pricing tables, embedded at build time.
//!
//! `config/standard/` carries the same figures as YAML; a loader test keeps
//! the two in step.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::calculation::StepTable;
use crate::models::ProvinceCode;

use super::types::{
    ContainerStep, CostBounds, DeliveryRates, FoundationRates, FoundationStep, PricingConfig,
    PricingConstants, ProvincialFactors,
};

/// Square feet per module, used for the table thresholds.
const MODULE_AREA: i64 = 104;

/// (province, base, foundation, shipping km, sewer/water/septic, permit fees),
/// multipliers in hundredths.
const PROVINCIAL_FACTORS: [(ProvinceCode, i64, i64, u32, i64, i64); 13] = [
    (ProvinceCode::AB, 107, 128, 1340, 141, 160),
    (ProvinceCode::BC, 115, 160, 2140, 176, 300),
    (ProvinceCode::MB, 100, 100, 150, 100, 100),
    (ProvinceCode::NB, 98, 100, 2100, 100, 80),
    (ProvinceCode::NL, 98, 100, 2900, 100, 90),
    (ProvinceCode::NS, 98, 100, 2400, 100, 100),
    (ProvinceCode::ON, 111, 144, 2225, 158, 200),
    (ProvinceCode::PE, 98, 100, 2500, 100, 80),
    (ProvinceCode::QC, 100, 100, 2300, 100, 140),
    (ProvinceCode::SK, 100, 100, 780, 100, 100),
    (ProvinceCode::NT, 118, 172, 2200, 189, 150),
    (ProvinceCode::NU, 122, 188, 2300, 207, 180),
    (ProvinceCode::YT, 115, 160, 3500, 176, 140),
];

/// (modules, bearing piles, bracing piles, mobilizations).
const FOUNDATION_PILES: [(u32, u32, u32, u32); 33] = [
    (5, 6, 4, 1),
    (6, 9, 4, 1),
    (7, 9, 4, 1),
    (8, 9, 4, 1),
    (9, 12, 4, 1),
    (10, 12, 4, 1),
    (11, 12, 4, 1),
    (12, 15, 6, 1),
    (13, 15, 6, 1),
    (14, 15, 6, 1),
    (15, 18, 6, 1),
    (16, 18, 6, 1),
    (17, 18, 6, 1),
    (18, 21, 8, 1),
    (19, 21, 8, 1),
    (20, 21, 8, 1),
    (21, 24, 8, 1),
    (22, 24, 8, 1),
    (23, 24, 8, 1),
    (24, 27, 10, 1),
    (25, 27, 10, 1),
    (26, 27, 10, 1),
    (27, 30, 10, 1),
    (28, 30, 10, 1),
    (29, 30, 10, 1),
    (30, 33, 12, 1),
    (31, 33, 12, 1),
    (32, 33, 12, 1),
    (33, 36, 12, 1),
    (34, 36, 12, 1),
    (35, 36, 12, 1),
    (36, 39, 14, 1),
    (37, 39, 14, 1),
];

/// (modules, containers).
const CONTAINERS: [(u32, u32); 33] = [
    (5, 3),
    (6, 4),
    (7, 4),
    (8, 4),
    (9, 5),
    (10, 5),
    (11, 5),
    (12, 6),
    (13, 6),
    (14, 6),
    (15, 7),
    (16, 7),
    (17, 7),
    (18, 8),
    (19, 8),
    (20, 8),
    (21, 9),
    (22, 9),
    (23, 9),
    (24, 10),
    (25, 10),
    (26, 10),
    (27, 11),
    (28, 11),
    (29, 11),
    (30, 12),
    (31, 12),
    (32, 12),
    (33, 13),
    (34, 13),
    (35, 13),
    (36, 14),
    (37, 14),
];

impl PricingConfig {
    /// Returns the standard pricing tables.
    ///
    /// # Example
    ///
    /// ```
    /// use build_estimator::config::PricingConfig;
    /// use build_estimator::models::ProvinceCode;
    ///
    /// let config = PricingConfig::standard();
    /// assert_eq!(config.provinces()[&ProvinceCode::MB].shipping_distance_km, 150);
    /// ```
    pub fn standard() -> Self {
        Self {
            constants: standard_constants(),
            provinces: standard_provinces(),
            foundation_steps: standard_foundation_table(),
            container_steps: standard_container_table(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard province-independent constants.
pub fn standard_constants() -> PricingConstants {
    PricingConstants {
        base_price: Decimal::from(205_000),
        main_floor_rate: Decimal::from(337),
        second_floor_rate: Decimal::from(166),
        early_adopter_discount_per_sqft: Decimal::from(10),
        foundation: FoundationRates {
            bearing_pile_cost: Decimal::from(1000),
            bracing_pile_cost: Decimal::from(800),
            mobilization_cost: Decimal::from(3000),
        },
        appliances: CostBounds {
            min: Decimal::from(12_000),
            max: Decimal::from(25_000),
        },
        delivery: DeliveryRates {
            first_container_cost: Decimal::from(550),
            additional_container_cost: Decimal::from(475),
            cost_per_km: Decimal::new(130, 2),
        },
        electrical_hookup: Decimal::from(2500),
        sewer_water_septic: CostBounds {
            min: Decimal::from(6500),
            max: Decimal::from(25_000),
        },
        permit_fee_offset: Decimal::from(750),
    }
}

/// The standard provincial factors.
pub fn standard_provinces() -> BTreeMap<ProvinceCode, ProvincialFactors> {
    PROVINCIAL_FACTORS
        .iter()
        .map(|&(code, base, foundation, km, sewer, permit)| {
            (
                code,
                ProvincialFactors {
                    base_multiplier: Decimal::new(base, 2),
                    foundation_multiplier: Decimal::new(foundation, 2),
                    shipping_distance_km: km,
                    sewer_water_septic_multiplier: Decimal::new(sewer, 2),
                    permit_fees_multiplier: Decimal::new(permit, 2),
                },
            )
        })
        .collect()
}

/// The standard foundation pile table.
pub fn standard_foundation_steps() -> Vec<FoundationStep> {
    FOUNDATION_PILES.iter().map(foundation_step).collect()
}

/// The standard shipping container table.
pub fn standard_container_steps() -> Vec<ContainerStep> {
    CONTAINERS.iter().map(container_step).collect()
}

fn standard_foundation_table() -> StepTable<FoundationStep> {
    let [lower @ .., largest] = &FOUNDATION_PILES;
    StepTable::from_sorted(lower.iter().map(foundation_step).collect(), foundation_step(largest))
}

fn standard_container_table() -> StepTable<ContainerStep> {
    let [lower @ .., largest] = &CONTAINERS;
    StepTable::from_sorted(lower.iter().map(container_step).collect(), container_step(largest))
}

fn foundation_step(&(modules, bearing, bracing, mobilization): &(u32, u32, u32, u32)) -> FoundationStep {
    FoundationStep {
        module_count: modules,
        main_floor_area_threshold: Decimal::from(i64::from(modules) * MODULE_AREA),
        bearing_pile_count: bearing,
        bracing_pile_count: bracing,
        mobilization_unit_count: mobilization,
    }
}

fn container_step(&(modules, containers): &(u32, u32)) -> ContainerStep {
    ContainerStep {
        module_count: modules,
        main_floor_area_threshold: Decimal::from(i64::from(modules) * MODULE_AREA),
        container_count: containers,
    }
}
