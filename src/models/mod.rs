//! Core data models for the build price estimator.
//!
//! This module contains all the domain models used throughout the engine.

mod floor_plan;
mod price_breakdown;
mod price_inputs;
mod province;

pub use floor_plan::{
    AREA_GRID_SQFT, AreaMeasure, FloorPlan, MAX_TOTAL_SQFT, MIN_SECOND_FLOOR_SQFT, MIN_TOTAL_SQFT,
    MODULE_SIZE_SQFT, price_per_sqft,
};
pub use price_breakdown::{
    AdditionalCosts, ApplianceCost, AuditStep, ContainerCharge, DeliveryCost,
    DetailedPriceBreakdown, DistanceCharge, FoundationCost, LineItem, PermitFeesCost, PriceRange,
    SewerWaterSepticCost,
};
pub use price_inputs::{
    MAIN_FLOOR_FIELD, MAX_AREA_SQFT, PriceInputs, SECOND_FLOOR_FIELD, area_from_f64,
    validate_area,
};
pub use province::ProvinceCode;
