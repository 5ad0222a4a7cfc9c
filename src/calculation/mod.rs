//! Calculation logic for the build price estimator.
//!
//! This module contains the calculators that make up a price estimate:
//! provincial factor lookup, the shared step-table lookup, base build price,
//! foundation piles, appliances, delivery, sewer/water/septic connections,
//! permit fees, and the aggregator that combines them into a
//! [`crate::models::DetailedPriceBreakdown`].

mod aggregator;
mod appliances;
mod base_build;
mod delivery;
mod foundation;
mod rate_table;
mod rounding;
mod step_lookup;
mod utilities;

pub use aggregator::{PriceCalculation, calculate_detailed_price, calculate_price, estimate_price};
pub use appliances::{ApplianceResult, calculate_appliance_cost};
pub use base_build::{BaseBuildCost, BaseBuildResult, calculate_base_build_cost};
pub use delivery::{DeliveryResult, calculate_delivery_cost};
pub use foundation::{FoundationResult, calculate_foundation_cost};
pub use rate_table::{
    ProvincialFactorsLookupResult, get_provincial_factors, get_provincial_factors_by_code,
    lookup_provincial_factors,
};
pub use rounding::round_to_nearest_thousand;
pub use step_lookup::{StepTable, TableStep, lookup_step};
pub use utilities::{
    PermitFeesResult, SewerWaterSepticResult, calculate_permit_fees,
    calculate_sewer_water_septic_cost,
};
