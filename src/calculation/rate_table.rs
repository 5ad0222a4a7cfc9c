//! Provincial factor lookup.
//!
//! This module resolves the regional cost factors for a province from the
//! pricing configuration.

use crate::config::{PricingConfig, ProvincialFactors};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, ProvinceCode};

/// The result of a provincial factor lookup, including the factors and audit step.
#[derive(Debug, Clone)]
pub struct ProvincialFactorsLookupResult {
    /// The factors for the province.
    pub factors: ProvincialFactors,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Returns the factors for `province`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidProvinceCode`] if the configuration has no
/// entry for the province. Validated configurations always have one.
///
/// # Examples
///
/// ```
/// use build_estimator::calculation::get_provincial_factors;
/// use build_estimator::config::PricingConfig;
/// use build_estimator::models::ProvinceCode;
/// use rust_decimal::Decimal;
///
/// let config = PricingConfig::standard();
/// let factors = get_provincial_factors(&config, ProvinceCode::ON).unwrap();
/// assert_eq!(factors.base_multiplier, Decimal::new(111, 2));
/// ```
pub fn get_provincial_factors(
    config: &PricingConfig,
    province: ProvinceCode,
) -> EngineResult<&ProvincialFactors> {
    config
        .provinces()
        .get(&province)
        .ok_or_else(|| EngineError::InvalidProvinceCode {
            code: province.to_string(),
        })
}

/// Parses `code` and returns the factors for that province.
///
/// # Errors
///
/// Returns [`EngineError::InvalidProvinceCode`] if `code` is not a known
/// province or territory.
pub fn get_provincial_factors_by_code<'a>(
    config: &'a PricingConfig,
    code: &str,
) -> EngineResult<&'a ProvincialFactors> {
    let province: ProvinceCode = code.parse()?;
    get_provincial_factors(config, province)
}

/// Looks up the factors for `province` and records the lookup.
pub fn lookup_provincial_factors(
    config: &PricingConfig,
    province: ProvinceCode,
    step_number: u32,
) -> EngineResult<ProvincialFactorsLookupResult> {
    let factors = *get_provincial_factors(config, province)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "provincial_factors".to_string(),
        rule_name: "Provincial Factors".to_string(),
        input: serde_json::json!({
            "province": province.as_str()
        }),
        output: serde_json::json!({
            "base_multiplier": factors.base_multiplier.to_string(),
            "foundation_multiplier": factors.foundation_multiplier.to_string(),
            "shipping_distance_km": factors.shipping_distance_km,
            "sewer_water_septic_multiplier": factors.sewer_water_septic_multiplier.to_string(),
            "permit_fees_multiplier": factors.permit_fees_multiplier.to_string()
        }),
        reasoning: format!(
            "{} ({}): base x{}, foundation x{}, {} km shipping",
            province.name(),
            province,
            factors.base_multiplier,
            factors.foundation_multiplier,
            factors.shipping_distance_km
        ),
    };

    Ok(ProvincialFactorsLookupResult {
        factors,
        audit_step,
    })
}
