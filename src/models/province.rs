//! Province model.
//!
//! This module defines the [`ProvinceCode`] enum covering the Canadian
//! provinces and territories a build can be delivered to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A Canadian province or territory, identified by its postal abbreviation.
///
/// The set is closed: parsing any other string fails with
/// [`EngineError::InvalidProvinceCode`].
///
/// # Example
///
/// ```
/// use build_estimator::models::ProvinceCode;
///
/// let province: ProvinceCode = "mb".parse().unwrap();
/// assert_eq!(province, ProvinceCode::MB);
/// assert_eq!(province.name(), "Manitoba");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProvinceCode {
    /// Alberta.
    AB,
    /// British Columbia.
    BC,
    /// Manitoba.
    MB,
    /// New Brunswick.
    NB,
    /// Newfoundland and Labrador.
    NL,
    /// Nova Scotia.
    NS,
    /// Ontario.
    ON,
    /// Prince Edward Island.
    PE,
    /// Quebec.
    QC,
    /// Saskatchewan.
    SK,
    /// Northwest Territories.
    NT,
    /// Nunavut.
    NU,
    /// Yukon.
    YT,
}

impl ProvinceCode {
    /// Every province and territory, in display order.
    pub const ALL: [ProvinceCode; 13] = [
        ProvinceCode::AB,
        ProvinceCode::BC,
        ProvinceCode::MB,
        ProvinceCode::NB,
        ProvinceCode::NL,
        ProvinceCode::NS,
        ProvinceCode::ON,
        ProvinceCode::PE,
        ProvinceCode::QC,
        ProvinceCode::SK,
        ProvinceCode::NT,
        ProvinceCode::NU,
        ProvinceCode::YT,
    ];

    /// Returns the two-letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProvinceCode::AB => "AB",
            ProvinceCode::BC => "BC",
            ProvinceCode::MB => "MB",
            ProvinceCode::NB => "NB",
            ProvinceCode::NL => "NL",
            ProvinceCode::NS => "NS",
            ProvinceCode::ON => "ON",
            ProvinceCode::PE => "PE",
            ProvinceCode::QC => "QC",
            ProvinceCode::SK => "SK",
            ProvinceCode::NT => "NT",
            ProvinceCode::NU => "NU",
            ProvinceCode::YT => "YT",
        }
    }

    /// Returns the full English name.
    pub fn name(&self) -> &'static str {
        match self {
            ProvinceCode::AB => "Alberta",
            ProvinceCode::BC => "British Columbia",
            ProvinceCode::MB => "Manitoba",
            ProvinceCode::NB => "New Brunswick",
            ProvinceCode::NL => "Newfoundland and Labrador",
            ProvinceCode::NS => "Nova Scotia",
            ProvinceCode::ON => "Ontario",
            ProvinceCode::PE => "Prince Edward Island",
            ProvinceCode::QC => "Quebec",
            ProvinceCode::SK => "Saskatchewan",
            ProvinceCode::NT => "Northwest Territories",
            ProvinceCode::NU => "Nunavut",
            ProvinceCode::YT => "Yukon",
        }
    }
}

impl fmt::Display for ProvinceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProvinceCode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        ProvinceCode::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| EngineError::InvalidProvinceCode {
                code: s.to_string(),
            })
    }
}

impl TryFrom<String> for ProvinceCode {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProvinceCode> for String {
    fn from(province: ProvinceCode) -> Self {
        province.as_str().to_string()
    }
}
