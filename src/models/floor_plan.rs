//! Floor plan model.
//!
//! The estimator's sliders only produce areas on a fixed grid, with a
//! bounded total size and a second floor that must stay between a minimum
//! and half of the total. [`FloorPlan`] applies those rules so callers can
//! turn raw slider positions into valid [`PriceInputs`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{PriceInputs, ProvinceCode};

/// Slider increment for every floor area, in square feet.
pub const AREA_GRID_SQFT: u32 = 96;

/// Smallest selectable total size.
pub const MIN_TOTAL_SQFT: u32 = 768;

/// Largest selectable total size.
pub const MAX_TOTAL_SQFT: u32 = 3840;

/// Smallest allowed second floor.
pub const MIN_SECOND_FLOOR_SQFT: u32 = 288;

/// Footprint of one construction module.
pub const MODULE_SIZE_SQFT: u32 = 104;

/// Whether an area is shown to the exterior or the interior wall face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaMeasure {
    /// Measured to the exterior face of the walls. The engine always prices gross.
    Gross,
    /// Measured to the interior face of the walls, roughly 8% smaller.
    Net,
}

impl AreaMeasure {
    /// Net area as a fraction of gross area.
    pub fn net_factor() -> Decimal {
        Decimal::new(92, 2)
    }

    /// Converts a gross area for display in this measure.
    ///
    /// # Example
    ///
    /// ```
    /// use build_estimator::models::AreaMeasure;
    /// use rust_decimal::Decimal;
    ///
    /// let net = AreaMeasure::Net.display_area(Decimal::from(1000));
    /// assert_eq!(net, Decimal::from(920));
    /// ```
    pub fn display_area(&self, gross_sqft: Decimal) -> Decimal {
        match self {
            AreaMeasure::Gross => gross_sqft,
            AreaMeasure::Net => gross_sqft * Self::net_factor(),
        }
    }
}

/// A two-storey layout whose areas satisfy the slider rules.
///
/// Only serialized; plans are always built through [`FloorPlan::new`] so the
/// grid and second floor bounds hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloorPlan {
    total_sqft: u32,
    main_floor_sqft: u32,
    second_floor_sqft: u32,
}

impl FloorPlan {
    /// Builds a plan from a requested total and second floor.
    ///
    /// The total is clamped to the selectable range and snapped down to the
    /// grid. The second floor is snapped down to the grid and clamped between
    /// the minimum and half of the total. The main floor takes the rest.
    ///
    /// # Example
    ///
    /// ```
    /// use build_estimator::models::FloorPlan;
    ///
    /// let plan = FloorPlan::new(1920, 960);
    /// assert_eq!(plan.main_floor_sqft(), 960);
    /// assert_eq!(plan.second_floor_sqft(), 960);
    /// ```
    pub fn new(total_sqft: u32, second_floor_sqft: u32) -> Self {
        let total_sqft = snap_to_grid(total_sqft.clamp(MIN_TOTAL_SQFT, MAX_TOTAL_SQFT));
        let second_floor_sqft =
            snap_to_grid(second_floor_sqft).clamp(MIN_SECOND_FLOOR_SQFT, max_second_floor(total_sqft));

        Self {
            total_sqft,
            main_floor_sqft: total_sqft - second_floor_sqft,
            second_floor_sqft,
        }
    }

    /// Moves the main floor slider, keeping the total fixed.
    ///
    /// The requested size is snapped down to the grid and the second floor
    /// absorbs the difference. When that would push the second floor out of
    /// its allowed range it is pinned to the nearest bound and the main floor
    /// is recomputed from the total.
    ///
    /// The upper bound is half the total snapped down to the grid, the same
    /// bound [`FloorPlan::new`] uses. A slider that caps at the raw half
    /// would allow 432 sqft on an 864 sqft plan; this caps it at 384 so the
    /// second floor always lands on the grid.
    pub fn with_main_floor(&self, main_floor_sqft: u32) -> Self {
        let requested = snap_to_grid(main_floor_sqft);
        let second_floor_sqft = self
            .total_sqft
            .saturating_sub(requested)
            .clamp(MIN_SECOND_FLOOR_SQFT, max_second_floor(self.total_sqft));

        Self {
            total_sqft: self.total_sqft,
            main_floor_sqft: self.total_sqft - second_floor_sqft,
            second_floor_sqft,
        }
    }

    /// Moves the total size slider, keeping the second floor where it still fits.
    pub fn with_total(&self, total_sqft: u32) -> Self {
        Self::new(total_sqft, self.second_floor_sqft)
    }

    /// Combined gross area.
    pub fn total_sqft(&self) -> u32 {
        self.total_sqft
    }

    /// Gross main floor area.
    pub fn main_floor_sqft(&self) -> u32 {
        self.main_floor_sqft
    }

    /// Gross second floor area.
    pub fn second_floor_sqft(&self) -> u32 {
        self.second_floor_sqft
    }

    /// Whole construction modules that fit the main floor footprint.
    pub fn module_count(&self) -> u32 {
        self.main_floor_sqft / MODULE_SIZE_SQFT
    }

    /// Builds engine inputs for this plan.
    pub fn to_price_inputs(
        &self,
        province: ProvinceCode,
        early_adopter: bool,
    ) -> EngineResult<PriceInputs> {
        PriceInputs::new(
            province,
            Decimal::from(self.main_floor_sqft),
            Decimal::from(self.second_floor_sqft),
            early_adopter,
        )
    }
}

impl Default for FloorPlan {
    /// 1,920 sqft split evenly between the two floors.
    fn default() -> Self {
        Self::new(1920, 960)
    }
}

/// Price per square foot, rounded to the nearest dollar (halves up).
///
/// Returns zero for a zero area.
pub fn price_per_sqft(total_price: Decimal, total_area_sqft: Decimal) -> Decimal {
    if total_area_sqft.is_zero() {
        return Decimal::ZERO;
    }
    (total_price / total_area_sqft + Decimal::new(5, 1)).floor()
}

fn snap_to_grid(sqft: u32) -> u32 {
    sqft / AREA_GRID_SQFT * AREA_GRID_SQFT
}

fn max_second_floor(total_sqft: u32) -> u32 {
    snap_to_grid(total_sqft / 2)
}
