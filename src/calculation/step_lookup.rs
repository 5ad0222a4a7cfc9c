//! Step-table lookup shared by the foundation and delivery calculators.
//!
//! Pile and container quantities are tabulated per module count, keyed by
//! the largest main floor area each row covers. A lookup takes the first
//! row whose threshold covers the queried area and falls back to the last
//! row when the area is larger than every threshold.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// A row of a step table.
pub trait TableStep {
    /// The largest main floor area, in square feet, this row covers.
    fn main_floor_area_threshold(&self) -> Decimal;
}

/// A non-empty table of steps sorted by strictly increasing threshold.
///
/// The largest row is held apart from the rest so a table can never be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StepTable<S> {
    lower: Vec<S>,
    largest: S,
}

impl<S: TableStep> StepTable<S> {
    /// Creates a step table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the table is empty, has a
    /// non-positive threshold, or its thresholds are not strictly increasing.
    pub fn new(name: &str, mut steps: Vec<S>) -> EngineResult<Self> {
        if let Some(step) = steps
            .iter()
            .find(|s| s.main_floor_area_threshold() <= Decimal::ZERO)
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "{} table has non-positive threshold {}",
                    name,
                    step.main_floor_area_threshold()
                ),
            });
        }

        if let Some(pair) = steps.windows(2).find(|pair| {
            pair[1].main_floor_area_threshold() <= pair[0].main_floor_area_threshold()
        }) {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "{} table thresholds must strictly increase: {} is followed by {}",
                    name,
                    pair[0].main_floor_area_threshold(),
                    pair[1].main_floor_area_threshold()
                ),
            });
        }

        let Some(largest) = steps.pop() else {
            return Err(EngineError::InvalidConfig {
                message: format!("{} table is empty", name),
            });
        };

        Ok(Self {
            lower: steps,
            largest,
        })
    }

    /// Builds a table from rows already sorted below `largest`.
    pub(crate) fn from_sorted(lower: Vec<S>, largest: S) -> Self {
        Self { lower, largest }
    }

    /// Returns the step covering `area`.
    ///
    /// This is the first step whose threshold is at least `area`. Areas above
    /// the largest threshold resolve to the last step rather than being
    /// extrapolated, and areas below the smallest threshold resolve to the
    /// first step.
    pub fn lookup(&self, area: Decimal) -> &S {
        self.lower
            .iter()
            .find(|s| s.main_floor_area_threshold() >= area)
            .unwrap_or(&self.largest)
    }

    /// Returns the step with the largest threshold.
    pub fn largest(&self) -> &S {
        &self.largest
    }

    /// Iterates over all steps in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.lower.iter().chain(std::iter::once(&self.largest))
    }

    /// Number of steps, always at least one.
    pub fn len(&self) -> usize {
        self.lower.len() + 1
    }

    /// Always false; kept alongside [`StepTable::len`].
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Returns the step covering `area` in `table`.
///
/// Free-function form of [`StepTable::lookup`].
pub fn lookup_step<S: TableStep>(table: &StepTable<S>, area: Decimal) -> &S {
    table.lookup(area)
}
