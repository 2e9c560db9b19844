//! User-facing build parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_BEDROOMS, DEFAULT_FLOORS, MAX_BEDROOMS, MAX_FLOORS, MIN_BEDROOMS, MIN_FLOORS,
};
use crate::plan_error::PlanError;

pub const FLOORS_FIELD: &str = "Floors";
pub const BEDROOMS_FIELD: &str = "Bedrooms";

/// Parameters for one building generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub floors: u32,
    pub bedrooms: u32,
    /// Add the structural column grid to every floor.
    pub columns: bool,
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS,
            bedrooms: DEFAULT_BEDROOMS,
            columns: false,
        }
    }
}

impl BuildRequest {
    /// Builds a request from raw form text, rejecting anything that is not
    /// a whole number inside the accepted range.
    pub fn parse(floors: &str, bedrooms: &str, columns: bool) -> Result<Self, PlanError> {
        let floors = parse_count(FLOORS_FIELD, floors, MIN_FLOORS, MAX_FLOORS)?;
        let bedrooms = parse_count(BEDROOMS_FIELD, bedrooms, MIN_BEDROOMS, MAX_BEDROOMS)?;
        Ok(Self {
            floors,
            bedrooms,
            columns,
        })
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        check_range(FLOORS_FIELD, self.floors as i64, MIN_FLOORS, MAX_FLOORS)?;
        check_range(
            BEDROOMS_FIELD,
            self.bedrooms as i64,
            MIN_BEDROOMS,
            MAX_BEDROOMS,
        )?;
        Ok(())
    }
}

/// Parses a whole-number form field and checks it against `[min, max]`.
///
/// Negative numbers parse successfully so they can be reported as out of
/// range rather than as garbage.
pub fn parse_count(field: &'static str, input: &str, min: u32, max: u32) -> Result<u32, PlanError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| PlanError::NotANumber {
        field,
        input: trimmed.to_string(),
    })?;
    check_range(field, value, min, max)?;
    Ok(value as u32)
}

fn check_range(field: &'static str, value: i64, min: u32, max: u32) -> Result<(), PlanError> {
    if value < min as i64 || value > max as i64 {
        return Err(PlanError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
