//! JSON dump of a generated building for `FLOORCRAFT_PRINT_LAYOUT`.

use std::fmt;

use planner::{BuildRequest, Building, Dimensions, PlanError};

#[derive(Debug)]
pub enum LayoutDumpError {
    Plan(PlanError),
    Json(serde_json::Error),
}

impl fmt::Display for LayoutDumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutDumpError::Plan(err) => write!(f, "cannot generate layout: {err}"),
            LayoutDumpError::Json(err) => write!(f, "cannot serialize layout: {err}"),
        }
    }
}

impl std::error::Error for LayoutDumpError {}

impl From<PlanError> for LayoutDumpError {
    fn from(err: PlanError) -> Self {
        LayoutDumpError::Plan(err)
    }
}

impl From<serde_json::Error> for LayoutDumpError {
    fn from(err: serde_json::Error) -> Self {
        LayoutDumpError::Json(err)
    }
}

/// Pretty JSON for the building `request` produces with default dimensions.
pub fn layout_json(request: &BuildRequest) -> Result<String, LayoutDumpError> {
    let building = Building::generate(request, Dimensions::default())?;
    Ok(serde_json::to_string_pretty(&building)?)
}
