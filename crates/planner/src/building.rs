use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::ROOF_THICKNESS;
use crate::geometry::{Block, Dimensions};
use crate::layout::{layout_floor, FloorLayout};
use crate::plan_error::PlanError;
use crate::request::BuildRequest;

/// A complete generated building: every floor plus the roof slab.
///
/// Buildings are never edited in place; a new request produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub dimensions: Dimensions,
    pub request: BuildRequest,
    pub floors: Vec<FloorLayout>,
    pub roof: Block,
}

impl Building {
    /// Validates `request` and lays out every floor of the building.
    pub fn generate(request: &BuildRequest, dimensions: Dimensions) -> Result<Self, PlanError> {
        request.validate()?;
        dimensions.validate()?;

        let floors = (0..request.floors)
            .map(|index| layout_floor(&dimensions, request.bedrooms, index, request.columns))
            .collect::<Result<Vec<_>, _>>()?;

        let roof = Block::new(
            Vec3::new(0.0, dimensions.base_y(request.floors), 0.0),
            Vec3::new(dimensions.width, ROOF_THICKNESS, dimensions.depth),
        );

        Ok(Self {
            dimensions,
            request: *request,
            floors,
            roof,
        })
    }

    /// Top of the roof slab.
    pub fn height(&self) -> f32 {
        self.roof.center.y + self.roof.size.y / 2.0
    }

    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|f| f.rooms.len()).sum()
    }

    pub fn fixture_count(&self) -> usize {
        self.floors.iter().map(|f| f.fixtures.len()).sum()
    }
}
