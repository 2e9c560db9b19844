use bevy::math::{Rect, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::{BUILDING_DEPTH, BUILDING_WIDTH, FLOOR_HEIGHT, MIN_DEPTH, SIDE_MARGIN};
use crate::plan_error::PlanError;

/// Overall building envelope. Fixed for the whole building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub depth: f32,
    pub floor_height: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: BUILDING_WIDTH,
            depth: BUILDING_DEPTH,
            floor_height: FLOOR_HEIGHT,
        }
    }
}

impl Dimensions {
    pub fn new(width: f32, depth: f32, floor_height: f32) -> Result<Self, PlanError> {
        let dims = Self {
            width,
            depth,
            floor_height,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Checks the envelope against the room template.
    pub fn validate(&self) -> Result<(), PlanError> {
        for (name, value) in [
            ("width", self.width),
            ("depth", self.depth),
            ("floor height", self.floor_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::InvalidDimensions(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.width <= SIDE_MARGIN {
            return Err(PlanError::InvalidDimensions(format!(
                "width must exceed {SIDE_MARGIN}, got {}",
                self.width
            )));
        }
        if self.depth < MIN_DEPTH {
            return Err(PlanError::InvalidDimensions(format!(
                "depth must be at least {MIN_DEPTH}, got {}",
                self.depth
            )));
        }
        Ok(())
    }

    /// Elevation of the slab for floor `index`.
    #[inline]
    pub fn base_y(&self, index: u32) -> f32 {
        index as f32 * self.floor_height
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_depth(&self) -> f32 {
        self.depth / 2.0
    }
}

/// Axis-aligned box given by its center and full extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub center: Vec3,
    pub size: Vec3,
}

impl Block {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Projection onto the ground (x,z) plane.
    pub fn footprint(&self) -> Rect {
        Rect::from_center_size(
            Vec2::new(self.center.x, self.center.z),
            Vec2::new(self.size.x, self.size.z),
        )
    }

    pub fn raised(self, dy: f32) -> Self {
        Self {
            center: self.center + Vec3::Y * dy,
            ..self
        }
    }
}

/// Vertical cylinder standing on `base`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub base: Vec3,
    pub radius: f32,
    pub height: f32,
}

impl Column {
    pub fn center(&self) -> Vec3 {
        self.base + Vec3::Y * (self.height / 2.0)
    }

    pub fn raised(self, dy: f32) -> Self {
        Self {
            base: self.base + Vec3::Y * dy,
            ..self
        }
    }
}

/// True when two footprints share a region of positive area.
/// Rectangles that only touch along an edge do not overlap.
pub fn footprints_overlap(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}
