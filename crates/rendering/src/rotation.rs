//! Auto-rotation of the displayed building.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::building_meshes::BuildingRoot;
use crate::session::ViewerSession;

/// Yaw added to the building every frame while rotating, in radians.
pub const ROTATION_STEP: f32 = 0.004;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationState {
    #[default]
    Rotating,
    Paused,
}

impl RotationState {
    pub fn toggled(self) -> Self {
        match self {
            RotationState::Rotating => RotationState::Paused,
            RotationState::Paused => RotationState::Rotating,
        }
    }

    pub fn is_rotating(self) -> bool {
        self == RotationState::Rotating
    }

    pub fn label(self) -> &'static str {
        match self {
            RotationState::Rotating => "Rotating",
            RotationState::Paused => "Paused",
        }
    }
}

/// Accumulated yaw of a building root, kept in `[0, TAU)`.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct BuildingSpin {
    pub yaw: f32,
}

impl BuildingSpin {
    /// Advances one frame and returns the new yaw.
    pub fn advance(&mut self) -> f32 {
        self.yaw = (self.yaw + ROTATION_STEP).rem_euclid(TAU);
        self.yaw
    }
}

/// System: spin the current building while the session is rotating.
pub fn spin_building(
    session: Res<ViewerSession>,
    mut roots: Query<(&mut BuildingSpin, &mut Transform), With<BuildingRoot>>,
) {
    if !session.rotation.is_rotating() {
        return;
    }
    for (mut spin, mut transform) in &mut roots {
        let yaw = spin.advance();
        transform.rotation = Quat::from_rotation_y(yaw);
    }
}
