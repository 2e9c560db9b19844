//! Long-lived scene setup: lights, ground, grid and viewport tracking.
//! Nothing here is touched when the building is regenerated.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::palette::{GRID_COLOR, GROUND_COLOR};

/// Side length of the square ground plane; bounds the building with margin.
pub const GROUND_SIZE: f32 = 120.0;
const GRID_CELLS: u32 = 120;
/// Lift the grid off the ground plane so the lines don't z-fight.
const GRID_LIFT: f32 = 0.01;

pub const SUN_POSITION: Vec3 = Vec3::new(40.0, 60.0, 40.0);

/// Current size of the render surface in logical pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

pub fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.53, 0.53, 0.53),
        brightness: 400.0,
    });

    // Directional light (sun) shining from above one corner toward the origin
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
    ));
}

/// System: draw the 1-unit line grid over the ground plane.
pub fn draw_ground_grid(mut gizmos: Gizmos) {
    gizmos.grid(
        Isometry3d::new(
            Vec3::new(0.0, GRID_LIFT, 0.0),
            Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        ),
        UVec2::splat(GRID_CELLS),
        Vec2::splat(GROUND_SIZE / GRID_CELLS as f32),
        GRID_COLOR,
    );
}

/// Startup system: record the initial surface size.
pub fn initialize_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    *viewport = ViewportSize {
        width: window.width(),
        height: window.height(),
    };
}

/// System: on resize, record the new size and update the camera aspect
/// ratio. Nothing else changes.
pub fn on_window_resized(
    mut events: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(last) = events.read().last() else {
        return;
    };
    *viewport = ViewportSize {
        width: last.width,
        height: last.height,
    };
    let Some(aspect) = viewport.aspect_ratio() else {
        return;
    };
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
    debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
}
