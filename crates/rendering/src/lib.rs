use bevy::prelude::*;
use bevy::ui::UiSystem;

pub mod building_meshes;
pub mod camera;
pub mod camera_smoothing;
pub mod palette;
pub mod room_labels;
pub mod rotation;
pub mod scene;
pub mod session;

use camera::{CameraOrbitDrag, CameraPanDrag};
use camera_smoothing::CameraSmoothingConfig;
use scene::ViewportSize;
use session::{GenerateBuilding, ToggleRotation, ViewerSession};

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(palette::BACKGROUND_COLOR))
            .init_resource::<ViewerSession>()
            .init_resource::<ViewportSize>()
            .init_resource::<CameraOrbitDrag>()
            .init_resource::<CameraPanDrag>()
            .init_resource::<CameraSmoothingConfig>()
            .add_event::<GenerateBuilding>()
            .add_event::<ToggleRotation>()
            .add_systems(
                Startup,
                (
                    scene::initialize_viewport,
                    camera::setup_camera,
                    scene::setup_lighting,
                    scene::spawn_ground,
                    session::request_initial_building,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_drag,
                    camera::camera_pan_drag,
                    camera::camera_zoom,
                    camera_smoothing::smooth_camera_to_target,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    session::handle_toggle_rotation,
                    session::handle_generate_requests,
                    rotation::spin_building,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (scene::on_window_resized, scene::draw_ground_grid),
            )
            .add_systems(
                Update,
                (
                    room_labels::spawn_room_labels,
                    room_labels::cleanup_orphan_room_labels,
                )
                    .after(session::handle_generate_requests),
            )
            .add_systems(
                PostUpdate,
                room_labels::position_room_labels.before(UiSystem::Layout),
            );
    }
}
