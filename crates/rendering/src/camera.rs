use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::camera_smoothing::CameraTarget;
use crate::scene::GROUND_SIZE;

/// Initial eye position.
pub const CAMERA_EYE: Vec3 = Vec3::new(28.0, 22.0, 28.0);
/// Point the camera orbits, near the building's vertical center.
pub const CAMERA_FOCUS: Vec3 = Vec3::new(0.0, 3.0, 0.0);
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

const ZOOM_SPEED: f32 = 0.1;
pub const MIN_DISTANCE: f32 = 8.0;
pub const MAX_DISTANCE: f32 = 150.0;
const MIN_PITCH: f32 = 2.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Pan distance per dragged pixel, per unit of camera distance.
const PAN_SENSITIVITY: f32 = 0.0015;

/// Orbital camera model: camera orbits around a focus point.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(CAMERA_EYE, CAMERA_FOCUS)
    }
}

impl OrbitCamera {
    /// Orbit parameters that put the camera at `eye` looking at `focus`.
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length();
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
        }
    }

    /// Spherical to cartesian offset from focus.
    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.focus + Vec3::new(x, y, z)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

#[derive(Resource, Default)]
pub struct CameraPanDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(),
    ));
    commands.insert_resource(CameraTarget::from(&orbit));
    commands.insert_resource(orbit);
}

fn clamp_focus(focus: &mut Vec3) {
    let half = GROUND_SIZE / 2.0;
    focus.x = focus.x.clamp(-half, half);
    focus.z = focus.z.clamp(-half, half);
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

/// True while the cursor is over the control panel or egui owns a drag.
fn pointer_over_panel(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.is_pointer_over_area() || ctx.is_using_pointer()
}

/// Tracks a held mouse button and returns the cursor movement since the
/// previous frame while it stays held.
fn drag_delta(
    buttons: &ButtonInput<MouseButton>,
    button: MouseButton,
    cursor: Option<Vec2>,
    over_ui: bool,
    dragging: &mut bool,
    last_pos: &mut Vec2,
) -> Option<Vec2> {
    if buttons.just_pressed(button) && !over_ui {
        if let Some(pos) = cursor {
            *dragging = true;
            *last_pos = pos;
        }
    }
    if buttons.just_released(button) {
        *dragging = false;
    }
    if !*dragging {
        return None;
    }
    let pos = cursor?;
    let delta = pos - *last_pos;
    *last_pos = pos;
    Some(delta)
}

/// Left-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraOrbitDrag>,
    mut target: ResMut<CameraTarget>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let over_ui = pointer_over_panel(&mut contexts);
    let drag = &mut *drag;

    if let Some(delta) = drag_delta(
        &buttons,
        MouseButton::Left,
        window.cursor_position(),
        over_ui,
        &mut drag.dragging,
        &mut drag.last_pos,
    ) {
        target.yaw -= delta.x * ORBIT_SENSITIVITY;
        target.pitch = (target.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }
}

/// Right-mouse drag: pan focus (direction relative to current yaw).
pub fn camera_pan_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraPanDrag>,
    mut target: ResMut<CameraTarget>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let over_ui = pointer_over_panel(&mut contexts);
    let drag = &mut *drag;

    if let Some(delta) = drag_delta(
        &buttons,
        MouseButton::Right,
        window.cursor_position(),
        over_ui,
        &mut drag.dragging,
        &mut drag.last_pos,
    ) {
        let scale = target.distance * PAN_SENSITIVITY;
        let cos_yaw = target.yaw.cos();
        let sin_yaw = target.yaw.sin();
        let world_x = -delta.x * cos_yaw - delta.y * sin_yaw;
        let world_z = delta.x * sin_yaw - delta.y * cos_yaw;
        target.focus.x += world_x * scale;
        target.focus.z += world_z * scale;
        clamp_focus(&mut target.focus);
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut target: ResMut<CameraTarget>,
) {
    if pointer_over_panel(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        target.distance = (target.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orbit_reproduces_initial_eye() {
        let orbit = OrbitCamera::default();
        assert!(orbit.eye().distance(CAMERA_EYE) < 1e-3);
        assert_eq!(orbit.focus, CAMERA_FOCUS);
        assert!((MIN_DISTANCE..=MAX_DISTANCE).contains(&orbit.distance));
        assert!((MIN_PITCH..=MAX_PITCH).contains(&orbit.pitch));
    }

    #[test]
    fn test_transform_looks_at_focus() {
        let orbit = OrbitCamera::default();
        let transform = orbit.transform();
        let to_focus = (orbit.focus - transform.translation).normalize();
        assert!(transform.forward().dot(to_focus) > 0.999);
    }

    #[test]
    fn test_clamp_focus_to_ground() {
        let mut focus = Vec3::new(1000.0, 3.0, -1000.0);
        clamp_focus(&mut focus);
        assert_eq!(focus.x, GROUND_SIZE / 2.0);
        assert_eq!(focus.z, -GROUND_SIZE / 2.0);
        assert_eq!(focus.y, 3.0);
    }

    #[test]
    fn test_drag_delta_tracks_held_button() {
        let mut buttons = ButtonInput::<MouseButton>::default();
        let mut dragging = false;
        let mut last = Vec2::ZERO;

        buttons.press(MouseButton::Left);
        let first = drag_delta(
            &buttons,
            MouseButton::Left,
            Some(Vec2::new(10.0, 10.0)),
            false,
            &mut dragging,
            &mut last,
        );
        assert_eq!(first, Some(Vec2::ZERO));

        buttons.clear();
        let second = drag_delta(
            &buttons,
            MouseButton::Left,
            Some(Vec2::new(15.0, 7.0)),
            false,
            &mut dragging,
            &mut last,
        );
        assert_eq!(second, Some(Vec2::new(5.0, -3.0)));

        buttons.release(MouseButton::Left);
        let released = drag_delta(
            &buttons,
            MouseButton::Left,
            Some(Vec2::new(20.0, 7.0)),
            false,
            &mut dragging,
            &mut last,
        );
        assert_eq!(released, None);
    }

    #[test]
    fn test_drag_ignored_when_starting_over_ui() {
        let mut buttons = ButtonInput::<MouseButton>::default();
        let mut dragging = false;
        let mut last = Vec2::ZERO;
        buttons.press(MouseButton::Left);
        let delta = drag_delta(
            &buttons,
            MouseButton::Left,
            Some(Vec2::new(10.0, 10.0)),
            true,
            &mut dragging,
            &mut last,
        );
        assert_eq!(delta, None);
        assert!(!dragging);
    }
}
