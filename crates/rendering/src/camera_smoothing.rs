//! Orbit damping via exponential interpolation (lerp).
//!
//! Input systems write to `CameraTarget` (the desired camera state).
//! Each frame, `smooth_camera_to_target` lerps `OrbitCamera` toward `CameraTarget`
//! using frame-rate independent exponential interpolation:
//!
//!   `value += (target - value) * (1 - exp(-speed * dt))`
//!
//! The camera never snaps to a new orientation; it converges over a few
//! frames and stops once within `epsilon`.

use bevy::prelude::*;

use crate::camera::OrbitCamera;

/// Configurable smoothing parameters.
#[derive(Resource, Debug, Clone)]
pub struct CameraSmoothingConfig {
    /// Smoothing speed for focus panning (higher = snappier). Default: 8.0.
    pub position_speed: f32,
    /// Smoothing speed for zoom (distance). Default: 8.0.
    pub zoom_speed: f32,
    /// Smoothing speed for rotation (yaw/pitch). Default: 6.0.
    pub rotation_speed: f32,
    /// Convergence threshold — stop interpolating when difference is below this.
    pub epsilon: f32,
}

impl Default for CameraSmoothingConfig {
    fn default() -> Self {
        Self {
            position_speed: 8.0,
            zoom_speed: 8.0,
            rotation_speed: 6.0,
            epsilon: 0.001,
        }
    }
}

/// The desired camera state that input systems write to.
///
/// `OrbitCamera` is the *actual* state applied to the camera transform.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for CameraTarget {
    fn default() -> Self {
        Self::from(&OrbitCamera::default())
    }
}

impl From<&OrbitCamera> for CameraTarget {
    fn from(orbit: &OrbitCamera) -> Self {
        Self {
            focus: orbit.focus,
            yaw: orbit.yaw,
            pitch: orbit.pitch,
            distance: orbit.distance,
        }
    }
}

/// Exponential interpolation factor for a given speed and delta time.
///
/// Returns a value in `[0, 1]`. At `speed = 8.0` and `dt = 1/60` this is
/// ~0.125 per frame.
#[inline]
fn exp_lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

fn approach(value: &mut f32, target: f32, factor: f32, eps: f32) -> bool {
    let delta = target - *value;
    if delta.abs() > eps {
        *value += delta * factor;
        true
    } else if delta != 0.0 {
        *value = target;
        true
    } else {
        false
    }
}

/// Moves `orbit` one damping step toward `target`. Returns whether anything
/// changed.
pub fn damp_toward(
    orbit: &mut OrbitCamera,
    target: &CameraTarget,
    config: &CameraSmoothingConfig,
    dt: f32,
) -> bool {
    let pos_factor = exp_lerp_factor(config.position_speed, dt);
    let zoom_factor = exp_lerp_factor(config.zoom_speed, dt);
    let rot_factor = exp_lerp_factor(config.rotation_speed, dt);
    let eps = config.epsilon;

    let mut changed = false;

    let focus_delta = target.focus - orbit.focus;
    if focus_delta.length_squared() > eps * eps {
        orbit.focus += focus_delta * pos_factor;
        changed = true;
    } else if focus_delta.length_squared() > 0.0 {
        orbit.focus = target.focus;
        changed = true;
    }

    changed |= approach(&mut orbit.distance, target.distance, zoom_factor, eps);
    changed |= approach(&mut orbit.yaw, target.yaw, rot_factor, eps);
    changed |= approach(&mut orbit.pitch, target.pitch, rot_factor, eps);
    changed
}

/// System: lerp `OrbitCamera` toward `CameraTarget` each frame.
///
/// Works on a copy so a converged camera doesn't trigger change detection.
pub fn smooth_camera_to_target(
    target: Res<CameraTarget>,
    config: Res<CameraSmoothingConfig>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let mut next = *orbit;
    if damp_toward(&mut next, &target, &config, dt) {
        *orbit = next;
    }
}
