// Camera and model transform state consumed by the external renderer.
//
// These types avoid referencing platform-specific APIs; the web layer only
// flattens them into the per-frame render callback. FOV is carried in
// degrees (the unit the keyframes are authored in) and converted once when
// building the projection matrix.

use crate::core::constants::{
    CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_ASPECT, INITIAL_CAMERA_EYE, INITIAL_CAMERA_FOV_DEGREES,
};
use glam::{Mat4, Vec3};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fov_y_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at the page-load pose, before the rig pulls it onto section 0.
    pub fn initial(aspect: f32) -> Self {
        Self {
            eye: Vec3::from(INITIAL_CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fov_y_degrees: INITIAL_CAMERA_FOV_DEGREES,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::initial(DEFAULT_ASPECT)
    }
}

/// Pose of the showcased model: position, Euler rotation (radians), and
/// uniform scale.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModelTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}
