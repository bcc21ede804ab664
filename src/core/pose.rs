// Keyframe interpolation and per-frame pose application.
//
// `blend` is the pure half: progress in, blended camera/model pose out.
// `PoseDriver` is the stateful half: it writes a blended pose onto the
// live camera and model transforms once per rendered frame.

use crate::core::camera::{Camera, ModelTransform};
use crate::core::constants::CAMERA_POSITION_SMOOTHING;
use crate::core::keyframes::KeyframeTrack;
use glam::Vec3;

/// Blended camera target for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub fov_degrees: f32,
    pub look_at: Vec3,
}

/// Blended model target for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Blend the two keyframes bounding `progress` into a camera/model pose.
///
/// The integer part of `progress` selects the base section, the fraction is
/// the blend weight toward the next keyframe. The last keyframe has no
/// successor: there the "next" lookup folds back onto the current one, so
/// the fraction contributes no change. Callers uphold the progress
/// invariant `0 <= progress <= N-1`; there is no defensive clamping here.
pub fn blend(track: &KeyframeTrack, progress: f32) -> (CameraPose, ModelPose) {
    debug_assert!(progress >= 0.0 && progress <= (track.len() - 1) as f32);
    let last = track.len() - 1;
    let section = (progress.floor() as usize).min(last);
    let next = (section + 1).min(last);
    let t = progress - section as f32;

    let cam_a = track.camera(section);
    let cam_b = track.camera(next);
    let camera = CameraPose {
        position: cam_a.position.lerp(cam_b.position, t),
        fov_degrees: lerp(cam_a.fov_degrees, cam_b.fov_degrees, t),
        look_at: cam_a.look_at.lerp(cam_b.look_at, t),
    };

    let mod_a = track.model(section);
    let mod_b = track.model(next);
    let model = ModelPose {
        position: mod_a.position.lerp(mod_b.position, t),
        rotation: mod_a.rotation.lerp(mod_b.rotation, t),
    };

    (camera, model)
}

/// Writes blended poses onto the live camera and model, once per frame.
pub struct PoseDriver {
    pub model_scale: f32,
}

impl PoseDriver {
    pub fn new(model_scale: f32) -> Self {
        Self { model_scale }
    }

    /// Apply one frame's pose. The camera position eases toward its target
    /// with a fixed per-frame factor; look-at and FOV snap to the blend.
    /// `model` is `None` while the asset is still loading, in which case
    /// only the camera is updated.
    pub fn apply(
        &self,
        camera: &mut Camera,
        model: Option<&mut ModelTransform>,
        camera_pose: &CameraPose,
        model_pose: &ModelPose,
    ) {
        camera.eye = camera.eye.lerp(camera_pose.position, CAMERA_POSITION_SMOOTHING);
        camera.target = camera_pose.look_at;
        camera.fov_y_degrees = camera_pose.fov_degrees;

        if let Some(model) = model {
            model.position = model_pose.position;
            model.rotation = model_pose.rotation;
            model.scale = self.model_scale;
        }
    }
}
