// Keyframe data model: one camera pose and one model pose per page section.

use glam::Vec3;

/// Camera interpolation endpoint for one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraKeyframe {
    pub position: Vec3,
    pub fov_degrees: f32,
    pub look_at: Vec3,
}

/// Model interpolation endpoint for one section. Rotation is Euler radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelKeyframe {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Index-aligned camera and model keyframe lists, fixed at page load.
///
/// Both lists have the same length N, one entry per page section; section
/// index k interpolates between keyframes k and k+1.
#[derive(Clone, Debug)]
pub struct KeyframeTrack {
    camera: Vec<CameraKeyframe>,
    model: Vec<ModelKeyframe>,
}

impl KeyframeTrack {
    pub fn new(camera: Vec<CameraKeyframe>, model: Vec<ModelKeyframe>) -> anyhow::Result<Self> {
        anyhow::ensure!(!camera.is_empty(), "keyframe track must not be empty");
        anyhow::ensure!(
            camera.len() == model.len(),
            "camera and model keyframe counts differ: {} vs {}",
            camera.len(),
            model.len()
        );
        Ok(Self { camera, model })
    }

    /// Number of sections (= keyframes per list).
    #[inline]
    pub fn len(&self) -> usize {
        self.camera.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.camera.is_empty()
    }

    #[inline]
    pub fn camera(&self, index: usize) -> &CameraKeyframe {
        &self.camera[index]
    }

    #[inline]
    pub fn model(&self, index: usize) -> &ModelKeyframe {
        &self.model[index]
    }
}
