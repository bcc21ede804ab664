// Per-page keyframe sets for the three showcase models.
//
// Each page has one camera path and one model path, three sections long.
// The values are authored against the pages' section layout: section 0 is
// the hero shot, section 1 the tech spread, section 2 the closing spread.

use crate::core::constants::MODEL_SCALE;
use crate::core::keyframes::{CameraKeyframe, KeyframeTrack, ModelKeyframe};
use glam::Vec3;

/// Static showcase configuration for one model page.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub camera: &'static [CameraKeyframe],
    pub model: &'static [ModelKeyframe],
    pub model_scale: f32,
}

impl Preset {
    /// Materialize the validated keyframe track for this page.
    pub fn track(&self) -> anyhow::Result<KeyframeTrack> {
        KeyframeTrack::new(self.camera.to_vec(), self.model.to_vec())
    }
}

const R32_CAMERA: [CameraKeyframe; 3] = [
    CameraKeyframe {
        position: Vec3::new(-90.0, 4.5, 4.0),
        fov_degrees: 15.0,
        look_at: Vec3::new(0.0, -0.15, 0.0),
    },
    CameraKeyframe {
        position: Vec3::new(-4.0, 4.0, 100.0),
        fov_degrees: 10.0,
        look_at: Vec3::new(0.0, 1.0, 0.0),
    },
    CameraKeyframe {
        position: Vec3::new(-30.0, 4.0, 100.0),
        fov_degrees: 10.0,
        look_at: Vec3::new(0.0, 1.0, 0.0),
    },
];

const R32_MODEL: [ModelKeyframe; 3] = [
    ModelKeyframe {
        position: Vec3::new(0.1, -1.0, 0.0),
        rotation: Vec3::new(0.0, 4.0, 0.0),
    },
    ModelKeyframe {
        position: Vec3::new(-6.0, -4.0, 0.0),
        rotation: Vec3::new(0.0, 0.0, 0.0),
    },
    ModelKeyframe {
        position: Vec3::new(1.0, -4.0, 1.0),
        rotation: Vec3::new(0.0, 2.0, 0.0),
    },
];

const R33_MODEL: [ModelKeyframe; 3] = [
    ModelKeyframe {
        position: Vec3::new(0.1, -1.0, 0.0),
        rotation: Vec3::new(0.0, 3.6, 0.0),
    },
    ModelKeyframe {
        position: Vec3::new(-6.0, -4.0, 0.0),
        rotation: Vec3::new(0.0, 0.2, 0.0),
    },
    ModelKeyframe {
        position: Vec3::new(1.0, -4.0, 1.0),
        rotation: Vec3::new(0.0, 2.4, 0.0),
    },
];

const R34_MODEL: [ModelKeyframe; 3] = [
    ModelKeyframe {
        position: Vec3::new(0.0, -1.0, 0.0),
        rotation: Vec3::new(0.0, 4.2, 0.0),
    },
    ModelKeyframe {
        position: Vec3::new(-6.0, -4.0, 0.5),
        rotation: Vec3::new(0.0, 0.0, 0.0),
    },
    ModelKeyframe {
        position: Vec3::new(1.0, -4.0, 1.0),
        rotation: Vec3::new(0.0, 1.8, 0.0),
    },
];

// The three pages share one camera path; only the model pose differs.
pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "r32",
        camera: &R32_CAMERA,
        model: &R32_MODEL,
        model_scale: MODEL_SCALE,
    },
    Preset {
        name: "r33",
        camera: &R32_CAMERA,
        model: &R33_MODEL,
        model_scale: MODEL_SCALE,
    },
    Preset {
        name: "r34",
        camera: &R32_CAMERA,
        model: &R34_MODEL,
        model_scale: MODEL_SCALE,
    },
];

/// Look up a page preset by name; accepts "r32" and "r-32" forms.
pub fn preset(name: &str) -> Option<&'static Preset> {
    let wanted = name.trim().to_ascii_lowercase().replace('-', "");
    PRESETS.iter().find(|p| p.name == wanted)
}
