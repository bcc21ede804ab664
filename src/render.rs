//! Bridge to the external renderer.
//!
//! The page supplies one JS function at construction; every rendered frame
//! it receives the blended camera pose and, once the asset has loaded, the
//! model pose. Layouts:
//!
//! camera: `[eye.x, eye.y, eye.z, lookAt.x, lookAt.y, lookAt.z, fovDegrees]`
//! model:  `[pos.x, pos.y, pos.z, rot.x, rot.y, rot.z, scale]` or `null`
//!
//! The JS side owns model loading, lighting, and drawing, and is expected to
//! recompute its projection when the FOV changes.

use crate::core::{Camera, ModelTransform};
use wasm_bindgen::JsValue;

pub const CAMERA_POSE_FLOATS: usize = 7;
pub const MODEL_POSE_FLOATS: usize = 7;

pub struct RendererHandle {
    render_frame: js_sys::Function,
}

impl RendererHandle {
    pub fn new(render_frame: js_sys::Function) -> Self {
        Self { render_frame }
    }

    /// Invoke the page's render callback for one frame.
    pub fn render(&self, camera: &Camera, model: Option<&ModelTransform>) -> Result<(), JsValue> {
        let camera_buf: [f32; CAMERA_POSE_FLOATS] = [
            camera.eye.x,
            camera.eye.y,
            camera.eye.z,
            camera.target.x,
            camera.target.y,
            camera.target.z,
            camera.fov_y_degrees,
        ];
        let camera_arg = JsValue::from(js_sys::Float32Array::from(camera_buf.as_slice()));

        let model_arg = match model {
            Some(m) => {
                let model_buf: [f32; MODEL_POSE_FLOATS] = [
                    m.position.x,
                    m.position.y,
                    m.position.z,
                    m.rotation.x,
                    m.rotation.y,
                    m.rotation.z,
                    m.scale,
                ];
                JsValue::from(js_sys::Float32Array::from(model_buf.as_slice()))
            }
            None => JsValue::NULL,
        };

        self.render_frame
            .call2(&JsValue::NULL, &camera_arg, &model_arg)?;
        Ok(())
    }
}
