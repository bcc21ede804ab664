#![cfg(target_arch = "wasm32")]
//! Scroll-driven 3D showroom front-end.
//!
//! The page constructs one [`ShowcasePage`] per model page, handing it the
//! render callback of its external renderer. The crate owns section
//! navigation (wheel / keyboard / nav dots), the eased progress tween, and
//! the per-frame keyframe blend; the JS side owns asset loading and drawing.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use crate::core::constants::DEFAULT_ASPECT;
use crate::core::{Camera, ModelTransform, PoseDriver, SectionController};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showroom-web starting");
    Ok(())
}

fn to_js_err(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn window_aspect() -> f32 {
    let dims = web::window().and_then(|w| {
        let width = w.inner_width().ok()?.as_f64()?;
        let height = w.inner_height().ok()?.as_f64()?;
        (height > 0.0).then(|| (width / height) as f32)
    });
    dims.unwrap_or(DEFAULT_ASPECT)
}

/// One model page's scroll rig: controller, pose driver, and input wiring.
#[wasm_bindgen]
pub struct ShowcasePage {
    controller: Rc<RefCell<SectionController>>,
    model: Rc<RefCell<Option<ModelTransform>>>,
    model_scale: f32,
    wiring: events::NavWiring,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    started: Rc<RefCell<bool>>,
}

#[wasm_bindgen]
impl ShowcasePage {
    /// Build the rig for the named model page ("r32", "r33", "r34").
    /// `render_frame(cameraPose, modelPose | null)` is called once per frame.
    #[wasm_bindgen(constructor)]
    pub fn new(model_name: &str, render_frame: js_sys::Function) -> Result<ShowcasePage, JsValue> {
        let document = dom::window_document()
            .ok_or_else(|| JsValue::from_str("no window/document available"))?;

        let preset = crate::core::preset(model_name).ok_or_else(|| {
            JsValue::from_str(&format!("unknown showcase model: {model_name:?}"))
        })?;
        let track = preset.track().map_err(to_js_err)?;

        let controller = Rc::new(RefCell::new(
            SectionController::new(track.len()).map_err(to_js_err)?,
        ));
        let model: Rc<RefCell<Option<ModelTransform>>> = Rc::new(RefCell::new(None));
        let clock = frame::SharedClock::new();

        let wiring = events::NavWiring {
            document,
            controller: controller.clone(),
            clock: clock.clone(),
        };

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            controller: controller.clone(),
            track,
            driver: PoseDriver::new(preset.model_scale),
            camera: Camera::initial(window_aspect()),
            model: model.clone(),
            renderer: render::RendererHandle::new(render_frame),
            clock,
        }));

        log::info!("[page] {} rig ready", preset.name);
        Ok(ShowcasePage {
            controller,
            model,
            model_scale: preset.model_scale,
            wiring,
            frame_ctx,
            started: Rc::new(RefCell::new(false)),
        })
    }

    /// Wire the input listeners and start the render-loop subscription.
    /// Calling this more than once is a no-op.
    pub fn start(&self) {
        if *self.started.borrow() {
            log::warn!("[page] start called twice; ignoring");
            return;
        }
        *self.started.borrow_mut() = true;

        events::wire_wheel(self.wiring.clone());
        events::wire_keydown(self.wiring.clone());
        events::wire_nav_dots(self.wiring.clone());
        dom::set_active_dot(
            &self.wiring.document,
            0,
            self.controller.borrow().section_count(),
        );

        frame::start_loop(self.frame_ctx.clone());
    }

    /// Asset-loader callback: the model object exists from here on, so the
    /// pose driver starts applying model poses. Camera motion is unaffected.
    #[wasm_bindgen(js_name = setModelReady)]
    pub fn set_model_ready(&self) {
        let mut model = self.model.borrow_mut();
        if model.is_none() {
            *model = Some(ModelTransform {
                scale: self.model_scale,
                ..Default::default()
            });
            log::info!("[page] model ready");
        }
    }

    /// Explicit navigation entry for page chrome.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: u32) {
        self.wiring
            .go_to(index as usize, crate::core::InputSource::NavDot);
    }

    #[wasm_bindgen(js_name = currentSection)]
    pub fn current_section(&self) -> u32 {
        self.controller.borrow().section() as u32
    }

    #[wasm_bindgen(js_name = sectionCount)]
    pub fn section_count(&self) -> u32 {
        self.controller.borrow().section_count() as u32
    }
}
