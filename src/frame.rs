//! Per-frame sampling driven by `requestAnimationFrame`.
//!
//! Each frame: advance the section controller to the current time, blend
//! the bounding keyframes at its progress value, write the pose onto the
//! camera/model, and hand both to the external renderer. The frame body is
//! idempotent and side-effect-free beyond those writes.

use crate::core::{blend, Camera, KeyframeTrack, ModelTransform, PoseDriver, SectionController};
use crate::render::RendererHandle;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Seconds-since-page-construction clock, shared between the frame loop and
/// the input wiring so the controller sees one time axis.
#[derive(Clone)]
pub struct SharedClock {
    epoch: Rc<Instant>,
}

impl SharedClock {
    pub fn new() -> Self {
        Self {
            epoch: Rc::new(Instant::now()),
        }
    }

    #[inline]
    pub fn now_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FrameContext {
    pub controller: Rc<RefCell<SectionController>>,
    pub track: KeyframeTrack,
    pub driver: PoseDriver,
    pub camera: Camera,
    // None until the asset loader reports the model ready
    pub model: Rc<RefCell<Option<ModelTransform>>>,
    pub renderer: RendererHandle,
    pub clock: SharedClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_secs();
        self.controller.borrow_mut().tick(now);
        let progress = self.controller.borrow().progress();

        let (camera_pose, model_pose) = blend(&self.track, progress);
        let mut model = self.model.borrow_mut();
        self.driver
            .apply(&mut self.camera, model.as_mut(), &camera_pose, &model_pose);

        if let Err(e) = self.renderer.render(&self.camera, model.as_ref()) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
