// Section navigation state machine.
//
// Owns the discrete section index, the continuous scroll progress, the
// in-flight progress tween, and the transition lock. All mutation goes
// through `advance`/`go_to`, which funnel into a single guarded entry
// point; input wiring never checks the lock itself.

use crate::core::constants::{
    KEY_SETTLE_SECS, NAV_DOT_SETTLE_SECS, PROGRESS_TWEEN_SECS, WHEEL_SETTLE_SECS,
};
use crate::core::tween::ProgressTween;

/// Where a navigation request came from. The settle window that locks out
/// further requests is a property of the source, not of the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Wheel,
    Keyboard,
    NavDot,
}

impl InputSource {
    #[inline]
    pub fn settle_secs(self) -> f64 {
        match self {
            InputSource::Wheel => WHEEL_SETTLE_SECS,
            InputSource::Keyboard => KEY_SETTLE_SECS,
            InputSource::NavDot => NAV_DOT_SETTLE_SECS,
        }
    }
}

/// Discrete section index plus continuous progress in `[0, N-1]`.
///
/// Progress's integer part is the base section, its fraction the blend
/// weight toward the next keyframe. Requests that arrive while a settle
/// window is open are dropped, not queued.
#[derive(Debug)]
pub struct SectionController {
    section_count: usize,
    section: usize,
    progress: f32,
    tween: Option<ProgressTween>,
    lock_until: Option<f64>,
}

impl SectionController {
    pub fn new(section_count: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(section_count >= 1, "need at least one section");
        Ok(Self {
            section_count,
            section: 0,
            progress: 0.0,
            tween: None,
            lock_until: None,
        })
    }

    #[inline]
    pub fn section(&self) -> usize {
        self.section
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn is_locked(&self, now_secs: f64) -> bool {
        self.lock_until.is_some_and(|until| now_secs < until)
    }

    /// Step one section in `direction` (+1 or -1), clamped at the ends.
    /// Returns the granted target section, or `None` for a dropped request.
    pub fn advance(&mut self, direction: i32, source: InputSource, now_secs: f64) -> Option<usize> {
        let target = (self.section as i64 + direction as i64)
            .clamp(0, self.section_count as i64 - 1) as usize;
        self.request(target, source, now_secs)
    }

    /// Jump to an explicit section (navigation dots), clamped into range.
    pub fn go_to(&mut self, index: usize, source: InputSource, now_secs: f64) -> Option<usize> {
        let target = index.min(self.section_count - 1);
        self.request(target, source, now_secs)
    }

    // The only place the lock is checked or taken. Lock first, then flip the
    // section and start the tween, so nothing can interleave a second
    // transition before the caller dispatches its side effects.
    fn request(&mut self, target: usize, source: InputSource, now_secs: f64) -> Option<usize> {
        if target == self.section || self.is_locked(now_secs) {
            return None;
        }
        self.lock_until = Some(now_secs + source.settle_secs());
        self.section = target;
        self.tween = Some(ProgressTween::new(
            self.progress,
            target as f32,
            now_secs,
            PROGRESS_TWEEN_SECS,
        ));
        log::info!("[nav] section -> {} ({:?})", target, source);
        Some(target)
    }

    /// Advance the continuous state to `now_secs`: publish the tween's
    /// current value into `progress` and release an expired lock.
    pub fn tick(&mut self, now_secs: f64) {
        if let Some(tween) = self.tween {
            self.progress = tween.value_at(now_secs);
            if tween.finished(now_secs) {
                self.progress = tween.target();
                self.tween = None;
            }
        }
        if let Some(until) = self.lock_until {
            if now_secs >= until {
                self.lock_until = None;
            }
        }
    }
}
