// Eased progress tween, sampled against caller-supplied time.
//
// The tween holds no timers of its own: callers pass the current time in
// seconds (the web layer feeds it from the frame loop, tests feed synthetic
// values), which keeps section transitions deterministic under test.

use crate::core::easing::ease_in_out;

/// One in-flight progress animation from `from` to `to`.
#[derive(Clone, Copy, Debug)]
pub struct ProgressTween {
    from: f32,
    to: f32,
    start_secs: f64,
    duration_secs: f64,
}

impl ProgressTween {
    pub fn new(from: f32, to: f32, start_secs: f64, duration_secs: f64) -> Self {
        Self {
            from,
            to,
            start_secs,
            duration_secs,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Eased value at `now_secs`. Before the start it is `from`; at or after
    /// `start + duration` it is exactly `to`.
    pub fn value_at(&self, now_secs: f64) -> f32 {
        if self.duration_secs <= 0.0 {
            return self.to;
        }
        let t = ((now_secs - self.start_secs) / self.duration_secs) as f32;
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    #[inline]
    pub fn finished(&self, now_secs: f64) -> bool {
        now_secs - self.start_secs >= self.duration_secs
    }
}
