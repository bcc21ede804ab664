// Host-side tests for the section-transition state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.
// Time is injected, so lock windows and tween sampling run against
// synthetic clocks rather than timers.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod section {
        include!("../src/core/section.rs");
    }
}

use crate::core::constants::{
    KEY_SETTLE_SECS, PROGRESS_TWEEN_SECS, WHEEL_SETTLE_SECS,
};
use crate::core::section::{InputSource, SectionController};

fn controller() -> SectionController {
    SectionController::new(3).expect("three sections")
}

#[test]
fn starts_at_section_zero_unlocked() {
    let c = controller();
    assert_eq!(c.section(), 0);
    assert_eq!(c.progress(), 0.0);
    assert!(!c.is_locked(0.0));
}

#[test]
fn advance_grants_and_animates_progress() {
    let mut c = controller();
    assert_eq!(c.advance(1, InputSource::Keyboard, 0.0), Some(1));
    assert_eq!(c.section(), 1);

    // Quadratic ease-in-out hits exactly 0.5 at half the tween duration.
    c.tick(PROGRESS_TWEEN_SECS / 2.0);
    assert!((c.progress() - 0.5).abs() < 1e-6);

    // Lands exactly on the target at the end of the window.
    c.tick(PROGRESS_TWEEN_SECS);
    assert_eq!(c.progress(), 1.0);
}

#[test]
fn tween_publishes_monotonic_intermediate_values() {
    let mut c = controller();
    c.advance(1, InputSource::Keyboard, 0.0);
    let mut prev = c.progress();
    let mut now = 0.0;
    while now < PROGRESS_TWEEN_SECS {
        now += PROGRESS_TWEEN_SECS / 20.0;
        c.tick(now);
        assert!(
            c.progress() >= prev,
            "progress regressed at {now}: {} < {prev}",
            c.progress()
        );
        prev = c.progress();
    }
    assert_eq!(prev, 1.0);
}

#[test]
fn advance_clamps_at_both_ends() {
    let mut c = controller();
    // Backwards from 0 is a no-op: section unchanged, no lock taken.
    assert_eq!(c.advance(-1, InputSource::Wheel, 0.0), None);
    assert_eq!(c.section(), 0);
    assert!(!c.is_locked(0.0));

    // Walk to the last section, letting each settle window expire.
    assert_eq!(c.advance(1, InputSource::Keyboard, 0.0), Some(1));
    assert_eq!(c.advance(1, InputSource::Keyboard, 10.0), Some(2));

    // Forward from the last section: no-op, no tween, no lock.
    let progress_before = {
        c.tick(20.0);
        c.progress()
    };
    assert_eq!(c.advance(1, InputSource::Keyboard, 20.0), None);
    assert_eq!(c.section(), 2);
    assert!(!c.is_locked(20.0));
    c.tick(20.5);
    assert_eq!(c.progress(), progress_before);
}

#[test]
fn requests_during_lock_window_are_dropped() {
    let mut c = controller();
    assert_eq!(c.advance(1, InputSource::Keyboard, 0.0), Some(1));
    assert!(c.is_locked(0.5));

    // Dropped, not queued: section and tween trajectory are untouched.
    assert_eq!(c.advance(1, InputSource::Keyboard, 0.5), None);
    assert_eq!(c.go_to(2, InputSource::NavDot, 0.5), None);
    assert_eq!(c.section(), 1);
    c.tick(PROGRESS_TWEEN_SECS / 2.0);
    assert!((c.progress() - 0.5).abs() < 1e-6);

    // A fresh request succeeds once the settle deadline passes.
    let after = KEY_SETTLE_SECS + 0.01;
    assert!(!c.is_locked(after));
    assert_eq!(c.advance(1, InputSource::Keyboard, after), Some(2));
}

#[test]
fn wheel_lock_outlasts_keyboard_lock() {
    let mut c = controller();
    assert_eq!(c.advance(1, InputSource::Wheel, 0.0), Some(1));
    // Still locked after the keyboard window would have expired.
    assert!(c.is_locked(KEY_SETTLE_SECS + 0.1));
    assert_eq!(c.advance(1, InputSource::Wheel, KEY_SETTLE_SECS + 0.1), None);
    assert!(!c.is_locked(WHEEL_SETTLE_SECS));
    assert_eq!(c.advance(1, InputSource::Wheel, WHEEL_SETTLE_SECS), Some(2));
}

#[test]
fn go_to_matches_advance_from_same_state() {
    let mut via_advance = controller();
    let mut via_go_to = controller();
    assert_eq!(via_advance.advance(1, InputSource::Keyboard, 0.0), Some(1));
    assert_eq!(via_go_to.go_to(1, InputSource::NavDot, 0.0), Some(1));
    for step in 1..=10 {
        let now = PROGRESS_TWEEN_SECS * step as f64 / 10.0;
        via_advance.tick(now);
        via_go_to.tick(now);
        assert_eq!(via_advance.progress(), via_go_to.progress());
        assert_eq!(via_advance.section(), via_go_to.section());
    }
}

#[test]
fn go_to_current_section_is_a_no_op() {
    let mut c = controller();
    assert_eq!(c.go_to(0, InputSource::NavDot, 0.0), None);
    assert!(!c.is_locked(0.0));
}

#[test]
fn go_to_out_of_range_clamps_to_last_section() {
    let mut c = controller();
    assert_eq!(c.go_to(99, InputSource::NavDot, 0.0), Some(2));
    assert_eq!(c.section(), 2);
}

#[test]
fn go_to_can_skip_sections_in_one_tween() {
    let mut c = controller();
    assert_eq!(c.go_to(2, InputSource::NavDot, 0.0), Some(2));
    c.tick(PROGRESS_TWEEN_SECS / 2.0);
    assert!((c.progress() - 1.0).abs() < 1e-6);
    c.tick(PROGRESS_TWEEN_SECS);
    assert_eq!(c.progress(), 2.0);
}

#[test]
fn tween_retargets_from_current_progress_not_base_section() {
    // A request granted right after a settle window may catch the previous
    // tween mid-flight; the new tween starts from wherever progress is.
    let mut c = controller();
    c.advance(1, InputSource::Keyboard, 0.0);

    // Keyboard lock expires at 0.9, before the 1.1 s tween finishes.
    c.tick(0.95);
    let mid = c.progress();
    assert!(mid > 0.0 && mid < 1.0);
    assert_eq!(c.advance(1, InputSource::Keyboard, 0.95), Some(2));

    // The fresh tween picks up from the published mid-flight value.
    c.tick(0.95);
    assert!((c.progress() - mid).abs() < 1e-6);
    c.tick(0.95 + PROGRESS_TWEEN_SECS);
    assert_eq!(c.progress(), 2.0);
}

#[test]
fn progress_stays_within_track_bounds() {
    let mut c = controller();
    let mut now = 0.0;
    for direction in [1, 1, 1, 1, -1, -1, -1, -1, 1] {
        c.advance(direction, InputSource::Wheel, now);
        for step in 0..25 {
            c.tick(now + step as f64 * 0.1);
            assert!(c.progress() >= 0.0 && c.progress() <= 2.0);
            assert!(c.section() <= 2);
        }
        now += 2.5;
    }
}

#[test]
fn controller_requires_at_least_one_section() {
    assert!(SectionController::new(0).is_err());
    assert!(SectionController::new(1).is_ok());
}
