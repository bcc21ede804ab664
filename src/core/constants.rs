// Navigation timing and pose tuning constants shared by the controller,
// pose driver, and the web wiring.

// Progress tween duration for one section transition (seconds)
pub const PROGRESS_TWEEN_SECS: f64 = 1.1;

// Settle windows per input source (seconds). Both exceed the tween duration
// so a transition is fully landed before the next request is accepted.
pub const WHEEL_SETTLE_SECS: f64 = 1.8;
pub const KEY_SETTLE_SECS: f64 = 0.9;
pub const NAV_DOT_SETTLE_SECS: f64 = 0.9;

// Per-frame exponential approach factor for the camera position.
// Applied per rendered frame without delta-time compensation.
pub const CAMERA_POSITION_SMOOTHING: f32 = 0.08;

// Uniform model scale, applied every frame regardless of progress
pub const MODEL_SCALE: f32 = 3.5;

// Camera defaults before the first frame settles onto the keyframe rig
pub const INITIAL_CAMERA_EYE: [f32; 3] = [1.0, 0.1, 6.0];
pub const INITIAL_CAMERA_FOV_DEGREES: f32 = 33.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;
