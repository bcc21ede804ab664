pub mod camera;
pub mod constants;
pub mod easing;
pub mod keyframes;
pub mod pose;
pub mod presets;
pub mod section;
pub mod tween;

pub use camera::*;
pub use keyframes::*;
pub use pose::*;
pub use presets::*;
pub use section::*;
pub use tween::*;
