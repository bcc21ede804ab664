// Pure event-to-direction mapping, kept off the DOM so it is testable on
// the host. One event moves exactly one section regardless of magnitude.

/// Map a wheel delta to a section step: positive scrolls forward, negative
/// scrolls back. A zero delta carries no direction.
#[inline]
pub fn wheel_direction(delta_y: f64) -> Option<i32> {
    if delta_y > 0.0 {
        Some(1)
    } else if delta_y < 0.0 {
        Some(-1)
    } else {
        None
    }
}

/// Map a keyboard key to a section step. Only these keys participate in
/// section navigation; everything else keeps its default behavior.
#[inline]
pub fn key_direction(key: &str) -> Option<i32> {
    match key {
        "ArrowDown" | " " => Some(1),
        "ArrowUp" => Some(-1),
        _ => None,
    }
}
