/// Quadratic ease-in-out: accelerates to the halfway point, decelerates out.
///
/// Input is clamped to \[0, 1\]; output covers \[0, 1\] with exact endpoints
/// and `ease_in_out(0.5) == 0.5`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}
