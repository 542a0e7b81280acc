/// Divisor turning pointer travel in pixels into rotation degrees.
pub const ROTATION_DOWNSCALE: f64 = 4.0;

/// Signed length of the pointer vector `(dx, dy)` measured tangentially
/// around the center, where `(x, y)` is the pointer relative to the center.
///
/// Positive values mean clockwise motion on screen (pixel Y grows downwards).
#[must_use]
pub fn vector_to_scalar_scroll(dx: f64, dy: f64, x: f64, y: f64) -> f64 {
    let length = dx.hypot(dy);
    let dot = -y * dx + x * dy;
    if dot > 0.0 {
        length
    } else if dot < 0.0 {
        -length
    } else {
        0.0
    }
}
