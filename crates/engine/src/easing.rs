//! Easing curves and progress helpers.

/// Ease-out quartic: `1 - (1 - p)^4`.
///
/// Decelerates toward the end of the animation. Input is clamped to
/// `[0, 1]`; output is monotonically non-decreasing over that range.
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Linear progress ratio `elapsed / total`, clamped to `[0, 1]`.
///
/// A zero total is the degenerate no-steps case and reports full progress
/// immediately.
pub fn progress_ratio(elapsed_ms: u64, total_ms: u64) -> f64 {
    if total_ms == 0 {
        return 1.0;
    }
    (elapsed_ms as f64 / total_ms as f64).clamp(0.0, 1.0)
}
