//! Ease-out count-up used by the landing page statistics.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const COUNTER_DURATION_MS: f64 = 1800.0;
pub const COUNTER_FRAME_MS: u32 = 16;

/// Value shown `elapsed_ms` into an animation towards `target`.
///
/// Cubic ease-out, floored. Reaches `target` exactly once
/// `elapsed_ms >= duration_ms`.
pub fn eased_value(target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    let t = if duration_ms <= 0.0 { 1.0 } else { (elapsed_ms / duration_ms).clamp(0.0, 1.0) };
    let eased = 1.0 - (1.0 - t).powi(3);
    (eased * target).floor()
}
