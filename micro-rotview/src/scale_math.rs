//! Pure functions that turn one linear progress value into the staggered
//! per-feature fractions and per-tick increments the animation runs on.
//!
//! The numeric shape is part of the visual behavior, including the
//! floor-based switch in [`mirror_value`], so these stay exact.

#[allow(unused_imports)]
use micromath::F32Ext;

/// Scale travelled by one tick before the mirror rate is applied.
pub const STEP_GAP: f32 = 0.05;
/// Divisor of the step switch: `floor(scale / STEP_DIVISOR)` is 0 below it and 1 above.
pub const STEP_DIVISOR: f32 = 0.51;

#[inline]
pub fn inverse(n: u32) -> f32 {
    1.0 / n as f32
}

/// 0 for scale below [`STEP_DIVISOR`], 1 from there up to 1.0.
#[inline]
pub fn scale_factor(scale: f32) -> f32 {
    (scale / STEP_DIVISOR).floor()
}

/// How far `scale` has advanced past the start of segment `i` out of `n`, floored at 0.
#[inline]
pub fn max_scale(scale: f32, i: u32, n: u32) -> f32 {
    (scale - i as f32 * inverse(n)).max(0.0)
}

/// Progress of segment `i` out of `n`, rescaled to `[0, 1]`.
///
/// Segment `i` stays at 0 until `scale` passes `i / n`, then rises to 1
/// as `scale` reaches `(i + 1) / n`, which gives the sequential reveal.
pub fn segment_progress(scale: f32, i: u32, n: u32) -> f32 {
    inverse(n).min(max_scale(scale, i, n)) * n as f32
}

/// Blends `1 / a` and `1 / b` on the step switch of `scale`.
pub fn mirror_value(scale: f32, a: u32, b: u32) -> f32 {
    let k = scale_factor(scale);
    (1.0 - k) * inverse(a) + k * inverse(b)
}

/// Signed scale increment for one tick.
pub fn step_delta(scale: f32, dir: f32, a: u32, b: u32) -> f32 {
    mirror_value(scale, a, b) * dir * STEP_GAP
}
