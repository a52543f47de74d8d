//! Scalar helpers shared by the segmentation walks:
//! - lerp / inverse_lerp (normalize into and out of a window)
//! - clamp / clamp01 (saturating, NaN passes through)
//! - revert / repeat (rate utilities)

/// Linear interpolation between `from` and `to` by `rate`.
#[inline]
pub fn lerp(rate: f32, from: f32, to: f32) -> f32 {
    from * (1.0 - rate) + to * rate
}

/// Normalizes `value` within `from..to` so that `from` maps to 0 and `to` to 1.
///
/// Undefined when `from == to`; the segmentation methods reject or special-case
/// that before calling.
#[inline]
pub fn inverse_lerp(value: f32, from: f32, to: f32) -> f32 {
    (value - from) / (to - from)
}

/// Clamps `value` into `[min, max]`. Assumes `min <= max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value <= min {
        min
    } else if max <= value {
        max
    } else {
        value
    }
}

#[inline]
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Same as `1 - rate`.
#[inline]
pub fn revert(rate: f32) -> f32 {
    1.0 - rate
}

/// Position of `value` inside its own cycle, where one cycle spans `from..to`.
#[inline]
pub fn repeat(value: f32, from: f32, to: f32) -> f32 {
    let p = inverse_lerp(value, from, to);
    p - p.floor()
}
