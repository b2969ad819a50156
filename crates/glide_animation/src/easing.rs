//! Exponential easing

/// Move `current` toward `target` by the fraction `1 - e^(-rate * dt)`.
///
/// Returns `current` unchanged when `dt` or `rate` is not a positive finite
/// number, so a stalled or misbehaving timer never moves state.
#[inline]
pub fn ease_out(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    if !(dt > 0.0 && dt.is_finite()) || !(rate > 0.0 && rate.is_finite()) {
        return current;
    }
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

/// Return `0.0` once `|value| < epsilon`, otherwise `value`.
#[inline]
pub fn snap_to_zero(value: f32, epsilon: f32) -> f32 {
    if value.abs() < epsilon {
        0.0
    } else {
        value
    }
}

/// Return `target` once `value` is within `epsilon` of it, otherwise `value`.
#[inline]
pub fn snap_to(value: f32, target: f32, epsilon: f32) -> f32 {
    if (value - target).abs() < epsilon {
        target
    } else {
        value
    }
}
