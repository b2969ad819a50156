//! Inertial scroll physics with edge bounce
//!
//! One call per surface per frame. The wheel feeds a velocity that decays
//! exponentially; hitting an edge fast enough converts that velocity into an
//! overscroll that springs back on its own. The host's scroll offset is only
//! ever written inside `[0, max_scroll_offset]` - overscroll lives purely in
//! [`SmoothScrollState`] for the renderer to draw.
//!
//! Sign conventions follow the wheel: a positive wheel delta scrolls toward
//! the top, a positive velocity moves the offset toward `0`, and a positive
//! overscroll means the top edge was exceeded.

use glide_animation::{ease_out, snap_to, snap_to_zero};
use glide_core::ScrollSurface;

use crate::config::ScrollConfig;
use crate::state::SmoothScrollState;

/// Advance `state` by one frame and write the clamped offset back to `surface`.
///
/// Returns true while the surface is still animating (momentum or bounce).
///
/// Does nothing when the surface cannot scroll. An out-of-range offset (for
/// example after the content shrank) is re-clamped before anything else; a
/// non-positive `dt` then leaves `state` untouched.
pub fn update_scroll<S>(
    state: &mut SmoothScrollState,
    surface: &mut S,
    wheel_delta: f32,
    dt: f32,
    config: &ScrollConfig,
) -> bool
where
    S: ScrollSurface + ?Sized,
{
    let max_offset = surface.max_scroll_offset();
    if !(max_offset > 0.0) {
        return false;
    }

    let previous = surface.scroll_offset();
    let mut offset = clamp_offset(previous, max_offset);
    if offset != previous {
        tracing::debug!(
            "re-clamping {:?} offset {:.1} -> {:.1} (max {:.1})",
            surface.id(),
            previous,
            offset,
            max_offset
        );
        surface.set_scroll_offset(offset);
    }

    if !(dt > 0.0 && dt.is_finite()) {
        return state.is_animating();
    }

    let max_overscroll = config.max_overscroll.max(0.0);
    state.overscroll_target = state.overscroll_target.clamp(-max_overscroll, max_overscroll);
    state.overscroll_visual = state.overscroll_visual.clamp(-max_overscroll, max_overscroll);

    let wheel_delta = if wheel_delta.is_finite() {
        wheel_delta
    } else {
        0.0
    };

    // Edge flags use the resting offset from the previous frame
    let at_top = offset <= 0.0;
    let at_bottom = offset >= max_offset;

    if wheel_delta != 0.0 {
        let pushing_past = (at_top && wheel_delta > 0.0) || (at_bottom && wheel_delta < 0.0);
        if pushing_past {
            if config.bounce_enabled {
                let push = wheel_delta * config.scroll_multiplier * config.overscroll_multiplier;
                state.overscroll_target =
                    (state.overscroll_target + push).clamp(-max_overscroll, max_overscroll);
            }
            // Leftover momentum would fight the bounce
            state.velocity = 0.0;
        } else {
            let impulse = wheel_delta * config.scroll_multiplier;
            if state.velocity != 0.0 && state.velocity.signum() != impulse.signum() {
                state.velocity = 0.0;
            }
            state.velocity += impulse;
            state.overscroll_target = 0.0;
        }
    }

    if state.velocity.abs() > config.velocity_epsilon {
        let tentative = offset - state.velocity * dt;
        let crosses_top = tentative < 0.0;
        let crosses_bottom = tentative > max_offset;
        let hard_hit = (crosses_top || crosses_bottom)
            && config.bounce_enabled
            && state.velocity.abs() > config.hard_hit_velocity;

        if hard_hit {
            let magnitude = (state.velocity.abs() * config.bounce_strength).min(max_overscroll);
            state.overscroll_target = if crosses_top { magnitude } else { -magnitude };
            tracing::debug!(
                "{:?} hit {} edge at {:.1} px/s, bounce {:.1}",
                surface.id(),
                if crosses_top { "top" } else { "bottom" },
                state.velocity,
                state.overscroll_target
            );
            state.velocity = 0.0;
            offset = if crosses_top { 0.0 } else { max_offset };
        } else {
            offset = tentative.clamp(0.0, max_offset);
        }

        state.velocity = ease_out(state.velocity, 0.0, config.velocity_decay, dt);
        state.velocity = snap_to_zero(state.velocity, config.velocity_epsilon);
    } else {
        state.velocity = 0.0;
    }

    if state.overscroll_target != 0.0 {
        state.overscroll_target = ease_out(state.overscroll_target, 0.0, config.bounce_decay, dt);
        state.overscroll_target = snap_to_zero(state.overscroll_target, config.overscroll_epsilon);
    }

    state.overscroll_visual = ease_out(
        state.overscroll_visual,
        state.overscroll_target,
        config.visual_follow_rate,
        dt,
    );
    state.overscroll_visual = snap_to(
        state.overscroll_visual,
        state.overscroll_target,
        config.overscroll_epsilon,
    )
    .clamp(-max_overscroll, max_overscroll);

    tracing::trace!(
        "scroll {:?} wheel={:.2} offset: {:.1} -> {:.1}, velocity={:.1}, overscroll={:.1}/{:.1}, max={:.0}",
        surface.id(),
        wheel_delta,
        previous,
        offset,
        state.velocity,
        state.overscroll_target,
        state.overscroll_visual,
        max_offset
    );

    surface.set_scroll_offset(offset);
    state.is_animating()
}

/// Clamp an offset into `[0, max_offset]`, mapping NaN to the top.
pub fn clamp_offset(offset: f32, max_offset: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max_offset.max(0.0))
}
