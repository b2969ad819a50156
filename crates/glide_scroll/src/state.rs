//! Per-surface animation state and the store that owns it

use glide_animation::{ease_out, snap_to};
use glide_core::SurfaceId;
use rustc_hash::FxHashMap;

use crate::config::ScrollbarConfig;

/// Animation state of one scrollable surface.
///
/// A freshly defaulted state is exactly what the engine sees for a surface
/// it has never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothScrollState {
    /// Momentum in pixels/second; positive moves toward the top
    pub velocity: f32,
    /// Where the bounce wants to be: positive past the top, negative past the bottom
    pub overscroll_target: f32,
    /// Smoothed follower of `overscroll_target`, used for drawing
    pub overscroll_visual: f32,
    /// Animated thumb offset from the top of the track
    pub grab_anim: f32,
    /// Scrollbar fade-in opacity
    pub alpha: f32,
}

impl SmoothScrollState {
    /// Whether any part of the state is still moving on its own.
    pub fn is_animating(&self) -> bool {
        self.velocity != 0.0 || self.overscroll_target != 0.0 || self.overscroll_visual != 0.0
    }

    /// Ease the scrollbar thumb toward `target_offset` and fade the bar in.
    pub fn advance_scrollbar(&mut self, target_offset: f32, dt: f32, config: &ScrollbarConfig) {
        if !(dt > 0.0 && dt.is_finite()) {
            return;
        }
        self.grab_anim = ease_out(self.grab_anim, target_offset, config.grab_rate, dt).max(0.0);
        self.grab_anim = snap_to(self.grab_anim, target_offset, 0.01);
        self.alpha = ease_out(self.alpha, 1.0, config.fade_rate, dt).clamp(0.0, 1.0);
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    state: SmoothScrollState,
    last_touched: u64,
}

/// Scroll state for every surface the host has scrolled, keyed by identity.
///
/// Entries are created lazily and never removed implicitly; hosts with
/// short-lived surfaces call [`advance_generation`](Self::advance_generation)
/// once per frame and sweep with [`evict_stale`](Self::evict_stale) or
/// [`retain`](Self::retain).
#[derive(Debug, Default)]
pub struct ScrollStates {
    entries: FxHashMap<SurfaceId, Entry>,
    generation: u64,
}

impl ScrollStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `id`, or a zero state if the surface was never touched.
    pub fn get(&self, id: SurfaceId) -> SmoothScrollState {
        self.peek(id).copied().unwrap_or_default()
    }

    pub fn peek(&self, id: SurfaceId) -> Option<&SmoothScrollState> {
        self.entries.get(&id).map(|entry| &entry.state)
    }

    /// State for `id`, created on first touch.
    pub fn get_or_insert(&mut self, id: SurfaceId) -> &mut SmoothScrollState {
        let generation = self.generation;
        let entry = self.entries.entry(id).or_insert_with(|| {
            tracing::trace!("creating scroll state for {:?}", id);
            Entry {
                state: SmoothScrollState::default(),
                last_touched: generation,
            }
        });
        entry.last_touched = generation;
        &mut entry.state
    }

    pub fn contains(&self, id: SurfaceId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn remove(&mut self, id: SurfaceId) -> Option<SmoothScrollState> {
        self.entries.remove(&id).map(|entry| entry.state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &SmoothScrollState)> {
        self.entries.iter().map(|(id, entry)| (*id, &entry.state))
    }

    /// Mark the start of a new frame for staleness tracking.
    pub fn advance_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drop entries not touched within the last `max_idle` generations.
    ///
    /// Returns how many entries were removed.
    pub fn evict_stale(&mut self, max_idle: u64) -> usize {
        let generation = self.generation;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| generation.wrapping_sub(entry.last_touched) <= max_idle);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            tracing::debug!("evicted {} stale scroll states", evicted);
        }
        evicted
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(SurfaceId, &SmoothScrollState) -> bool,
    {
        self.entries.retain(|id, entry| keep(*id, &entry.state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_default() {
        let states = ScrollStates::new();
        assert_eq!(states.get(SurfaceId(7)), SmoothScrollState::default());
        assert!(!states.contains(SurfaceId(7)));
        assert!(states.is_empty());
    }

    #[test]
    fn test_get_or_insert_is_lazy_and_unique() {
        let mut states = ScrollStates::new();
        states.get_or_insert(SurfaceId(1)).velocity = 42.0;
        states.get_or_insert(SurfaceId(1)).alpha = 0.5;
        states.get_or_insert(SurfaceId(2));

        assert_eq!(states.len(), 2);
        let state = states.get(SurfaceId(1));
        assert_eq!(state.velocity, 42.0);
        assert_eq!(state.alpha, 0.5);
    }

    #[test]
    fn test_evict_stale() {
        let mut states = ScrollStates::new();
        states.get_or_insert(SurfaceId(1));
        states.get_or_insert(SurfaceId(2));

        for _ in 0..5 {
            states.advance_generation();
            states.get_or_insert(SurfaceId(1));
        }

        assert_eq!(states.evict_stale(3), 1);
        assert!(states.contains(SurfaceId(1)));
        assert!(!states.contains(SurfaceId(2)));
        assert_eq!(states.evict_stale(3), 0);
    }

    #[test]
    fn test_retain_and_remove() {
        let mut states = ScrollStates::new();
        for id in 0..4 {
            states.get_or_insert(SurfaceId(id));
        }
        states.retain(|id, _| id.raw() % 2 == 0);
        assert_eq!(states.len(), 2);

        assert!(states.remove(SurfaceId(0)).is_some());
        assert!(states.remove(SurfaceId(0)).is_none());
        assert_eq!(states.len(), 1);
    }

    #[test]
    fn test_advance_scrollbar_eases_and_fades_in() {
        let config = ScrollbarConfig::default();
        let mut state = SmoothScrollState::default();

        state.advance_scrollbar(100.0, 1.0 / 60.0, &config);
        assert!(state.grab_anim > 0.0 && state.grab_anim < 100.0);
        assert!(state.alpha > 0.0 && state.alpha < 1.0);

        for _ in 0..240 {
            state.advance_scrollbar(100.0, 1.0 / 60.0, &config);
        }
        assert_eq!(state.grab_anim, 100.0);
        assert!(state.alpha > 0.999);
    }

    #[test]
    fn test_advance_scrollbar_zero_dt_is_noop() {
        let config = ScrollbarConfig::default();
        let mut state = SmoothScrollState {
            grab_anim: 12.0,
            alpha: 0.3,
            ..Default::default()
        };
        state.advance_scrollbar(100.0, 0.0, &config);
        assert_eq!(state.grab_anim, 12.0);
        assert_eq!(state.alpha, 0.3);
    }
}
