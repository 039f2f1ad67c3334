//! Eased pointer tracking, decoupled from the per-element update.
//!
//! Raw samples are recorded in whatever space the host delivers (viewport
//! space in the browser). The driver translates them into surface-local space
//! on every `advance_relative` using the surface offset probed for that frame,
//! so scrolling under a stationary pointer is tracked correctly.

use crate::constants::{MIN_FACTOR, POINTER_SENTINEL};
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct FieldSampler {
    raw: Vec2,
    smoothed: Vec2,
    smoothing: f32,
    parked: bool,
    /// Set by the first sample after a reset; the next advance snaps to it.
    reentry: bool,
}

impl Default for FieldSampler {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_SMOOTHING)
    }
}

impl FieldSampler {
    /// The sampler starts parked at the sentinel.
    pub fn new(smoothing: f32) -> Self {
        Self {
            raw: Self::sentinel(),
            smoothed: Self::sentinel(),
            smoothing: clamp_factor(smoothing),
            parked: true,
            reentry: false,
        }
    }

    #[inline]
    pub fn sentinel() -> Vec2 {
        Vec2::splat(POINTER_SENTINEL)
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Takes effect on the next `advance`; the current position is kept.
    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = clamp_factor(smoothing);
    }

    /// Record a pointer sample. Nothing visible changes until the next tick.
    pub fn record_pointer(&mut self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.raw = Vec2::new(x, y);
        if self.parked {
            self.parked = false;
            self.reentry = true;
        }
    }

    /// Advance with raw samples already in surface-local space.
    pub fn advance(&mut self) -> Vec2 {
        self.advance_relative(Vec2::ZERO)
    }

    /// Advance one frame, translating the raw sample by `surface_origin`.
    pub fn advance_relative(&mut self, surface_origin: Vec2) -> Vec2 {
        let target = self.target(surface_origin);
        if self.reentry {
            self.smoothed = target;
            self.reentry = false;
        } else {
            self.smoothed += (target - self.smoothed) * self.smoothing;
        }
        self.smoothed
    }

    /// Park raw and smoothed positions at the sentinel (pointer left).
    pub fn reset(&mut self) {
        self.raw = Self::sentinel();
        self.smoothed = Self::sentinel();
        self.parked = true;
        self.reentry = false;
    }

    /// Park only the raw target; the smoothed cursor drifts out over later ticks.
    pub fn reset_raw(&mut self) {
        self.raw = Self::sentinel();
        self.parked = true;
        self.reentry = false;
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    pub fn is_parked(&self) -> bool {
        self.parked
    }

    fn target(&self, surface_origin: Vec2) -> Vec2 {
        if self.parked {
            Self::sentinel()
        } else {
            self.raw - surface_origin
        }
    }
}

#[inline]
fn clamp_factor(f: f32) -> f32 {
    if f.is_finite() {
        f.clamp(MIN_FACTOR, 1.0)
    } else {
        crate::constants::DEFAULT_SMOOTHING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_parked_far_away() {
        let s = FieldSampler::new(0.1);
        assert!(s.is_parked());
        assert_eq!(s.smoothed(), FieldSampler::sentinel());
    }

    #[test]
    fn factor_is_clamped_into_unit_interval() {
        assert_eq!(FieldSampler::new(4.0).smoothing(), 1.0);
        assert!(FieldSampler::new(0.0).smoothing() > 0.0);
    }
}
