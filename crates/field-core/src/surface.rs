//! Narrow commit interface between the core and a presentation backend.

use crate::config::FieldConfig;
use crate::error::SurfaceError;
use glam::Vec2;

/// Axis-aligned box in surface-local CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Per-frame measurement of the presentation target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceMetrics {
    /// Top-left of the surface in pointer (viewport) space.
    pub origin: Vec2,
    pub size: Vec2,
}

impl SurfaceMetrics {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceStatus {
    Ready(SurfaceMetrics),
    /// Present but zero-sized or hidden.
    Unavailable,
    /// Torn down; no further frames should run.
    Detached,
}

/// A presentation backend receiving committed elements of type `T`.
pub trait Surface<T> {
    /// Measure the surface. Called once at the start of every frame; the
    /// result must not be cached across frames.
    fn probe(&mut self) -> SurfaceStatus;

    /// Present the current element states.
    fn commit(&mut self, elements: &[T], config: &FieldConfig) -> Result<(), SurfaceError>;
}

/// Layout of the glyphs backing a `GlyphRow`, read fresh every tick.
pub trait GlyphLayout {
    fn glyph_count(&self) -> usize;
    /// Bounding box of glyph `index` in surface-local space.
    fn glyph_bounds(&self, index: usize) -> Option<Rect>;
}
