//! Per-character pressure deformation.
//!
//! Glyphs are not eased: the deformation follows the sampler's smoothed
//! cursor directly, which already filters pointer jitter.

use crate::config::FieldConfig;
use crate::driver::Effect;
use crate::surface::{GlyphLayout, Rect, SurfaceMetrics};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub scale_x: f32,
    pub scale_y: f32,
    pub weight: u16,
}

impl GlyphStyle {
    pub const REST: GlyphStyle = GlyphStyle {
        scale_x: 1.0,
        scale_y: 1.0,
        weight: crate::constants::MIN_WEIGHT,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    /// Position in reading order; also the index into the layout.
    pub index: usize,
    pub bounds: Rect,
    pub style: GlyphStyle,
}

/// Map an intensity to a glyph style. `intensity` is clamped to `[0, 1]`, so
/// the weight always lands in `[min_weight, max_weight]`.
pub fn deform(intensity: f32, config: &FieldConfig) -> GlyphStyle {
    let i = if intensity.is_finite() {
        intensity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let lo = config.min_weight.min(config.max_weight);
    let hi = config.min_weight.max(config.max_weight);
    let span = f32::from(hi - lo);
    let weight = lo + (i * span).round() as u16;
    GlyphStyle {
        scale_x: 1.0 - i * config.compression,
        scale_y: 1.0 + i * config.stretch,
        weight: weight.clamp(lo, hi),
    }
}

#[derive(Clone, Debug, Default)]
pub struct GlyphRow {
    glyphs: Vec<Glyph>,
}

impl GlyphRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the glyph set with `count` glyphs at rest.
    pub fn rebuild(&mut self, count: usize, config: &FieldConfig) {
        let rest = deform(0.0, config);
        self.glyphs = (0..count)
            .map(|index| Glyph {
                index,
                bounds: Rect::default(),
                style: rest,
            })
            .collect();
        log::debug!("[glyph] rebuilt {} glyphs", count);
    }

    /// Refresh each glyph's bounds from `layout` and commit its deformation.
    ///
    /// A glyph the layout cannot measure keeps its last known bounds.
    pub fn tick<L: GlyphLayout + ?Sized>(&mut self, cursor: Vec2, config: &FieldConfig, layout: &L) {
        for g in &mut self.glyphs {
            if let Some(b) = layout.glyph_bounds(g.index) {
                g.bounds = b;
            }
            let dist = g.bounds.center().distance(cursor);
            let intensity = config.falloff.intensity(dist, config.influence_radius);
            g.style = deform(intensity, config);
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl<S: GlyphLayout + ?Sized> Effect<S> for GlyphRow {
    type Element = Glyph;

    fn rebuild(&mut self, _metrics: &SurfaceMetrics, config: &FieldConfig, surface: &S) {
        GlyphRow::rebuild(self, surface.glyph_count(), config);
    }

    fn tick(&mut self, pointer: Vec2, config: &FieldConfig, surface: &S) {
        GlyphRow::tick(self, pointer, config, surface);
    }

    fn elements(&self) -> &[Glyph] {
        &self.glyphs
    }
}
