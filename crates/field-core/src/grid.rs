//! Dot lattice that springs away from the pointer and settles back.

use crate::config::FieldConfig;
use crate::constants::MIN_SPACING;
use crate::driver::Effect;
use crate::influence::displacement;
use crate::surface::SurfaceMetrics;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub origin: Vec2,
    pub current: Vec2,
    pub target: Vec2,
}

impl GridPoint {
    fn at_rest(origin: Vec2) -> Self {
        Self {
            origin,
            current: origin,
            target: origin,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DotGrid {
    points: Vec<GridPoint>,
    rows: usize,
    cols: usize,
    gap: f32,
}

impl DotGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all points and lay out a fresh lattice at rest.
    ///
    /// Rows and columns are `ceil(dimension / gap)`, so a partial cell at the
    /// right or bottom edge still gets a point.
    pub fn rebuild(&mut self, width: f32, height: f32, gap: f32) {
        let gap = if gap.is_finite() { gap.max(MIN_SPACING) } else { MIN_SPACING };
        self.gap = gap;
        self.rows = cell_count(height, gap);
        self.cols = cell_count(width, gap);
        self.points.clear();
        self.points.reserve(self.rows * self.cols);
        let half = gap / 2.0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let origin = Vec2::new(col as f32 * gap + half, row as f32 * gap + half);
                self.points.push(GridPoint::at_rest(origin));
            }
        }
        log::debug!(
            "[grid] rebuilt {}x{} ({} points, gap {})",
            self.cols,
            self.rows,
            self.points.len(),
            gap
        );
    }

    /// Recompute targets from the pointer and ease every point toward its target.
    pub fn tick(&mut self, pointer: Vec2, config: &FieldConfig) {
        let radius = config.influence_radius;
        let easing = config.easing_factor;
        for p in &mut self.points {
            // measured from where the dot is drawn, not where it rests
            let dist = p.current.distance(pointer);
            let intensity = config.falloff.intensity(dist, radius);
            let offset = displacement(p.current, pointer, intensity, config.strength, config.direction);
            p.target = p.origin + offset;
            p.current += (p.target - p.current) * easing;
        }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when every point is within `epsilon` of its origin.
    pub fn is_at_rest(&self, epsilon: f32) -> bool {
        self.points
            .iter()
            .all(|p| p.current.distance(p.origin) <= epsilon)
    }
}

#[inline]
fn cell_count(dimension: f32, gap: f32) -> usize {
    if dimension.is_finite() && dimension > 0.0 {
        (dimension / gap).ceil() as usize
    } else {
        0
    }
}

impl<S: ?Sized> Effect<S> for DotGrid {
    type Element = GridPoint;

    fn rebuild(&mut self, metrics: &SurfaceMetrics, config: &FieldConfig, _surface: &S) {
        DotGrid::rebuild(self, metrics.size.x, metrics.size.y, config.element_spacing);
    }

    fn tick(&mut self, pointer: Vec2, config: &FieldConfig, _surface: &S) {
        DotGrid::tick(self, pointer, config);
    }

    fn elements(&self) -> &[GridPoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_cells_round_up() {
        let mut g = DotGrid::new();
        g.rebuild(101.0, 39.0, 20.0);
        assert_eq!((g.cols(), g.rows()), (6, 2));
    }

    #[test]
    fn nan_dimensions_give_empty_grid() {
        let mut g = DotGrid::new();
        g.rebuild(f32::NAN, 100.0, 20.0);
        assert!(g.is_empty());
    }

    #[test]
    fn zero_gap_is_clamped() {
        let mut g = DotGrid::new();
        g.rebuild(3.0, 2.0, 0.0);
        assert_eq!(g.gap(), MIN_SPACING);
        assert_eq!(g.len(), 6);
    }
}
