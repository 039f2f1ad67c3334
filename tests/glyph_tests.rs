// Host-side tests for the text pressure glyph store.

use field_core::*;
use glam::Vec2;

struct RowLayout {
    boxes: Vec<Option<Rect>>,
}

impl RowLayout {
    // 50x50 glyphs, 100px apart
    fn evenly_spaced(n: usize) -> Self {
        Self {
            boxes: (0..n)
                .map(|i| Some(Rect::new(i as f32 * 100.0, 0.0, 50.0, 50.0)))
                .collect(),
        }
    }
}

impl GlyphLayout for RowLayout {
    fn glyph_count(&self) -> usize {
        self.boxes.len()
    }
    fn glyph_bounds(&self, index: usize) -> Option<Rect> {
        self.boxes.get(index).copied().flatten()
    }
}

#[test]
fn deform_maps_intensity_to_style() {
    let cfg = FieldConfig::text_pressure();
    let rest = deform(0.0, &cfg);
    assert_eq!(rest, GlyphStyle::REST);

    let full = deform(1.0, &cfg);
    assert!((full.scale_x - 0.8).abs() < 1e-6);
    assert!((full.scale_y - 1.5).abs() < 1e-6);
    assert_eq!(full.weight, 900);

    assert_eq!(deform(0.5, &cfg).weight, 500);
}

#[test]
fn weight_stays_in_bounds_for_any_distance() {
    let cfg = FieldConfig::text_pressure();
    for d in [0.0, 0.001, 1.0, 250.0, 499.9, 500.0, 1.0e6, f32::MAX, f32::INFINITY] {
        let style = deform(compute_intensity(d, cfg.influence_radius), &cfg);
        assert!(
            (cfg.min_weight..=cfg.max_weight).contains(&style.weight),
            "weight {} out of range at distance {d}",
            style.weight
        );
        assert!(style.scale_x > 0.0 && style.scale_y > 0.0);
    }
}

#[test]
fn out_of_range_intensity_is_clamped() {
    let cfg = FieldConfig::text_pressure();
    assert_eq!(deform(7.0, &cfg).weight, 900);
    assert_eq!(deform(-3.0, &cfg).weight, 100);
    assert_eq!(deform(f32::NAN, &cfg), GlyphStyle::REST);
}

#[test]
fn scale_x_stays_positive_at_max_compression() {
    let cfg = FieldConfig {
        compression: 5.0,
        ..FieldConfig::text_pressure()
    }
    .sanitized();
    assert!(deform(1.0, &cfg).scale_x > 0.0);
}

#[test]
fn custom_weight_range_is_respected() {
    let cfg = FieldConfig {
        min_weight: 300,
        max_weight: 700,
        ..FieldConfig::text_pressure()
    };
    assert_eq!(deform(0.0, &cfg).weight, 300);
    assert_eq!(deform(1.0, &cfg).weight, 700);
}

#[test]
fn tick_deforms_glyphs_by_their_own_distance() {
    let cfg = FieldConfig::text_pressure();
    let layout = RowLayout::evenly_spaced(3);
    let mut row = GlyphRow::new();
    row.rebuild(layout.glyph_count(), &cfg);
    assert_eq!(row.len(), 3);

    // cursor on the center of the middle glyph
    row.tick(Vec2::new(125.0, 25.0), &cfg, &layout);
    let g = row.glyphs();
    assert_eq!(g[1].style.weight, 900);
    // neighbours are 100px away: intensity 0.8
    assert_eq!(g[0].style.weight, 740);
    assert_eq!(g[2].style.weight, 740);
    assert!((g[0].style.scale_y - 1.4).abs() < 1e-5);
    assert_eq!(g[0].bounds, Rect::new(0.0, 0.0, 50.0, 50.0));
}

#[test]
fn glyphs_rest_when_cursor_is_parked() {
    let cfg = FieldConfig::text_pressure();
    let layout = RowLayout::evenly_spaced(4);
    let mut row = GlyphRow::new();
    row.rebuild(4, &cfg);
    row.tick(FieldSampler::sentinel(), &cfg, &layout);
    assert!(row.glyphs().iter().all(|g| g.style == GlyphStyle::REST));
}

#[test]
fn unmeasurable_glyph_keeps_last_bounds() {
    let cfg = FieldConfig::text_pressure();
    let mut layout = RowLayout::evenly_spaced(2);
    let mut row = GlyphRow::new();
    row.rebuild(2, &cfg);
    row.tick(Vec2::ZERO, &cfg, &layout);
    layout.boxes[1] = None;
    row.tick(Vec2::ZERO, &cfg, &layout);
    assert_eq!(row.glyphs()[1].bounds, Rect::new(100.0, 0.0, 50.0, 50.0));
}
