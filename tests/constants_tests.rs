// Host-side tests for tuning constants and their relationships.

use field_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn factors_are_within_unit_interval() {
    assert!(DEFAULT_SMOOTHING > 0.0 && DEFAULT_SMOOTHING <= 1.0);
    assert!(GRID_SMOOTHING > 0.0 && GRID_SMOOTHING <= 1.0);
    assert!(GRID_EASING > 0.0 && GRID_EASING <= 1.0);
    assert!(MIN_FACTOR > 0.0 && MIN_FACTOR < GRID_EASING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sentinel_is_outside_every_default_radius() {
    let parked = FieldSampler::sentinel().length();
    assert!(parked > GRID_RADIUS * 10.0);
    assert!(parked > GLYPH_RADIUS * 10.0);
    // even a pointer at the far corner of a large surface stays unaffected
    assert!(POINTER_SENTINEL.abs() > 10_000.0 + GLYPH_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glyph_constants_keep_scales_positive() {
    assert!(GLYPH_COMPRESSION >= 0.0 && GLYPH_COMPRESSION < 1.0);
    assert!(MAX_COMPRESSION < 1.0);
    assert!(GLYPH_STRETCH >= 0.0);
    assert!(MIN_WEIGHT < MAX_WEIGHT);
    assert!(MAX_WEIGHT <= MAX_FONT_WEIGHT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn floors_are_positive() {
    assert!(MIN_SPACING > 0.0);
    assert!(MIN_RADIUS > 0.0);
    assert!(DEFAULT_GAP >= MIN_SPACING);
    assert!(GRID_RADIUS > DEFAULT_GAP);
}
