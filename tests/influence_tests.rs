// Host-side tests for the influence model.

use field_core::*;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

#[test]
fn intensity_is_zero_at_and_beyond_radius() {
    for d in [150.0, 150.5, 300.0, 1.0e9, f32::MAX, f32::INFINITY] {
        assert_eq!(compute_intensity(d, 150.0), 0.0, "distance {d}");
    }
}

#[test]
fn intensity_is_one_at_the_pointer() {
    assert_eq!(compute_intensity(0.0, 150.0), 1.0);
    assert_eq!(compute_intensity(0.0, 1.0), 1.0);
}

#[test]
fn intensity_falls_off_linearly() {
    assert!((compute_intensity(75.0, 150.0) - 0.5).abs() < 1e-6);
    assert!((compute_intensity(100.0, 500.0) - 0.8).abs() < 1e-6);
    let mut prev = 1.0;
    for step in 1..=150 {
        let i = compute_intensity(step as f32, 150.0);
        assert!(i <= prev, "intensity increased at {step}");
        prev = i;
    }
}

#[test]
fn intensity_survives_bad_inputs() {
    assert_eq!(compute_intensity(f32::NAN, 150.0), 0.0);
    // a zero radius is clamped instead of dividing by zero
    let i = compute_intensity(0.5, 0.0);
    assert!(i.is_finite() && (0.0..=1.0).contains(&i));
}

#[test]
fn angle_follows_atan2() {
    assert_eq!(compute_angle(1.0, 0.0), 0.0);
    assert!((compute_angle(0.0, 1.0) - FRAC_PI_2).abs() < 1e-6);
    assert_eq!(compute_angle(0.0, 0.0), 0.0);
}

#[test]
fn full_intensity_moves_by_strength() {
    let origin = Vec2::new(10.0, 10.0);
    let repel = displacement(origin, origin, 1.0, 20.0, Direction::Repel);
    let attract = displacement(origin, origin, 1.0, 20.0, Direction::Attract);
    assert!((repel.length() - 20.0).abs() < 1e-5);
    assert!((attract.length() - 20.0).abs() < 1e-5);
    assert_eq!(repel, -attract);
}

#[test]
fn repel_points_away_and_attract_points_toward() {
    let origin = Vec2::new(10.0, 10.0);
    let pointer = Vec2::new(110.0, 10.0);
    let i = compute_intensity(origin.distance(pointer), 150.0);
    let away = displacement(origin, pointer, i, 20.0, Direction::Repel);
    let toward = displacement(origin, pointer, i, 20.0, Direction::Attract);
    assert!(away.x < 0.0 && away.y.abs() < 1e-5);
    assert!(toward.x > 0.0);
    assert!((away.length() - 20.0 / 3.0).abs() < 1e-4);
}

#[test]
fn direction_and_falloff_parse_from_strings() {
    assert_eq!("repel".parse::<Direction>(), Ok(Direction::Repel));
    assert_eq!("Attract".parse::<Direction>(), Ok(Direction::Attract));
    assert!("sideways".parse::<Direction>().is_err());
    assert_eq!("smooth".parse::<Falloff>(), Ok(Falloff::Smooth));
    assert_eq!(Direction::Repel.sign(), -1.0);
    assert_eq!(Direction::Attract.to_string(), "attract");
}
