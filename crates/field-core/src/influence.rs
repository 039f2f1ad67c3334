//! Distance → intensity mapping around the pointer.

use crate::constants::MIN_RADIUS;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

/// Linear falloff: 1 at the pointer, 0 at and beyond `radius`.
#[inline]
pub fn compute_intensity(distance: f32, radius: f32) -> f32 {
    if !distance.is_finite() {
        return 0.0;
    }
    let radius = if radius.is_finite() { radius.max(MIN_RADIUS) } else { MIN_RADIUS };
    ((radius - distance.abs()) / radius).clamp(0.0, 1.0)
}

/// Angle of the displacement vector `(dx, dy)` in radians.
#[inline]
pub fn compute_angle(dx: f32, dy: f32) -> f32 {
    dy.atan2(dx)
}

/// Shape of the intensity curve. Every variant is 1 at distance 0, 0 at the
/// radius and monotonically decreasing in between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Falloff {
    #[default]
    Linear,
    /// Smoothstep of the linear term; softer near both ends.
    Smooth,
}

impl Falloff {
    #[inline]
    pub fn intensity(self, distance: f32, radius: f32) -> f32 {
        let t = compute_intensity(distance, radius);
        match self {
            Falloff::Linear => t,
            Falloff::Smooth => t * t * (3.0 - 2.0 * t),
        }
    }
}

impl FromStr for Falloff {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Falloff::Linear),
            "smooth" | "smoothstep" => Ok(Falloff::Smooth),
            _ => Err(()),
        }
    }
}

/// Whether elements are pushed away from or pulled toward the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Repel,
    Attract,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Repel => -1.0,
            Direction::Attract => 1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "repel" | "repulsion" => Ok(Direction::Repel),
            "attract" | "attraction" => Ok(Direction::Attract),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Repel => f.write_str("repel"),
            Direction::Attract => f.write_str("attract"),
        }
    }
}

/// Offset from `origin` along the origin→pointer axis.
///
/// The magnitude is `intensity * strength`; `direction` picks the sign. With
/// the pointer exactly on the origin the axis is +x (`atan2(0, 0) == 0`), so
/// a full-intensity hit still moves the element by `strength`.
#[inline]
pub fn displacement(
    origin: Vec2,
    pointer: Vec2,
    intensity: f32,
    strength: f32,
    direction: Direction,
) -> Vec2 {
    if intensity <= 0.0 {
        return Vec2::ZERO;
    }
    let d = pointer - origin;
    let angle = compute_angle(d.x, d.y);
    Vec2::from_angle(angle) * intensity * strength * direction.sign()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_falloff_matches_linear_at_ends() {
        assert_eq!(Falloff::Smooth.intensity(0.0, 100.0), 1.0);
        assert_eq!(Falloff::Smooth.intensity(100.0, 100.0), 0.0);
        assert!((Falloff::Smooth.intensity(50.0, 100.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_intensity_gives_zero_displacement() {
        let d = displacement(Vec2::ZERO, Vec2::new(5.0, 5.0), 0.0, 20.0, Direction::Repel);
        assert_eq!(d, Vec2::ZERO);
    }
}
