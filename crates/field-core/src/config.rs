//! Animator configuration.
//!
//! `FieldConfig` is always valid: every constructor and `apply` path runs the
//! values through `sanitized`, which clamps out-of-range numbers to safe
//! minimums instead of failing. `PartialConfig` is the string-keyed override
//! layer fed from `data-*` attributes or `FieldHandle::configure`.

use crate::constants::*;
use crate::error::ConfigError;
use crate::influence::{Direction, Falloff};

/// Which effect a config was built for; non-finite values fall back to its defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    DotGrid,
    TextPressure,
}

impl Preset {
    pub fn defaults(self) -> FieldConfig {
        match self {
            Preset::DotGrid => FieldConfig::dot_grid(),
            Preset::TextPressure => FieldConfig::text_pressure(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub preset: Preset,
    pub element_spacing: f32,
    pub element_size: f32,
    pub color: String,
    pub influence_radius: f32,
    pub strength: f32,
    pub easing_factor: f32,
    pub smoothing_factor: f32,
    pub min_weight: u16,
    pub max_weight: u16,
    pub compression: f32,
    pub stretch: f32,
    pub direction: Direction,
    pub falloff: Falloff,
    /// Consecutive unavailable frames tolerated before auto-stop; `None` never stops.
    pub max_unavailable_frames: Option<u32>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::dot_grid()
    }
}

impl FieldConfig {
    /// Defaults for the canvas dot-grid background.
    pub fn dot_grid() -> Self {
        Self {
            preset: Preset::DotGrid,
            element_spacing: DEFAULT_GAP,
            element_size: DEFAULT_DOT_SIZE,
            color: DEFAULT_DOT_COLOR.to_string(),
            influence_radius: GRID_RADIUS,
            strength: GRID_STRENGTH,
            easing_factor: GRID_EASING,
            smoothing_factor: GRID_SMOOTHING,
            min_weight: MIN_WEIGHT,
            max_weight: MAX_WEIGHT,
            compression: GLYPH_COMPRESSION,
            stretch: GLYPH_STRETCH,
            direction: Direction::Repel,
            falloff: Falloff::Linear,
            max_unavailable_frames: None,
        }
    }

    /// Defaults for the per-glyph text pressure effect.
    pub fn text_pressure() -> Self {
        Self {
            preset: Preset::TextPressure,
            influence_radius: GLYPH_RADIUS,
            smoothing_factor: DEFAULT_SMOOTHING,
            easing_factor: 1.0,
            ..Self::dot_grid()
        }
    }

    /// Clamp every field into its safe range.
    pub fn sanitized(mut self) -> Self {
        let base = self.preset.defaults();
        self.element_spacing = floor_or("gap", self.element_spacing, MIN_SPACING, base.element_spacing);
        self.element_size = floor_or("size", self.element_size, 0.0, base.element_size);
        self.influence_radius =
            floor_or("radius", self.influence_radius, MIN_RADIUS, base.influence_radius);
        self.strength = floor_or("strength", self.strength, 0.0, base.strength);
        self.easing_factor = factor_or("easing", self.easing_factor, base.easing_factor);
        self.smoothing_factor = factor_or("smoothing", self.smoothing_factor, base.smoothing_factor);
        self.stretch = floor_or("stretch", self.stretch, 0.0, base.stretch);
        self.compression = if self.compression.is_finite() {
            self.compression.clamp(0.0, MAX_COMPRESSION)
        } else {
            base.compression
        };
        self.min_weight = self.min_weight.min(MAX_FONT_WEIGHT);
        self.max_weight = self.max_weight.min(MAX_FONT_WEIGHT);
        if self.min_weight > self.max_weight {
            log::warn!(
                "[config] min-weight {} above max-weight {}; swapping",
                self.min_weight,
                self.max_weight
            );
            std::mem::swap(&mut self.min_weight, &mut self.max_weight);
        }
        if self.color.trim().is_empty() {
            self.color = base.color;
        }
        self
    }

    /// Merge overrides and report what the change invalidates.
    pub fn apply(&mut self, partial: &PartialConfig) -> ConfigChange {
        let before = self.clone();
        let mut next = self.clone();
        if let Some(v) = partial.element_spacing {
            next.element_spacing = v;
        }
        if let Some(v) = partial.element_size {
            next.element_size = v;
        }
        if let Some(v) = &partial.color {
            next.color = v.clone();
        }
        if let Some(v) = partial.influence_radius {
            next.influence_radius = v;
        }
        if let Some(v) = partial.strength {
            next.strength = v;
        }
        if let Some(v) = partial.easing_factor {
            next.easing_factor = v;
        }
        if let Some(v) = partial.smoothing_factor {
            next.smoothing_factor = v;
        }
        if let Some(v) = partial.min_weight {
            next.min_weight = v;
        }
        if let Some(v) = partial.max_weight {
            next.max_weight = v;
        }
        if let Some(v) = partial.compression {
            next.compression = v;
        }
        if let Some(v) = partial.stretch {
            next.stretch = v;
        }
        if let Some(v) = partial.direction {
            next.direction = v;
        }
        if let Some(v) = partial.falloff {
            next.falloff = v;
        }
        if let Some(v) = partial.max_unavailable_frames {
            next.max_unavailable_frames = (v > 0).then_some(v);
        }
        *self = next.sanitized();
        ConfigChange {
            layout: self.element_spacing != before.element_spacing,
            smoothing: self.smoothing_factor != before.smoothing_factor,
        }
    }
}

/// What a `FieldConfig::apply` call invalidated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigChange {
    /// Element positions depend on the change; rebuild before the next tick.
    pub layout: bool,
    pub smoothing: bool,
}

fn floor_or(name: &str, value: f32, min: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("[config] {name} is not finite; using {fallback}");
        return fallback;
    }
    if value < min {
        log::warn!("[config] {name}={value} below {min}; clamping");
        return min;
    }
    value
}

fn factor_or(name: &str, value: f32, fallback: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("[config] {name} is not finite; using {fallback}");
        return fallback;
    }
    value.clamp(MIN_FACTOR, 1.0)
}

/// Optional overrides, all unset by default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialConfig {
    pub element_spacing: Option<f32>,
    pub element_size: Option<f32>,
    pub color: Option<String>,
    pub influence_radius: Option<f32>,
    pub strength: Option<f32>,
    pub easing_factor: Option<f32>,
    pub smoothing_factor: Option<f32>,
    pub min_weight: Option<u16>,
    pub max_weight: Option<u16>,
    pub compression: Option<f32>,
    pub stretch: Option<f32>,
    pub direction: Option<Direction>,
    pub falloff: Option<Falloff>,
    /// `0` clears the limit.
    pub max_unavailable_frames: Option<u32>,
}

impl PartialConfig {
    /// Keys accepted by `set`, also read as `data-<key>` attributes.
    pub const KEYS: &'static [&'static str] = &[
        "gap",
        "size",
        "color",
        "radius",
        "strength",
        "easing",
        "smoothing",
        "min-weight",
        "max-weight",
        "compression",
        "stretch",
        "direction",
        "falloff",
        "max-unavailable-frames",
    ];

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Parse one string-keyed override.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "gap" | "spacing" => self.element_spacing = Some(parse(value, "gap")?),
            "size" => self.element_size = Some(parse(value, "size")?),
            "color" => {
                if value.is_empty() {
                    return Err(invalid("color", value));
                }
                self.color = Some(value.to_string());
            }
            "radius" => self.influence_radius = Some(parse(value, "radius")?),
            "strength" => self.strength = Some(parse(value, "strength")?),
            "easing" => self.easing_factor = Some(parse(value, "easing")?),
            "smoothing" => self.smoothing_factor = Some(parse(value, "smoothing")?),
            "min-weight" => self.min_weight = Some(parse(value, "min-weight")?),
            "max-weight" => self.max_weight = Some(parse(value, "max-weight")?),
            "compression" => self.compression = Some(parse(value, "compression")?),
            "stretch" => self.stretch = Some(parse(value, "stretch")?),
            "direction" => {
                self.direction = Some(value.parse().map_err(|_| invalid("direction", value))?)
            }
            "falloff" => self.falloff = Some(value.parse().map_err(|_| invalid("falloff", value))?),
            "max-unavailable-frames" => {
                self.max_unavailable_frames = Some(parse(value, "max-unavailable-frames")?)
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Collect overrides from `(key, value)` pairs; bad pairs are logged and skipped.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut partial = Self::default();
        for (k, v) in pairs {
            if let Err(e) = partial.set(k, v) {
                log::warn!("[config] {e}");
            }
        }
        partial
    }
}

fn parse<T: std::str::FromStr>(value: &str, key: &'static str) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| invalid(key, value))
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_non_positive_spacing_and_radius() {
        let cfg = FieldConfig {
            element_spacing: 0.0,
            influence_radius: -5.0,
            ..FieldConfig::dot_grid()
        }
        .sanitized();
        assert_eq!(cfg.element_spacing, MIN_SPACING);
        assert_eq!(cfg.influence_radius, MIN_RADIUS);
    }

    #[test]
    fn sanitized_replaces_nan_with_defaults() {
        let cfg = FieldConfig {
            strength: f32::NAN,
            easing_factor: f32::INFINITY,
            ..FieldConfig::dot_grid()
        }
        .sanitized();
        assert_eq!(cfg.strength, GRID_STRENGTH);
        assert_eq!(cfg.easing_factor, GRID_EASING);
    }

    #[test]
    fn sanitized_swaps_inverted_weights() {
        let cfg = FieldConfig {
            min_weight: 800,
            max_weight: 200,
            ..FieldConfig::text_pressure()
        }
        .sanitized();
        assert_eq!((cfg.min_weight, cfg.max_weight), (200, 800));
    }

    #[test]
    fn non_finite_values_fall_back_to_own_preset() {
        let cfg = FieldConfig {
            influence_radius: f32::NAN,
            smoothing_factor: f32::INFINITY,
            ..FieldConfig::text_pressure()
        }
        .sanitized();
        assert_eq!(cfg.influence_radius, GLYPH_RADIUS);
        assert_eq!(cfg.smoothing_factor, DEFAULT_SMOOTHING);
        assert_eq!(cfg.easing_factor, 1.0);
    }

    #[test]
    fn apply_reports_layout_only_for_spacing() {
        let mut cfg = FieldConfig::dot_grid();
        let mut p = PartialConfig::default();
        p.influence_radius = Some(300.0);
        assert!(!cfg.apply(&p).layout);
        p.element_spacing = Some(40.0);
        assert!(cfg.apply(&p).layout);
        // same spacing again is not a change
        assert!(!cfg.apply(&p).layout);
    }
}
